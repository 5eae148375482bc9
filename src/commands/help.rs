use crate::config::Config;
use crate::error::Result;
use crate::project::Project;
use crate::slash::help::format_help;

pub fn execute(project: &Project, config: &Config) -> Result<()> {
    let registry = super::helpers::load_registry(project, config)?;
    print!("{}", format_help(&registry.list_commands()));
    Ok(())
}
