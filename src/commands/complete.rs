use crate::config::Config;
use crate::error::Result;
use crate::project::Project;
use crate::slash::CompletionProvider;

pub fn execute(project: &Project, config: &Config, query: Option<&str>) -> Result<()> {
    let registry = super::helpers::load_registry(project, config)?;
    let provider = CompletionProvider::new(registry);

    for item in provider.complete(query.unwrap_or_default()) {
        println!("\\{}", item.display);
    }

    Ok(())
}
