use crate::config::Config;
use crate::error::Result;
use crate::project::Project;
use crate::slash::{ArgumentCount, RequiredArguments};

pub fn execute(project: &Project, config: &Config, name: &str) -> Result<()> {
    let registry = super::helpers::load_registry(project, config)?;
    let name = name.trim_start_matches('\\');

    let command = registry.find_with_suggestions(name)?;

    let required = RequiredArguments::extract(&command.content, &command.argument_hint);
    let arguments = match required.required {
        ArgumentCount::Variable => "any number".to_string(),
        ArgumentCount::AtLeast(0) => "none".to_string(),
        ArgumentCount::AtLeast(n) => format!("at least {}", n),
    };

    println!("Name:          {}", command.name);
    if !command.namespace.is_empty() {
        println!("Namespace:     {}", command.namespace);
    }
    println!("Source:        {}", command.source);
    println!("Path:          {}", command.source_path.display());
    if !command.description.is_empty() {
        println!("Description:   {}", command.description);
    }
    if !command.argument_hint.is_empty() {
        println!("Argument hint: {}", command.argument_hint);
    }
    println!("Arguments:     {}", arguments);
    if command.allowed_tools.is_empty() {
        println!("Allowed tools: all");
    } else {
        println!("Allowed tools: {}", command.allowed_tools.join(", "));
    }

    println!();
    println!("{}", command.content);

    Ok(())
}
