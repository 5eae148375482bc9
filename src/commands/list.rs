use crate::config::Config;
use crate::error::Result;
use crate::project::Project;
use crate::slash::Command;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct ListEntry {
    name: String,
    namespace: String,
    description: String,
    argument_hint: String,
    source: String,
    source_path: PathBuf,
}

impl From<Command> for ListEntry {
    fn from(cmd: Command) -> Self {
        Self {
            name: cmd.name,
            namespace: cmd.namespace,
            description: cmd.description,
            argument_hint: cmd.argument_hint,
            source: cmd.source,
            source_path: cmd.source_path,
        }
    }
}

pub fn execute(project: &Project, config: &Config, json: bool) -> Result<()> {
    let registry = super::helpers::load_registry(project, config)?;
    let commands = registry.list_commands();

    if json {
        let entries: Vec<ListEntry> = commands.into_iter().map(ListEntry::from).collect();
        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|e| crate::error::SlashError::Io(e.into()))?;
        println!("{}", rendered);
        return Ok(());
    }

    if commands.is_empty() {
        println!("No commands found.");
        let roots = config.command_roots(project.root());
        println!("Add markdown files to {}", roots.project.display());
        return Ok(());
    }

    let width = commands
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    println!("{:<width$}  {:<24}  DESCRIPTION", "NAME", "SOURCE", width = width);
    for cmd in commands {
        println!(
            "{:<width$}  {:<24}  {}",
            cmd.name,
            cmd.source,
            cmd.description,
            width = width
        );
    }

    Ok(())
}
