use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::error::Result;
use crate::project::Project;
use std::path::Path;

pub fn execute(project: &Project, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => match file {
            Some(path) => validate_file(path),
            None => validate(project),
        },
        ConfigCommands::Show => show(project),
    }
}

fn validate_file(path: &Path) -> Result<()> {
    println!("Validating {}...", path.display());
    match Config::from_file(path) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn validate(project: &Project) -> Result<()> {
    println!("Validating configuration files...\n");

    for path in Config::config_files(project.root()) {
        if path.exists() {
            println!("  {}", path.display());
        } else {
            println!("  {} - not found (optional)", path.display());
        }
    }

    // Loading the merged config validates every file
    println!("\nLoading and validating configuration...");
    match Config::load(project.root()) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn show(project: &Project) -> Result<()> {
    let config = Config::load(project.root())?;
    let roots = config.command_roots(project.root());

    println!("Effective Configuration:");
    println!("(Environment > Project config > Global config > Defaults)\n");

    println!("Project root: {}", project.root().display());

    println!("\nCommand directories (lowest to highest precedence):");
    for (label, dir) in [
        ("shared", &roots.shared),
        ("user", &roots.user),
        ("project", &roots.project),
    ] {
        let state = if dir.is_dir() { "" } else { " (missing)" };
        println!("  {:<8} {}{}", label, dir.display(), state);
    }

    println!("\nTools:");
    println!("  {}", config.tool_catalog().names().join(", "));

    Ok(())
}
