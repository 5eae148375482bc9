#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slashcmd::cli::{Cli, Commands};
use slashcmd::commands;
use slashcmd::config::Config;
use slashcmd::project::Project;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = std::env::var("SLASHCMD_LOG")
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    // Logs go to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle commands that don't need a project or config
    if let Commands::Version = cli.command {
        commands::version::execute()?;
        return Ok(());
    }

    let working_dir = match &cli.dir {
        Some(dir) => slashcmd::utils::path::absolutize(dir)
            .with_context(|| format!("invalid directory: {}", dir.display()))?,
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    let project = Project::detect_from(&working_dir);

    if let Commands::Config { command } = &cli.command {
        commands::config::execute(&project, command)?;
        return Ok(());
    }

    let config = Config::load(project.root())?;

    match &cli.command {
        Commands::List { json } => commands::list::execute(&project, &config, *json)?,
        Commands::Help => commands::help::execute(&project, &config)?,
        Commands::Show { name } => commands::show::execute(&project, &config, name)?,
        Commands::Run { session, input } => {
            commands::run::execute(&project, &config, &working_dir, session, input)?
        }
        Commands::Complete { query } => {
            commands::complete::execute(&project, &config, query.as_deref())?
        }
        Commands::Version | Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
