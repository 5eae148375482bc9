use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration and command directories
    Show,
}

#[derive(Parser, Debug)]
#[command(name = "slashcmd")]
#[command(about = "Discover and run markdown slash commands", long_about = None)]
#[command(version = env!("SLASHCMD_VERSION"))]
#[command(disable_help_subcommand = true)]
#[command(after_help = "\
COMMAND SOURCES (lowest to highest precedence):
  $XDG_CONFIG_HOME/slashcmd/commands   Shared commands (shown as 'user')
  ~/.slashcmd/commands                 Personal commands (shown as 'user')
  <project>/.slashcmd/commands         Project commands (shown as 'project')

EXAMPLES:
  slashcmd list                        List every available command
  slashcmd run '\\review-pr 123 high'   Resolve a command and preview the prompt
  slashcmd complete rev                Fuzzy-complete command names")]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available commands
    List {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the grouped command help
    Help,

    /// Show one command's metadata and body
    Show {
        /// Full command name, e.g. frontend:review-pr
        name: String,
    },

    /// Resolve an invocation and preview what the agent would receive
    #[command(long_about = "Resolve an invocation and preview what the agent would receive.\n\n\
        The input is parsed like the chat editor does: \\name followed by\n\
        whitespace-separated arguments, with single or double quotes for\n\
        arguments containing spaces. The leading backslash may be omitted.")]
    Run {
        /// Session identifier passed to the agent
        #[arg(long, default_value = "cli")]
        session: String,

        /// The invocation, e.g. '\review-pr 123 "high priority"'
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },

    /// Print completions for a partial command name
    Complete {
        /// Fuzzy query; lists every command when omitted
        query: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}
