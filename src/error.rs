use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by external collaborators (agent runtime, message store).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum SlashError {
    #[error("command '{name}' not found{}", did_you_mean(.suggestions))]
    CommandNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("{message}")]
    InvalidArguments { command: String, message: String },

    #[error("{}", describe_unreadable(.paths))]
    UnreadableFiles { paths: Vec<PathBuf> },

    #[error("failed to execute command '{command}': {source}")]
    Execution {
        command: String,
        #[source]
        source: CollaboratorError,
    },

    #[error("failed to create help message: {source}")]
    MessageCreation {
        #[source]
        source: CollaboratorError,
    },

    #[error("execution of command '{command}' was cancelled")]
    Cancelled { command: String },

    #[error("all command sources failed to load: {}", join_failures(.failures))]
    LoadFailed { failures: Vec<String> },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SlashError {
    /// Short machine-readable name of the failure class, for UI display.
    pub fn kind(&self) -> &'static str {
        match self {
            SlashError::CommandNotFound { .. } => "not_found",
            SlashError::InvalidArguments { .. } => "validation",
            SlashError::UnreadableFiles { .. } => "file_read",
            SlashError::Execution { .. } => "agent_invocation",
            SlashError::MessageCreation { .. } => "message_creation",
            SlashError::Cancelled { .. } => "cancelled",
            SlashError::LoadFailed { .. } => "load",
            SlashError::InvalidConfig(_) | SlashError::ConfigParse(_) => "config",
            SlashError::Io(_) => "io",
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

fn join_failures(failures: &[String]) -> String {
    failures.join("; ")
}

fn describe_unreadable(paths: &[PathBuf]) -> String {
    let joined = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if paths.len() == 1 {
        format!("failed to read referenced file: {}", joined)
    } else {
        format!("failed to read referenced files: {}", joined)
    }
}

pub type Result<T> = std::result::Result<T, SlashError>;
