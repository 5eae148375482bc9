//! Data structures for loaded slash commands.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where a command came from, as exposed to consumers.
///
/// The personal and shared config directories both map to `User`; callers
/// cannot tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandSource {
    Project,
    User,
}

impl CommandSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandSource::Project => "project",
            CommandSource::User => "user",
        }
    }

    /// Build the provenance tag shown next to a command, e.g. `project:frontend`.
    pub fn indicator(&self, namespace: &str) -> String {
        if namespace.is_empty() {
            self.as_str().to_string()
        } else {
            format!("{}:{}", self.as_str(), namespace)
        }
    }
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slash command loaded from a markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Full name including namespace, e.g. `frontend:components:button`
    pub name: String,

    /// Name minus its final segment; empty for root-level commands
    pub namespace: String,

    pub description: String,

    /// Free-form hint such as `[pr-number] [priority]`
    pub argument_hint: String,

    /// Tool names allowed while running this command (empty means all)
    pub allowed_tools: Vec<String>,

    /// Body with frontmatter removed, placeholders still unresolved
    pub content: String,

    pub source_path: PathBuf,

    /// Provenance tag, e.g. `project`, `user:frontend`
    pub source: String,
}

impl Command {
    /// Final segment of the name.
    pub fn leaf_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    pub fn is_namespaced(&self) -> bool {
        !self.namespace.is_empty()
    }
}
