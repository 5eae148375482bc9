//! Where command directories live.

use std::path::PathBuf;

/// The three command roots, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRoots {
    pub shared: PathBuf,
    pub user: PathBuf,
    pub project: PathBuf,
}

/// Supplies command roots to the registry.
///
/// Called on every load, so a resolver may pick up configuration changes
/// between reloads.
pub trait RootResolver: Send + Sync {
    fn roots(&self) -> CommandRoots;
}

impl RootResolver for CommandRoots {
    fn roots(&self) -> CommandRoots {
        self.clone()
    }
}
