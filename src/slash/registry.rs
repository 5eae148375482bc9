//! Name-keyed registry merged from all command roots.

use super::completion::suggest_similar;
use super::definition::Command;
use super::loader::{DirectoryLoader, Origin, SkippedEntry};
use super::roots::RootResolver;
use super::tools::ToolCatalog;
use crate::error::{Result, SlashError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// How many similar names a not-found lookup offers.
const MAX_SUGGESTIONS: usize = 3;

/// One complete load result. Never mutated after construction.
#[derive(Debug, Default)]
pub struct Snapshot {
    commands: Vec<Arc<Command>>,
    by_name: HashMap<String, usize>,
    skipped: Vec<SkippedEntry>,
}

impl Snapshot {
    /// Merge commands given lowest precedence first. A later command replaces
    /// an earlier one with the same name.
    fn merge(commands: Vec<Command>, skipped: Vec<SkippedEntry>) -> Self {
        let mut merged: HashMap<String, Arc<Command>> = HashMap::new();

        for command in commands {
            if let Some(previous) = merged.get(&command.name) {
                tracing::info!(
                    command = %command.name,
                    overridden = %previous.source_path.display(),
                    by = %command.source_path.display(),
                    "command conflict, higher precedence source wins"
                );
            }
            merged.insert(command.name.clone(), Arc::new(command));
        }

        let mut commands: Vec<Arc<Command>> = merged.into_values().collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));

        let by_name = commands
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();

        Self {
            commands,
            by_name,
            skipped,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Command>> {
        self.by_name.get(name).map(|&i| &self.commands[i])
    }

    /// Commands sorted by name.
    pub fn commands(&self) -> &[Arc<Command>] {
        &self.commands
    }

    /// Entries that failed to load during this snapshot's load.
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Registry of commands from the shared, user and project roots.
///
/// Readers always see a complete snapshot: `load` builds a new one off to the
/// side and publishes it with a single swap. Loads are expected to be
/// serialized by the caller.
pub struct CommandRegistry {
    resolver: Box<dyn RootResolver>,
    catalog: Arc<ToolCatalog>,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl CommandRegistry {
    /// Create an empty registry. Call [`load`](Self::load) to populate it.
    pub fn new(resolver: impl RootResolver + 'static, catalog: ToolCatalog) -> Self {
        Self {
            resolver: Box::new(resolver),
            catalog: Arc::new(catalog),
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// Load every root and replace the current snapshot.
    ///
    /// Fails only when all three loaders fail outright; the previous snapshot
    /// is then kept. Partial failures are logged and the commands that did
    /// load are published.
    pub fn load(&self) -> Result<()> {
        let roots = self.resolver.roots();
        let loaders = [
            DirectoryLoader::new(roots.shared, Origin::Shared, Arc::clone(&self.catalog)),
            DirectoryLoader::new(roots.user, Origin::UserHome, Arc::clone(&self.catalog)),
            DirectoryLoader::new(roots.project, Origin::Project, Arc::clone(&self.catalog)),
        ];

        let mut commands = Vec::new();
        let mut skipped = Vec::new();
        let mut failures = Vec::new();

        for loader in &loaders {
            match loader.load() {
                Ok(report) => {
                    commands.extend(report.commands);
                    skipped.extend(report.skipped);
                }
                Err(e) => {
                    tracing::warn!(
                        origin = %loader.origin(),
                        root = %loader.root().display(),
                        error = %e,
                        "failed to load command directory"
                    );
                    failures.push(format!("{} ({}): {}", loader.origin(), loader.root().display(), e));
                }
            }
        }

        if failures.len() == loaders.len() {
            return Err(SlashError::LoadFailed { failures });
        }

        let snapshot = Snapshot::merge(commands, skipped);
        tracing::debug!(commands = snapshot.len(), "command registry loaded");
        *self.snapshot.write() = Arc::new(snapshot);

        Ok(())
    }

    /// Discard the current snapshot and load again from disk.
    pub fn reload(&self) -> Result<()> {
        self.load()
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read())
    }

    /// Exact-name lookup.
    pub fn find_command(&self, name: &str) -> Result<Arc<Command>> {
        self.snapshot()
            .get(name)
            .cloned()
            .ok_or_else(|| SlashError::CommandNotFound {
                name: name.to_string(),
                suggestions: Vec::new(),
            })
    }

    /// Exact-name lookup that attaches similar names when `name` is unknown.
    pub fn find_with_suggestions(&self, name: &str) -> Result<Arc<Command>> {
        let snapshot = self.snapshot();
        if let Some(command) = snapshot.get(name) {
            return Ok(Arc::clone(command));
        }

        let suggestions = suggest_similar(
            name,
            snapshot.commands().iter().map(|c| c.name.as_str()),
            MAX_SUGGESTIONS,
        );
        tracing::debug!(command = %name, suggestions = ?suggestions, "command not found");
        Err(SlashError::CommandNotFound {
            name: name.to_string(),
            suggestions,
        })
    }

    /// A fresh copy of every command, sorted by name.
    pub fn list_commands(&self) -> Vec<Command> {
        self.snapshot()
            .commands()
            .iter()
            .map(|c| Command::clone(c))
            .collect()
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }
}
