//! Loading commands from one directory tree.

use super::definition::{Command, CommandSource};
use super::frontmatter::parse_frontmatter;
use super::tools::ToolCatalog;
use crate::error::Result;
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Which configured root a loader reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// System-wide config directory
    Shared,
    /// Personal directory under the home folder
    UserHome,
    /// Directory inside the current project
    Project,
}

impl Origin {
    pub fn source(&self) -> CommandSource {
        match self {
            Origin::Shared | Origin::UserHome => CommandSource::User,
            Origin::Project => CommandSource::Project,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Shared => write!(f, "shared"),
            Origin::UserHome => write!(f, "user"),
            Origin::Project => write!(f, "project"),
        }
    }
}

/// A file or directory entry that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Commands found under one root plus everything skipped along the way.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub commands: Vec<Command>,
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    fn skip(mut self, path: PathBuf, reason: String) -> Self {
        tracing::warn!(path = %path.display(), reason = %reason, "skipping command entry");
        self.skipped.push(SkippedEntry { path, reason });
        self
    }
}

pub struct DirectoryLoader {
    root: PathBuf,
    origin: Origin,
    catalog: Arc<ToolCatalog>,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>, origin: Origin, catalog: Arc<ToolCatalog>) -> Self {
        Self {
            root: root.into(),
            origin,
            catalog,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Walk the root and load every `.md` file.
    ///
    /// A missing root yields an empty report. A root that exists but cannot
    /// be listed is an error. Problems with individual entries are recorded
    /// in [`LoadReport::skipped`] and never abort the walk.
    pub fn load(&self) -> Result<LoadReport> {
        match std::fs::read_dir(&self.root) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(origin = %self.origin, root = %self.root.display(), "command directory absent");
                return Ok(LoadReport::default());
            }
            Err(e) => return Err(e.into()),
        }

        let report = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .fold(LoadReport::default(), |mut report, entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        let path = e
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| self.root.clone());
                        return report.skip(path, e.to_string());
                    }
                };

                // Symlinks are followed at read time; broken ones end up skipped.
                if entry.file_type().is_dir() || !is_markdown(entry.path()) {
                    return report;
                }

                match self.load_file(entry.path()) {
                    Ok(command) => {
                        report.commands.push(command);
                        report
                    }
                    Err(e) => report.skip(entry.path().to_path_buf(), e.to_string()),
                }
            });

        tracing::debug!(
            origin = %self.origin,
            root = %self.root.display(),
            loaded = report.commands.len(),
            skipped = report.skipped.len(),
            "loaded command directory"
        );

        Ok(report)
    }

    fn load_file(&self, path: &Path) -> io::Result<Command> {
        let document = std::fs::read_to_string(path)?;
        let (frontmatter, body) = parse_frontmatter(&document);

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let (name, namespace) = derive_name(relative);

        let allowed_tools = self.catalog.validate(frontmatter.allowed_tools, &name);

        Ok(Command {
            source: self.origin.source().indicator(&namespace),
            name,
            namespace,
            description: frontmatter.description,
            argument_hint: frontmatter.argument_hint,
            allowed_tools,
            content: body,
            source_path: path.to_path_buf(),
        })
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Derive `(name, namespace)` from a path relative to the command root.
///
/// `frontend/components/button.md` becomes
/// `("frontend:components:button", "frontend:components")`.
pub fn derive_name(relative: &Path) -> (String, String) {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let leaf = segments.pop().unwrap_or_default();
    let leaf = match leaf.len().checked_sub(3) {
        Some(cut) if leaf.is_char_boundary(cut) && leaf[cut..].eq_ignore_ascii_case(".md") => {
            leaf[..cut].to_string()
        }
        _ => leaf,
    };

    let namespace = segments.join(":");
    let name = if namespace.is_empty() {
        leaf
    } else {
        format!("{}:{}", namespace, leaf)
    };

    (name, namespace)
}
