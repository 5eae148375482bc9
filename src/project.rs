use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Detect the project containing `dir`.
    ///
    /// Priority: git worktree/repo root (via --show-toplevel), then `dir` itself
    pub fn detect_from(dir: &Path) -> Self {
        let root = git_toplevel(dir).unwrap_or_else(|| dir.to_path_buf());
        tracing::debug!(root = %root.display(), "detected project root");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn git_toplevel(dir: &Path) -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if root.is_empty() {
        return None;
    }

    // Canonicalize to resolve any .. or symlinks
    PathBuf::from(root).canonicalize().ok()
}
