use crate::error::{Result, SlashError};
use crate::slash::roots::{CommandRoots, RootResolver};
use crate::slash::tools::ToolCatalog;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".slashcmd.toml";

const DEFAULT_PROJECT_DIR: &str = ".slashcmd/commands";
const DEFAULT_USER_DIR: &str = "~/.slashcmd/commands";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Where command files are looked up. Unset entries use built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommandsConfig {
    /// Relative to the project root unless absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Tool names accepted in `allowed-tools` on top of the built-in catalog
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. Environment variables
    /// 2. Project config (.slashcmd.toml in project root)
    /// 3. Global config (~/.slashcmd.toml)
    /// 4. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        for path in Self::config_files(project_root) {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                config = config.merge(Self::from_file(&path)?);
            }
        }

        Ok(config.merge_env())
    }

    /// Config file locations in load order.
    pub fn config_files(project_root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if let Some(home) = dirs::home_dir() {
            files.push(home.join(CONFIG_FILE_NAME));
        }
        files.push(project_root.join(CONFIG_FILE_NAME));
        files
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can never resolve to a directory.
    pub fn validate(&self) -> Result<()> {
        let dirs = [
            ("commands.project_dir", &self.commands.project_dir),
            ("commands.user_dir", &self.commands.user_dir),
            ("commands.shared_dir", &self.commands.shared_dir),
        ];
        for (key, value) in dirs {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(SlashError::InvalidConfig(format!("{} must not be empty", key)));
            }
        }

        if let Some(tool) = self.tools.extra.iter().find(|t| t.trim().is_empty()) {
            return Err(SlashError::InvalidConfig(format!(
                "tools.extra contains an empty tool name: {:?}",
                tool
            )));
        }

        Ok(())
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.commands.project_dir.is_some() {
            self.commands.project_dir = other.commands.project_dir;
        }
        if other.commands.user_dir.is_some() {
            self.commands.user_dir = other.commands.user_dir;
        }
        if other.commands.shared_dir.is_some() {
            self.commands.shared_dir = other.commands.shared_dir;
        }

        for tool in other.tools.extra {
            if !self.tools.extra.contains(&tool) {
                self.tools.extra.push(tool);
            }
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        let overrides = [
            ("SLASHCMD_PROJECT_DIR", &mut self.commands.project_dir),
            ("SLASHCMD_USER_DIR", &mut self.commands.user_dir),
            ("SLASHCMD_SHARED_DIR", &mut self.commands.shared_dir),
        ];
        for (var, slot) in overrides {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    *slot = Some(value);
                }
            }
        }

        self
    }

    /// Built-in tool catalog extended with `tools.extra`.
    pub fn tool_catalog(&self) -> ToolCatalog {
        ToolCatalog::new(self.tools.extra.iter().cloned())
    }

    /// Resolve the three command roots for a project.
    pub fn command_roots(&self, project_root: &Path) -> CommandRoots {
        let project_dir = self
            .commands
            .project_dir
            .as_deref()
            .unwrap_or(DEFAULT_PROJECT_DIR);
        let project = expand(project_dir);
        let project = if project.is_absolute() {
            project
        } else {
            project_root.join(project)
        };

        let user = expand(self.commands.user_dir.as_deref().unwrap_or(DEFAULT_USER_DIR));

        let shared = match self.commands.shared_dir.as_deref() {
            Some(dir) => expand(dir),
            None => default_shared_dir(),
        };

        CommandRoots {
            shared,
            user,
            project,
        }
    }
}

/// Resolves roots from configuration for one project.
#[derive(Debug, Clone)]
pub struct ConfigRootResolver {
    config: Config,
    project_root: PathBuf,
}

impl ConfigRootResolver {
    pub fn new(config: Config, project_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            project_root: project_root.into(),
        }
    }
}

impl RootResolver for ConfigRootResolver {
    fn roots(&self) -> CommandRoots {
        self.config.command_roots(&self.project_root)
    }
}

fn expand(dir: &str) -> PathBuf {
    expand_tilde(dir).unwrap_or_else(|| {
        tracing::warn!(dir = %dir, "could not expand home directory, using path as written");
        PathBuf::from(dir)
    })
}

/// `$XDG_CONFIG_HOME/slashcmd/commands`, else `~/.config/slashcmd/commands`.
fn default_shared_dir() -> PathBuf {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));

    config_home.join("slashcmd").join("commands")
}
