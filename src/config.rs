use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::NoteError;
use crate::notes::list::DEFAULT_LIST_LIMIT;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct QnConfig {
    pub notes: NotesConfig,
    pub editor: EditorConfig,
    pub log: LogConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NotesConfig {
    /// Notes root; `~/` is expanded.
    pub root: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor command line, e.g. `"nvim"` or `"code --wait"`.
    pub command: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ListConfig {
    /// Notes shown by `qn list` without `--all`.
    pub limit: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Returns the default config file path: `<config dir>/qn/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qn").join("config.toml"))
}

impl QnConfig {
    /// Load config from the default TOML file (if any) then apply env var overrides.
    pub fn load() -> Result<Self> {
        let mut config = match default_config_path() {
            Some(path) => Self::load_file(&path)?,
            None => QnConfig::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from a specific path without env overrides; a missing file yields defaults.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Runs before the subscriber is installed, so a missing file is not logged.
        if !path.exists() {
            return Ok(QnConfig::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: QnConfig = toml::from_str(&contents).context("failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.list.limit > 0, "list.limit must be at least 1");
        Ok(())
    }

    /// Apply overrides (MDNOTES_DIR, EDITOR, QN_LOG_LEVEL) from `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(val) = lookup("MDNOTES_DIR") {
            self.notes.root = Some(val);
        }
        if let Some(val) = lookup("EDITOR") {
            self.editor.command = Some(val);
        }
        if let Some(val) = lookup("QN_LOG_LEVEL") {
            self.log.level = val;
        }
    }

    /// Configured notes root with `~/` expanded, without checking the filesystem.
    pub fn notes_root(&self) -> Result<PathBuf, NoteError> {
        self.notes
            .root
            .as_deref()
            .map(str::trim)
            .filter(|root| !root.is_empty())
            .map(expand_tilde)
            .ok_or(NoteError::NotesRootUnset)
    }

    /// Configured notes root, verified to be an existing directory.
    pub fn resolve_notes_root(&self) -> Result<PathBuf, NoteError> {
        let path = self.notes_root()?;
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(path),
            Ok(_) => Err(NoteError::NotesRootNotDirectory { path }),
            Err(source) => Err(NoteError::NotesRootInaccessible { path, source }),
        }
    }

    /// Configured editor command, if any.
    pub fn editor_command(&self) -> Option<&str> {
        self.editor
            .command
            .as_deref()
            .map(str::trim)
            .filter(|cmd| !cmd.is_empty())
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
