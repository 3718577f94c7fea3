//! # Configuration
//!
//! snipz reads a single YAML file, by default `~/.snipz.yaml`:
//!
//! ```yaml
//! document_dir: ~/snippets
//! editor_binary: /usr/bin/vim
//! file_ext: .txt
//! ```
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `document_dir` | (required) | Store directory. A leading `~/` is expanded. |
//! | `editor_binary` | `$EDITOR` | Editor used by `new` and `edit`. |
//! | `file_ext` | `.txt` | Suffix of snippet files. |
//!
//! The binary may point elsewhere with `--config` or `SNIPZ_CONFIG`.
//!
//! [`SnipzConfig::load`] is the only way values get in: it validates and
//! expands everything, so code past this point only sees typed, absolute
//! values. The config is passed by reference; there is no global.

use crate::error::{Result, SnipzError};
use crate::store::fs::FileStore;
use crate::store::{normalize_ext, DEFAULT_FILE_EXT};
use directories::BaseDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".snipz.yaml";
pub const CONFIG_ENV: &str = "SNIPZ_CONFIG";
pub const DEFAULT_DOCUMENT_DIR: &str = "~/snippets";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Directory holding the snippet files
    pub document_dir: PathBuf,

    /// Editor command; `$EDITOR` and friends are used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_binary: Option<String>,

    /// Suffix for snippet files (e.g. ".txt", ".md")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl SnipzConfig {
    pub fn new(document_dir: impl Into<PathBuf>) -> Self {
        Self {
            document_dir: document_dir.into(),
            editor_binary: None,
            file_ext: default_file_ext(),
        }
    }

    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor_binary = Some(editor.into());
        self
    }

    /// `~/.snipz.yaml`
    pub fn default_path() -> Result<PathBuf> {
        Ok(home_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads and validates the config at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SnipzError::Config(format!(
                "no config found at {}, run `snipz init` first",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|source| SnipzError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: SnipzConfig = serde_yaml::from_str(&content)
            .map_err(|e| SnipzError::Config(format!("{}: {}", path.display(), e)))?;

        let config = raw.validated()?;
        debug!(
            "loaded config from {} (document_dir={})",
            path.display(),
            config.document_dir.display()
        );
        Ok(config)
    }

    /// Writes the config to `path`, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| SnipzError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).map_err(|source| SnipzError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Opens the store this config points at.
    pub fn open_store(&self) -> Result<FileStore> {
        FileStore::open_with_ext(&self.document_dir, &self.file_ext)
    }

    fn validated(mut self) -> Result<Self> {
        if self.document_dir.as_os_str().is_empty() {
            return Err(SnipzError::Config("document_dir is empty".to_string()));
        }
        self.document_dir = expand_home(&self.document_dir)?;

        if self.file_ext.trim().is_empty() {
            self.file_ext = default_file_ext();
        }
        self.file_ext = normalize_ext(self.file_ext.trim());

        self.editor_binary = self
            .editor_binary
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Ok(self)
    }
}

fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Config("could not determine home directory".to_string()))
}

/// Expands a leading `~` using the user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    if !path.starts_with("~") {
        return Ok(path.to_path_buf());
    }
    Ok(expand_home_with(path, &home_dir()?))
}

fn expand_home_with(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Checks a store directory typed in by the user. Paths with spaces are
/// refused, as are paths that already exist as a regular file.
pub fn validate_document_dir(raw: &str) -> Result<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SnipzError::Config("document directory is empty".to_string()));
    }
    if raw.contains(' ') {
        return Err(SnipzError::Config(format!(
            "invalid document directory '{}': spaces are not supported",
            raw
        )));
    }

    let path = expand_home(Path::new(raw))?;
    if path.exists() && !path.is_dir() {
        return Err(SnipzError::InvalidStore(path));
    }
    Ok(path)
}
