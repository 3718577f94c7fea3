use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Not a snippet store (path exists but is not a directory): {}", .0.display())]
    InvalidStore(PathBuf),

    #[error("Could not create snippet store at {}: {source}", path.display())]
    CreateStore { path: PathBuf, source: io::Error },

    #[error("Snippet not found: {0}")]
    NotFound(String),

    #[error("Snippet identifier already in use: {0}")]
    DuplicateIdentifier(String),

    #[error("Malformed snippet data ({context}): {reason}")]
    MalformedData { context: String, reason: String },

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to delete {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Picker error: {0}")]
    Picker(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SnipzError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SnipzError::MalformedData {
            context: "buffer".to_string(),
            reason: reason.into(),
        }
    }

    /// Re-labels a decode failure with the snippet it came from.
    /// Other kinds pass through untouched.
    pub(crate) fn in_snippet(self, id: &str) -> Self {
        match self {
            SnipzError::MalformedData { reason, .. } => SnipzError::MalformedData {
                context: format!("snippet {}", id),
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SnipzError>;
