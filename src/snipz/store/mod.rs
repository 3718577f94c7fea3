//! # Storage Layer
//!
//! A store is one directory holding one file per snippet. The [`DataStore`]
//! trait is what the command layer talks to, so the same commands run against
//! the real directory ([`fs::FileStore`]) and against memory in tests
//! ([`memory::InMemoryStore`]).
//!
//! ## Philosophy
//!
//! - **The directory listing is the index.** There is no sidecar file and no
//!   cache. Every call goes back to disk.
//! - **The file name is the identifier.** New snippets get a random UUID v4,
//!   generated independently of the title, and live in `{uuid}{ext}`.
//! - **Editors own the body.** The store writes a snippet once, on create.
//!   After that an external editor is pointed at [`DataStore::path_of`] and
//!   changes the file in place; the next read sees whatever it left behind.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/snippets/
//! ├── 0d3c5a52-....txt
//! └── 9f1e77b0-....txt
//! ```
//!
//! ## Failure Policy
//!
//! - `read`/`delete`/`path_of` on an unknown identifier: `NotFound`.
//! - `list` stops at the first file that fails to decode. A corrupt file is
//!   reported, never skipped.
//! - An empty store lists as `Ok(vec![])`.
//! - Nothing is retried.
//!
//! ## Concurrency
//!
//! None. One process, one caller. Another process touching the directory
//! between `exists` and `create`/`delete` is not coordinated.

use crate::error::Result;
use crate::model::Snippet;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const DEFAULT_FILE_EXT: &str = ".txt";

/// Abstract interface for snippet storage.
pub trait DataStore {
    /// Suffix every snippet file carries, including the leading dot.
    fn file_ext(&self) -> &str;

    /// True if a snippet with this identifier is present.
    fn exists(&self, id: &str) -> bool;

    /// Create an empty-bodied snippet, returning its identifier and path.
    fn create(&mut self, title: &str, tags: &[String]) -> Result<(String, PathBuf)>;

    /// Read one snippet.
    fn read(&self, id: &str) -> Result<Snippet>;

    /// Read every snippet. No ordering guarantee.
    fn list(&self) -> Result<Vec<Snippet>>;

    /// Remove a snippet for good.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Path of an existing snippet's file, for handing to an editor.
    fn path_of(&self, id: &str) -> Result<PathBuf>;

    /// Turns user input (a bare identifier, or a file name with the store
    /// suffix) into an identifier.
    fn normalize_id(&self, input: &str) -> String {
        let input = input.trim();
        input
            .strip_suffix(self.file_ext())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(input)
            .to_string()
    }
}

/// Ensures an extension starts with a dot.
pub fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Identifiers name a file directly inside the store root, so anything that
/// could point elsewhere (or at a hidden file) is never a valid one.
pub(crate) fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(|c: char| c == '/' || c == '\\' || c == '\0')
}
