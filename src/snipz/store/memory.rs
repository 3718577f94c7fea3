use super::{is_valid_id, DataStore, DEFAULT_FILE_EXT};
use crate::codec;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

/// Keeps encoded snippets in a map instead of a directory.
///
/// Files are stored encoded, so reads go through the codec exactly as they
/// would on disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places raw file content under `id`, bypassing the codec.
    pub fn insert_raw(&mut self, id: &str, content: impl Into<Vec<u8>>) {
        self.files.insert(id.to_string(), content.into());
    }

    /// Replaces the body of an existing snippet, the way an editor would.
    pub fn set_body(&mut self, id: &str, body: &str) -> Result<()> {
        let snippet = self.read(id)?.with_body(body);
        let bytes = codec::encode(&snippet)?;
        self.files.insert(id.to_string(), bytes);
        Ok(())
    }

    fn virtual_path(&self, id: &str) -> PathBuf {
        PathBuf::from("/memory").join(format!("{}{}", id, DEFAULT_FILE_EXT))
    }
}

impl DataStore for InMemoryStore {
    fn file_ext(&self) -> &str {
        DEFAULT_FILE_EXT
    }

    fn exists(&self, id: &str) -> bool {
        is_valid_id(id) && self.files.contains_key(id)
    }

    fn create(&mut self, title: &str, tags: &[String]) -> Result<(String, PathBuf)> {
        let id = Uuid::new_v4().to_string();
        if self.exists(&id) {
            return Err(SnipzError::DuplicateIdentifier(id));
        }
        let bytes = codec::encode(&Snippet::new(id.as_str(), title, tags.to_vec()))?;
        self.files.insert(id.clone(), bytes);
        let path = self.virtual_path(&id);
        Ok((id, path))
    }

    fn read(&self, id: &str) -> Result<Snippet> {
        if !self.exists(id) {
            return Err(SnipzError::NotFound(id.to_string()));
        }
        let mut snippet = codec::decode(&self.files[id]).map_err(|e| e.in_snippet(id))?;
        snippet.uid = id.to_string();
        Ok(snippet)
    }

    fn list(&self) -> Result<Vec<Snippet>> {
        self.files.keys().map(|id| self.read(id)).collect()
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        if !self.exists(id) {
            return Err(SnipzError::NotFound(id.to_string()));
        }
        self.files.remove(id);
        Ok(())
    }

    fn path_of(&self, id: &str) -> Result<PathBuf> {
        if !self.exists(id) {
            return Err(SnipzError::NotFound(id.to_string()));
        }
        Ok(self.virtual_path(id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippet(mut self, title: &str, tags: &[&str], body: &str) -> Self {
            let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            let (id, _) = self.store.create(title, &tags).unwrap();
            self.store.set_body(&id, body).unwrap();
            self
        }

        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_snippet(
                    &format!("Test Snippet {}", i + 1),
                    &[],
                    &format!("Body for snippet {}", i + 1),
                );
            }
            self
        }

        /// Returns the id of the snippet with the given title.
        pub fn id_of(&self, title: &str) -> String {
            self.store
                .list()
                .unwrap()
                .into_iter()
                .find(|s| s.title() == title)
                .map(|s| s.uid)
                .unwrap()
        }
    }
}
