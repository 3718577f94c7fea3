use super::{is_valid_id, normalize_ext, DataStore, DEFAULT_FILE_EXT};
use crate::codec;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use log::{debug, trace};
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Directory-backed store: one `{uuid}{ext}` file per snippet.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    /// Opens (creating if needed) a store using the default `.txt` suffix.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_ext(path, DEFAULT_FILE_EXT)
    }

    /// Opens (creating if needed) a store whose files carry `ext`.
    ///
    /// Fails with `InvalidStore` when `path` exists and is not a directory.
    /// Opening an existing store never touches its contents.
    pub fn open_with_ext<P: AsRef<Path>>(path: P, ext: &str) -> Result<Self> {
        let root = absolute(path.as_ref())?;

        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(SnipzError::InvalidStore(root)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                create_private_dir(&root)?;
                debug!("created snippet store at {}", root.display());
            }
            Err(source) => return Err(SnipzError::Read { path: root, source }),
        }

        Ok(Self {
            root,
            file_ext: normalize_ext(ext),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn snippet_path(&self, id: &str) -> Option<PathBuf> {
        if !is_valid_id(id) {
            return None;
        }
        Some(self.root.join(format!("{}{}", id, self.file_ext)))
    }

    fn existing_path(&self, id: &str) -> Result<PathBuf> {
        match self.snippet_path(id) {
            Some(path) if path.is_file() => Ok(path),
            _ => Err(SnipzError::NotFound(id.to_string())),
        }
    }

    fn create_with_id(&self, id: &str, title: &str, tags: &[String]) -> Result<PathBuf> {
        if self.exists(id) {
            return Err(SnipzError::DuplicateIdentifier(id.to_string()));
        }
        let path = self
            .snippet_path(id)
            .ok_or_else(|| SnipzError::NotFound(id.to_string()))?;

        let snippet = Snippet::new(id, title, tags.to_vec());
        let bytes = codec::encode(&snippet)?;

        // create_new: a file that appeared since the check above is still a
        // collision, not something to overwrite.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| match source.kind() {
                ErrorKind::AlreadyExists => SnipzError::DuplicateIdentifier(id.to_string()),
                _ => SnipzError::Write {
                    path: path.clone(),
                    source,
                },
            })?;
        file.write_all(&bytes)
            .and_then(|_| file.flush())
            .map_err(|source| SnipzError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}

impl DataStore for FileStore {
    fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn exists(&self, id: &str) -> bool {
        self.snippet_path(id).is_some_and(|path| path.is_file())
    }

    fn create(&mut self, title: &str, tags: &[String]) -> Result<(String, PathBuf)> {
        let id = Uuid::new_v4().to_string();
        let path = self.create_with_id(&id, title, tags)?;
        debug!("created snippet {} at {}", id, path.display());
        Ok((id, path))
    }

    fn read(&self, id: &str) -> Result<Snippet> {
        let path = self.existing_path(id)?;
        let bytes = fs::read(&path).map_err(|source| SnipzError::Read {
            path: path.clone(),
            source,
        })?;

        let mut snippet = codec::decode(&bytes).map_err(|e| e.in_snippet(id))?;
        snippet.uid = id.to_string();
        Ok(snippet)
    }

    fn list(&self) -> Result<Vec<Snippet>> {
        let entries = fs::read_dir(&self.root).map_err(|source| SnipzError::Read {
            path: self.root.clone(),
            source,
        })?;

        let mut snippets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SnipzError::Read {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(id) = name.strip_suffix(self.file_ext.as_str()) else {
                continue;
            };
            if !is_valid_id(id) {
                continue;
            }

            trace!("reading snippet {}", id);
            snippets.push(self.read(id)?);
        }

        Ok(snippets)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let path = self.existing_path(id)?;
        fs::remove_file(&path).map_err(|source| SnipzError::Delete {
            path: path.clone(),
            source,
        })?;
        debug!("deleted snippet {} ({})", id, path.display());
        Ok(())
    }

    fn path_of(&self, id: &str) -> Result<PathBuf> {
        self.existing_path(id)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path))
}

fn create_private_dir(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
        .create(path)
        .map_err(|source| SnipzError::CreateStore {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_missing_dirs() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("a").join("b").join("snippets");
        let store = FileStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_creates_private_dir() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let root = dir.path().join("private");
        FileStore::open(&root).unwrap();
        let mode = fs::metadata(&root).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "group/other bits set: {:o}", mode);
    }

    #[test]
    fn test_open_rejects_regular_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            FileStore::open(&file),
            Err(SnipzError::InvalidStore(_))
        ));
    }

    #[test]
    fn test_open_is_idempotent() {
        let (dir, mut store) = setup();
        let (id, _) = store.create("Keep me", &[]).unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert!(reopened.exists(&id));
        assert_eq!(reopened.list().unwrap().len(), 1);
    }

    #[test]
    fn test_open_with_ext_normalizes() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open_with_ext(dir.path(), "md").unwrap();
        assert_eq!(store.file_ext(), ".md");
    }

    #[test]
    fn test_create_writes_one_file() {
        let (dir, mut store) = setup();
        let tags = vec!["linux".to_string(), "kernel".to_string()];
        let (id, path) = store.create("Kernel version", &tags).unwrap();

        assert_eq!(path, dir.path().join(format!("{}.txt", id)));
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(
            on_disk,
            "---\ntitle: Kernel version\ntags:\n- linux\n- kernel\n---\n"
        );
    }

    #[test]
    fn test_create_refuses_existing_id() {
        let (dir, store) = setup();
        let path = dir.path().join("taken.txt");
        fs::write(&path, "---\ntitle: original\n---\nbody").unwrap();

        let err = store.create_with_id("taken", "New", &[]).unwrap_err();
        assert!(matches!(err, SnipzError::DuplicateIdentifier(ref id) if id == "taken"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "---\ntitle: original\n---\nbody"
        );
    }

    #[test]
    fn test_create_reports_write_failure() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("snippets");
        let mut store = FileStore::open(&root).unwrap();

        // the store directory is swapped for a plain file behind our back
        fs::remove_dir(&root).unwrap();
        fs::write(&root, "not a directory").unwrap();

        match store.create("Lost", &[]) {
            Err(SnipzError::Write { path, .. }) => assert!(path.starts_with(&root)),
            other => panic!("expected Write error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_reports_failure() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, mut store) = setup();
        let (id, path) = store.create("Stuck", &[]).unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o500)).unwrap();

        // permission bits do not bind root
        let check = dir.path().join("write-check");
        if fs::write(&check, "").is_ok() {
            fs::remove_file(&check).unwrap();
            fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o700)).unwrap();
            return;
        }

        let result = store.delete(&id);
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o700)).unwrap();

        match result {
            Err(SnipzError::Delete { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected Delete error, got {:?}", other),
        }
        assert!(store.exists(&id));
    }

    #[test]
    fn test_read_assigns_uid() {
        let (_dir, mut store) = setup();
        let (id, _) = store.create("Title", &[]).unwrap();
        let snippet = store.read(&id).unwrap();
        assert_eq!(snippet.uid, id);
        assert_eq!(snippet.title(), "Title");
        assert_eq!(snippet.body, "");
    }

    #[test]
    fn test_read_sees_external_edits() {
        let (_dir, mut store) = setup();
        let (id, path) = store.create("Kernel version", &[]).unwrap();
        fs::write(
            &path,
            "---\ntitle: Kernel version\ntags:\n- linux\n---\nuname -a\n",
        )
        .unwrap();

        let snippet = store.read(&id).unwrap();
        assert_eq!(snippet.tags(), ["linux".to_string()]);
        assert_eq!(snippet.body, "uname -a\n");
    }

    #[test]
    fn test_read_malformed_is_labelled() {
        let (dir, store) = setup();
        fs::write(dir.path().join("broken.txt"), "no markers").unwrap();

        match store.read("broken") {
            Err(SnipzError::MalformedData { context, .. }) => {
                assert!(context.contains("broken"));
            }
            other => panic!("expected MalformedData, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_symmetry() {
        let (_dir, mut store) = setup();
        assert!(!store.exists("nonexistent"));
        assert!(matches!(
            store.read("nonexistent"),
            Err(SnipzError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("nonexistent"),
            Err(SnipzError::NotFound(_))
        ));
        assert!(matches!(
            store.path_of("nonexistent"),
            Err(SnipzError::NotFound(_))
        ));
    }

    #[test]
    fn test_exists_does_not_recurse_or_escape() {
        let (dir, store) = setup();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(
            dir.path().join("nested").join("inner.txt"),
            "---\n---\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        assert!(!store.exists("inner"));
        assert!(!store.exists("nested/inner"));
        assert!(!store.exists("folder"));
        assert!(!store.exists("../x"));
    }

    #[test]
    fn test_delete_is_final() {
        let (dir, mut store) = setup();
        let (id, path) = store.create("Gone", &[]).unwrap();

        store.delete(&id).unwrap();
        assert!(!path.exists());
        assert!(!store.exists(&id));
        assert!(matches!(store.read(&id), Err(SnipzError::NotFound(_))));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, store) = setup();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_ignores_foreign_entries() {
        let (dir, mut store) = setup();
        store.create("Real", &[]).unwrap();
        fs::write(dir.path().join("notes.md"), "not ours").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "not ours").unwrap();
        fs::write(dir.path().join(".txt"), "not ours").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title(), "Real");
    }

    #[test]
    fn test_list_fails_fast_on_corrupt_file() {
        let (dir, mut store) = setup();
        store.create("Fine", &[]).unwrap();
        fs::write(dir.path().join("corrupt.txt"), "---\ntitle: no end\n").unwrap();

        assert!(matches!(
            store.list(),
            Err(SnipzError::MalformedData { .. })
        ));
    }

    #[test]
    fn test_path_of_existing() {
        let (_dir, mut store) = setup();
        let (id, path) = store.create("Where", &[]).unwrap();
        assert_eq!(store.path_of(&id).unwrap(), path);
    }
}
