//! JSON-file-backed resource store

use super::memory::MemoryStore;
use super::tree::TreeNode;
use super::{Node, PropertyMap, ResourceStore, StoreError, StoreResult};
use log::debug;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Resource store persisted as a single JSON document.
///
/// The whole tree is loaded on [`open`](JsonFileStore::open); mutations stay
/// in memory until [`commit`](ResourceStore::commit) writes the tree back.
/// Writes are atomic: the document goes to a temp file first, then replaces
/// the target by rename, so a crashed commit never corrupts the store file.
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open a store backed by `file_path`, loading the existing tree if the
    /// file is present and starting empty otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FileRead`] if the file exists but cannot be
    /// read, or [`StoreError::Serialize`] if it does not parse.
    pub fn open(file_path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file_path = file_path.into();
        let tree = if file_path.exists() {
            let content =
                std::fs::read_to_string(&file_path).map_err(|e| StoreError::FileRead {
                    path: file_path.clone(),
                    source: e,
                })?;
            serde_json::from_str(&content)?
        } else {
            TreeNode::default()
        };
        Ok(Self {
            file_path,
            inner: MemoryStore::from_tree(tree),
        })
    }

    /// Path of the backing file
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Discard all uncommitted mutations
    pub fn rollback(&mut self) {
        self.inner.rollback();
    }

    fn write_tree(&self) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(self.inner.working_tree())?;

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Atomic write: temp file + rename
        let file_name = self
            .file_path
            .file_name()
            .ok_or_else(|| StoreError::InvalidPath(self.file_path.display().to_string()))?;
        let mut temp_filename = file_name.to_os_string();
        temp_filename.push(".tmp");
        let temp_path = self.file_path.with_file_name(temp_filename);

        std::fs::write(&temp_path, &content).map_err(|e| StoreError::FileWrite {
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.file_path).map_err(|e| StoreError::FileWrite {
            path: self.file_path.clone(),
            source: e,
        })
    }
}

impl ResourceStore for JsonFileStore {
    fn exists(&self, path: &str) -> bool {
        self.inner.exists(path)
    }

    fn node(&self, path: &str) -> Option<Node> {
        self.inner.node(path)
    }

    fn get_or_create(&mut self, path: &str) -> StoreResult<()> {
        self.inner.get_or_create(path)
    }

    fn child_names(&self, path: &str) -> StoreResult<Vec<String>> {
        self.inner.child_names(path)
    }

    fn delete(&mut self, path: &str) -> StoreResult<()> {
        self.inner.delete(path)
    }

    fn properties(&self, path: &str) -> StoreResult<PropertyMap> {
        self.inner.properties(path)
    }

    fn set_property(&mut self, path: &str, name: &str, value: Value) -> StoreResult<()> {
        self.inner.set_property(path, name, value)
    }

    fn remove_property(&mut self, path: &str, name: &str) -> StoreResult<()> {
        self.inner.remove_property(path, name)
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.write_tree()?;
        debug!("Committed store tree to {}", self.file_path.display());
        self.inner.commit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
        assert!(!store.exists("conf"));
    }

    #[test]
    fn test_commit_persists_and_reopens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.get_or_create("conf/app").unwrap();
        store
            .set_property("conf/app", "theme", json!("dark"))
            .unwrap();
        store.commit().unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.properties("conf/app").unwrap()["theme"],
            json!("dark")
        );
    }

    #[test]
    fn test_uncommitted_mutations_not_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.get_or_create("conf/app").unwrap();
            store.commit().unwrap();
            store.set_property("conf/app", "x", json!(1)).unwrap();
            // Dropped without commit
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.properties("conf/app").unwrap().is_empty());
    }

    #[test]
    fn test_open_corrupt_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path).unwrap_err(),
            StoreError::Serialize(_)
        ));
    }
}
