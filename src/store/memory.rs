//! Transactional in-memory resource store

use super::tree::TreeNode;
use super::{Node, PropertyMap, ResourceStore, StoreError, StoreResult};
use serde_json::Value;

/// In-memory resource store with working/committed snapshots.
///
/// Mutations apply to a working copy of the tree; [`commit`](ResourceStore::commit)
/// publishes it, [`rollback`](MemoryStore::rollback) discards it back to the
/// last committed state. The store is primarily meant for tests and for
/// callers that keep configuration in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    committed: TreeNode,
    working: TreeNode,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store whose committed and working state both start from
    /// `tree`, as when loading a persisted tree from disk
    pub(crate) fn from_tree(tree: TreeNode) -> Self {
        Self {
            committed: tree.clone(),
            working: tree,
        }
    }

    pub(crate) fn working_tree(&self) -> &TreeNode {
        &self.working
    }

    /// Discard all uncommitted mutations, restoring the working state to
    /// the last committed snapshot
    pub fn rollback(&mut self) {
        self.working = self.committed.clone();
    }

    /// Check whether uncommitted mutations are queued
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.working != self.committed
    }

    /// Snapshot a node from the *committed* state, ignoring queued
    /// mutations. Useful for observing what is actually durable.
    #[must_use]
    pub fn committed_node(&self, path: &str) -> Option<Node> {
        self.committed.get(path).map(|node| Node {
            path: path.to_string(),
            properties: node.properties.clone(),
        })
    }
}

impl ResourceStore for MemoryStore {
    fn exists(&self, path: &str) -> bool {
        self.working.get(path).is_some()
    }

    fn node(&self, path: &str) -> Option<Node> {
        self.working.get(path).map(|node| Node {
            path: path.to_string(),
            properties: node.properties.clone(),
        })
    }

    fn get_or_create(&mut self, path: &str) -> StoreResult<()> {
        self.working.get_or_create(path)?;
        Ok(())
    }

    fn child_names(&self, path: &str) -> StoreResult<Vec<String>> {
        let node = self
            .working
            .get(path)
            .ok_or_else(|| StoreError::NodeNotFound(path.to_string()))?;
        Ok(node.children.keys().cloned().collect())
    }

    fn delete(&mut self, path: &str) -> StoreResult<()> {
        self.working.remove(path)
    }

    fn properties(&self, path: &str) -> StoreResult<PropertyMap> {
        let node = self
            .working
            .get(path)
            .ok_or_else(|| StoreError::NodeNotFound(path.to_string()))?;
        Ok(node.properties.clone())
    }

    fn set_property(&mut self, path: &str, name: &str, value: Value) -> StoreResult<()> {
        let node = self
            .working
            .get_mut(path)
            .ok_or_else(|| StoreError::NodeNotFound(path.to_string()))?;
        node.properties.insert(name.to_string(), value);
        Ok(())
    }

    fn remove_property(&mut self, path: &str, name: &str) -> StoreResult<()> {
        let node = self
            .working
            .get_mut(path)
            .ok_or_else(|| StoreError::NodeNotFound(path.to_string()))?;
        node.properties.remove(name);
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.committed = self.working.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mutations_invisible_until_commit() {
        let mut store = MemoryStore::new();
        store.get_or_create("conf/app").unwrap();
        store
            .set_property("conf/app", "theme", json!("dark"))
            .unwrap();

        // Visible in the working state, not durable yet
        assert!(store.exists("conf/app"));
        assert!(store.committed_node("conf/app").is_none());
        assert!(store.has_pending_changes());

        store.commit().unwrap();
        assert_eq!(
            store.committed_node("conf/app").unwrap().properties["theme"],
            json!("dark")
        );
        assert!(!store.has_pending_changes());
    }

    #[test]
    fn test_rollback_discards_working_state() {
        let mut store = MemoryStore::new();
        store.get_or_create("conf/app").unwrap();
        store.commit().unwrap();

        store.set_property("conf/app", "x", json!(1)).unwrap();
        store.get_or_create("conf/other").unwrap();
        store.rollback();

        assert!(store.properties("conf/app").unwrap().is_empty());
        assert!(!store.exists("conf/other"));
    }

    #[test]
    fn test_child_names_sorted() {
        let mut store = MemoryStore::new();
        store.get_or_create("parent/b").unwrap();
        store.get_or_create("parent/a").unwrap();
        store.get_or_create("parent/c").unwrap();

        assert_eq!(store.child_names("parent").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_delete_missing_node_errors() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.delete("missing").unwrap_err(),
            StoreError::NodeNotFound(_)
        ));
    }

    #[test]
    fn test_remove_absent_property_is_noop() {
        let mut store = MemoryStore::new();
        store.get_or_create("conf").unwrap();
        store.remove_property("conf", "nothing").unwrap();
    }
}
