//! Resource store abstraction and implementations
//!
//! A resource store is a hierarchical, path-addressed structure of nodes,
//! each carrying a flat property map. Mutations are queued against a working
//! state and only become durable on [`ResourceStore::commit`]; dropping a
//! store handle without committing abandons the queued mutations.

mod json_file;
mod memory;
mod tree;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Property map of a single node: property name to typed scalar/array value
pub type PropertyMap = HashMap<String, Value>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Store-defined error, wrapped by the strategy layer into
/// [`crate::Error`] before it reaches a caller.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid resource path '{0}'")]
    InvalidPath(String),

    #[error("No node at '{0}'")]
    NodeNotFound(String),

    /// Optimistic concurrency conflict detected at commit time
    #[error("Commit conflict: {0}")]
    Conflict(String),

    #[error("Failed to read store file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize store tree: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Catch-all for custom store backends
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Check if this is a commit-time conflict
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}

/// Read-only snapshot view of a node, as handed to reverse path mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Storage path of the node
    pub path: String,
    /// Properties at the time the snapshot was taken
    pub properties: PropertyMap,
}

/// Trait for hierarchical resource store implementations
///
/// Mutating calls queue changes against the store's working state; nothing
/// is durable until [`commit`](ResourceStore::commit) succeeds. Paths are
/// `/`-separated, absolute (leading `/` optional), with no empty segments.
pub trait ResourceStore {
    /// Check whether a node exists at `path` in the working state
    fn exists(&self, path: &str) -> bool;

    /// Snapshot the node at `path`, or `None` if absent
    fn node(&self, path: &str) -> Option<Node>;

    /// Get or create the node at `path`, creating missing ancestors as
    /// plain nodes. Idempotent if the node already exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] for malformed paths.
    fn get_or_create(&mut self, path: &str) -> StoreResult<()>;

    /// Names of the direct children of the node at `path`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NodeNotFound`] if no node exists at `path`.
    fn child_names(&self, path: &str) -> StoreResult<Vec<String>>;

    /// Delete the node at `path` and its entire subtree
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NodeNotFound`] if no node exists at `path`.
    fn delete(&mut self, path: &str) -> StoreResult<()>;

    /// All properties of the node at `path`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NodeNotFound`] if no node exists at `path`.
    fn properties(&self, path: &str) -> StoreResult<PropertyMap>;

    /// Set a single property on the node at `path`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NodeNotFound`] if no node exists at `path`.
    fn set_property(&mut self, path: &str, name: &str, value: Value) -> StoreResult<()>;

    /// Remove a single property from the node at `path`; removing an
    /// absent property is a no-op
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NodeNotFound`] if no node exists at `path`.
    fn remove_property(&mut self, path: &str, name: &str) -> StoreResult<()>;

    /// Make all queued mutations durable
    ///
    /// # Errors
    ///
    /// Fails with a store-defined error on conflict or I/O failure; the
    /// working state is left untouched so the caller decides whether to
    /// retry or abandon.
    fn commit(&mut self) -> StoreResult<()>;
}

/// Split a resource path into validated segments.
///
/// Accepts an optional leading `/`; rejects empty paths and empty segments.
pub(crate) fn path_segments(path: &str) -> StoreResult<Vec<&str>> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}
