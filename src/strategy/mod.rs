//! Persistence strategy contract

mod default;

pub use default::DefaultPersistenceStrategy;

use crate::data::{CollectionPersistData, PersistData};
use crate::error::Result;
use crate::store::{Node, ResourceStore};

/// One interchangeable persistence strategy in a chain.
///
/// A chain orchestrator asks each registered strategy in turn whether it
/// wants to handle a request. Declining is explicit and never an error:
/// the mapping operations return `None` and the mutating operations return
/// `Ok(false)`, in both cases with zero store side effects, so the
/// orchestrator can try the next strategy.
///
/// The mutating operations run to completion on the caller's thread,
/// including the commit; a handled request either fully succeeds or raises
/// a [`crate::Error`]; there is no partial-success return value.
pub trait PersistenceStrategy: Send + Sync {
    /// Map a logical configuration path to the storage path this strategy
    /// would persist it under, or `None` to decline
    fn storage_path(&self, logical_path: &str) -> Option<String>;

    /// Reverse mapping: claim a store node as belonging to this strategy,
    /// or `None` to decline.
    ///
    /// Must be mutually consistent with [`storage_path`](Self::storage_path):
    /// a node this strategy persisted must not map to `None` here while the
    /// strategy is enabled.
    fn logical_node<'a>(&self, node: &'a Node) -> Option<&'a Node>;

    /// Write one singleton configuration with full-replace semantics.
    ///
    /// Returns `Ok(false)` if declined, `Ok(true)` once the write is
    /// committed.
    ///
    /// # Errors
    ///
    /// Returns a persistence failure if a store mutation or the commit
    /// fails; the commit is never attempted after a mutation failure.
    fn persist(
        &self,
        store: &mut dyn ResourceStore,
        storage_path: &str,
        data: &PersistData,
    ) -> Result<bool>;

    /// Write a configuration collection, replacing all existing children
    /// of the parent with the items given, in the order given.
    ///
    /// Returns `Ok(false)` if declined, `Ok(true)` once the write is
    /// committed.
    ///
    /// # Errors
    ///
    /// Returns a persistence failure if a store mutation or the commit
    /// fails; the commit is never attempted after a mutation failure.
    fn persist_collection(
        &self,
        store: &mut dyn ResourceStore,
        parent_path: &str,
        data: &CollectionPersistData,
    ) -> Result<bool>;

    /// Delete the configuration node at `storage_path` with its subtree.
    /// Deleting an absent node succeeds (idempotent) and still commits.
    ///
    /// Returns `Ok(false)` if declined, `Ok(true)` once the delete is
    /// committed.
    ///
    /// # Errors
    ///
    /// Returns a persistence failure if the deletion or the commit fails.
    fn delete(&self, store: &mut dyn ResourceStore, storage_path: &str) -> Result<bool>;
}
