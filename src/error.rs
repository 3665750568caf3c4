//! Error types for the resconfig library

use crate::store::StoreError;
use thiserror::Error;

/// Result type alias for resconfig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Persistence failure raised by a strategy.
///
/// Every variant wraps the underlying store error together with the path
/// under mutation. A "declined" strategy is never an error: it is signaled
/// through `Ok(false)` / `None` so the chain can fall through to the next
/// strategy.
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Node mutation failures
    // -------------------------------------------------------------------------
    #[error("Unable to persist configuration to '{path}': {source}")]
    Persist {
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("Unable to remove children from '{path}': {source}")]
    RemoveChildren {
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("Unable to delete configuration at '{path}': {source}")]
    Delete {
        path: String,
        #[source]
        source: StoreError,
    },

    // -------------------------------------------------------------------------
    // Transaction failures
    // -------------------------------------------------------------------------
    #[error("Unable to save configuration for '{path}': {source}")]
    Commit {
        path: String,
        #[source]
        source: StoreError,
    },
}

impl Error {
    /// The storage path the failed operation was mutating
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Error::Persist { path, .. }
            | Error::RemoveChildren { path, .. }
            | Error::Delete { path, .. }
            | Error::Commit { path, .. } => path,
        }
    }

    /// Check if the failure happened at commit time (e.g. an optimistic
    /// conflict detected by the store) rather than while queueing mutations
    #[must_use]
    pub fn is_commit_failure(&self) -> bool {
        matches!(self, Error::Commit { .. })
    }

    /// The store-level cause
    #[must_use]
    pub fn store_error(&self) -> &StoreError {
        match self {
            Error::Persist { source, .. }
            | Error::RemoveChildren { source, .. }
            | Error::Delete { source, .. }
            | Error::Commit { source, .. } => source,
        }
    }
}
