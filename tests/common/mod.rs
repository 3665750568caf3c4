//! Common test utilities for resconfig integration tests
//!
//! Provides a recording store mock (operation log + injectable commit
//! failure) and property-map helpers.

#![allow(dead_code)]

use resconfig::store::StoreResult;
use resconfig::{MemoryStore, Node, PropertyMap, ResourceStore, StoreError};
use serde_json::Value;

// =============================================================================
// Logging
// =============================================================================

/// Route the library's trace/debug output to the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
/// Run with `RUST_LOG=trace` to see the strategy's store mutation lines.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Property Map Helpers
// =============================================================================

/// Build a `PropertyMap` from (name, value) pairs
pub fn props<const N: usize>(pairs: [(&str, Value); N]) -> PropertyMap {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

// =============================================================================
// Recording Store Mock
// =============================================================================

/// Mutating calls a strategy issues against the store, in issue order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    GetOrCreate(String),
    Delete(String),
    SetProperty(String, String),
    RemoveProperty(String, String),
    Commit,
}

/// Store wrapping [`MemoryStore`] that logs every mutating call and can be
/// told to fail at commit time
pub struct RecordingStore {
    inner: MemoryStore,
    pub ops: Vec<StoreOp>,
    pub fail_commit: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        init_logging();
        Self {
            inner: MemoryStore::new(),
            ops: Vec::new(),
            fail_commit: false,
        }
    }

    pub fn failing_commit() -> Self {
        Self {
            fail_commit: true,
            ..Self::new()
        }
    }

    /// Paths passed to `get_or_create`, in call order
    pub fn created_paths(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                StoreOp::GetOrCreate(path) => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn commit_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == StoreOp::Commit).count()
    }

    /// Durable (committed) view of a node, bypassing the working state
    pub fn committed_node(&self, path: &str) -> Option<Node> {
        self.inner.committed_node(path)
    }
}

impl ResourceStore for RecordingStore {
    fn exists(&self, path: &str) -> bool {
        self.inner.exists(path)
    }

    fn node(&self, path: &str) -> Option<Node> {
        self.inner.node(path)
    }

    fn get_or_create(&mut self, path: &str) -> StoreResult<()> {
        self.ops.push(StoreOp::GetOrCreate(path.to_string()));
        self.inner.get_or_create(path)
    }

    fn child_names(&self, path: &str) -> StoreResult<Vec<String>> {
        self.inner.child_names(path)
    }

    fn delete(&mut self, path: &str) -> StoreResult<()> {
        self.ops.push(StoreOp::Delete(path.to_string()));
        self.inner.delete(path)
    }

    fn properties(&self, path: &str) -> StoreResult<PropertyMap> {
        self.inner.properties(path)
    }

    fn set_property(&mut self, path: &str, name: &str, value: Value) -> StoreResult<()> {
        self.ops
            .push(StoreOp::SetProperty(path.to_string(), name.to_string()));
        self.inner.set_property(path, name, value)
    }

    fn remove_property(&mut self, path: &str, name: &str) -> StoreResult<()> {
        self.ops
            .push(StoreOp::RemoveProperty(path.to_string(), name.to_string()));
        self.inner.remove_property(path, name)
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.ops.push(StoreOp::Commit);
        if self.fail_commit {
            return Err(StoreError::Conflict("simulated commit conflict".into()));
        }
        self.inner.commit()
    }
}
