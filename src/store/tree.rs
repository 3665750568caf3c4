//! In-memory node tree shared by the built-in store implementations

use super::{PropertyMap, StoreError, StoreResult, path_segments};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the tree: properties plus named children.
///
/// Children use a `BTreeMap` so the serialized form is stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub(crate) struct TreeNode {
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    /// Follow `path` down from this node, if every segment exists
    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        let segments = path_segments(path).ok()?;
        let mut node = self;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Follow `path` down from this node mutably
    pub fn get_mut(&mut self, path: &str) -> Option<&mut TreeNode> {
        let segments = path_segments(path).ok()?;
        let mut node = self;
        for segment in segments {
            node = node.children.get_mut(segment)?;
        }
        Some(node)
    }

    /// Get or create the node at `path`, creating missing ancestors as
    /// plain nodes. Existing nodes are left untouched.
    pub fn get_or_create(&mut self, path: &str) -> StoreResult<&mut TreeNode> {
        let segments = path_segments(path)?;
        let mut node = self;
        for segment in segments {
            node = node.children.entry(segment.to_string()).or_default();
        }
        Ok(node)
    }

    /// Remove the node at `path` together with its subtree
    pub fn remove(&mut self, path: &str) -> StoreResult<()> {
        let segments = path_segments(path)?;
        let (leaf, ancestors) = segments
            .split_last()
            .ok_or_else(|| StoreError::InvalidPath(path.to_string()))?;
        let mut node = self;
        for segment in ancestors {
            node = node
                .children
                .get_mut(*segment)
                .ok_or_else(|| StoreError::NodeNotFound(path.to_string()))?;
        }
        node.children
            .remove(*leaf)
            .ok_or_else(|| StoreError::NodeNotFound(path.to_string()))?;
        Ok(())
    }
}
