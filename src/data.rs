//! Persistence request payloads

use crate::store::PropertyMap;

/// One singleton configuration write request.
///
/// When `properties` is `None` the target node is created (with ancestors)
/// but its existing properties are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistData {
    /// Properties to apply with full-replace semantics, if any
    pub properties: Option<PropertyMap>,
}

impl PersistData {
    /// Request replacing the node's non-reserved properties with `properties`
    #[must_use]
    pub fn new(properties: PropertyMap) -> Self {
        Self {
            properties: Some(properties),
        }
    }

    /// Request creating the node without touching its properties
    #[must_use]
    pub fn node_only() -> Self {
        Self { properties: None }
    }
}

/// One named item of a collection write
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionItem {
    /// Child node name under the collection parent
    pub name: String,
    /// Properties to apply to the item node
    pub properties: PropertyMap,
}

impl CollectionItem {
    pub fn new(name: impl Into<String>, properties: PropertyMap) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }
}

/// A collection write request: full-replace of the parent's children.
///
/// Item order is caller-significant; items are written in the order given.
/// Existing children of the parent that are not re-listed do not survive
/// the write: an empty item list legally empties the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionPersistData {
    /// Properties to apply to the collection parent itself, if any
    pub container_properties: Option<PropertyMap>,
    /// Items in write order
    pub items: Vec<CollectionItem>,
}

impl CollectionPersistData {
    #[must_use]
    pub fn new(items: Vec<CollectionItem>) -> Self {
        Self {
            container_properties: None,
            items,
        }
    }

    /// Also apply `properties` to the collection parent node
    #[must_use]
    pub fn with_container_properties(mut self, properties: PropertyMap) -> Self {
        self.container_properties = Some(properties);
        self
    }
}
