//! Default persistence strategy
//!
//! The default strategy is quite simple: it uses the configuration paths
//! directly. All existing non-reserved properties are removed when new
//! properties are stored in a singleton config node, and all existing
//! children are removed when a collection is stored.

use crate::config::StrategyConfig;
use crate::data::{CollectionPersistData, PersistData};
use crate::error::{Error, Result};
use crate::filter::{PropertyFilter, ReservedProperties};
use crate::store::{Node, PropertyMap, ResourceStore};
use crate::strategy::PersistenceStrategy;
use log::trace;
use std::sync::Arc;

/// Identity-mapping persistence strategy with full-replace writes.
///
/// Logical paths are used as storage paths unchanged, so while enabled this
/// strategy claims every resource. When disabled it declines everything and
/// touches nothing, letting the next strategy in the chain take over.
pub struct DefaultPersistenceStrategy {
    config: StrategyConfig,
    filter: Arc<dyn PropertyFilter>,
}

impl Default for DefaultPersistenceStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultPersistenceStrategy {
    /// Strategy with the default config (enabled) and the default
    /// [`ReservedProperties`] filter
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StrategyConfig::default())
    }

    /// Strategy with an explicit config
    #[must_use]
    pub fn with_config(config: StrategyConfig) -> Self {
        Self {
            config,
            filter: Arc::new(ReservedProperties::new()),
        }
    }

    /// Replace the reserved-property filter policy
    #[must_use]
    pub fn with_filter(mut self, filter: Arc<dyn PropertyFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// The config this strategy was constructed with
    #[must_use]
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    fn get_or_create(
        &self,
        store: &mut dyn ResourceStore,
        path: &str,
        properties: Option<&PropertyMap>,
    ) -> Result<()> {
        store.get_or_create(path).map_err(|e| Error::Persist {
            path: path.to_string(),
            source: e,
        })?;
        if let Some(properties) = properties {
            self.replace_properties(store, path, properties)?;
        }
        Ok(())
    }

    /// Full-replace of a node's property set: every existing property the
    /// filter does not mark reserved is removed, then all new entries are
    /// written. Final set = reserved-existing ∪ new, new wins on collision.
    fn replace_properties(
        &self,
        store: &mut dyn ResourceStore,
        path: &str,
        properties: &PropertyMap,
    ) -> Result<()> {
        trace!("! Store properties for node {path}");
        let wrap = |e| Error::Persist {
            path: path.to_string(),
            source: e,
        };

        let existing = store.properties(path).map_err(wrap)?;
        for name in existing.keys() {
            if !self.filter.is_reserved(name) {
                store.remove_property(path, name).map_err(wrap)?;
            }
        }
        for (name, value) in properties {
            store.set_property(path, name, value.clone()).map_err(wrap)?;
        }
        Ok(())
    }

    fn delete_children(&self, store: &mut dyn ResourceStore, parent_path: &str) -> Result<()> {
        let wrap = |e| Error::RemoveChildren {
            path: parent_path.to_string(),
            source: e,
        };

        for name in store.child_names(parent_path).map_err(wrap)? {
            let child_path = join_path(parent_path, &name);
            trace!("! Delete node {child_path}");
            store.delete(&child_path).map_err(wrap)?;
        }
        Ok(())
    }

    fn commit(&self, store: &mut dyn ResourceStore, path: &str) -> Result<()> {
        store.commit().map_err(|e| Error::Commit {
            path: path.to_string(),
            source: e,
        })
    }
}

impl PersistenceStrategy for DefaultPersistenceStrategy {
    fn storage_path(&self, logical_path: &str) -> Option<String> {
        if !self.config.enabled {
            return None;
        }
        Some(logical_path.to_string())
    }

    fn logical_node<'a>(&self, node: &'a Node) -> Option<&'a Node> {
        if !self.config.enabled {
            return None;
        }
        Some(node)
    }

    fn persist(
        &self,
        store: &mut dyn ResourceStore,
        storage_path: &str,
        data: &PersistData,
    ) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }
        self.get_or_create(store, storage_path, data.properties.as_ref())?;
        self.commit(store, storage_path)?;
        Ok(true)
    }

    fn persist_collection(
        &self,
        store: &mut dyn ResourceStore,
        parent_path: &str,
        data: &CollectionPersistData,
    ) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }
        self.get_or_create(store, parent_path, data.container_properties.as_ref())?;

        // Delete existing children, then create the new ones in item order
        self.delete_children(store, parent_path)?;
        for item in &data.items {
            let item_path = join_path(parent_path, &item.name);
            self.get_or_create(store, &item_path, Some(&item.properties))?;
        }

        self.commit(store, parent_path)?;
        Ok(true)
    }

    fn delete(&self, store: &mut dyn ResourceStore, storage_path: &str) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }
        if store.exists(storage_path) {
            trace!("! Delete node {storage_path}");
            store.delete(storage_path).map_err(|e| Error::Delete {
                path: storage_path.to_string(),
                source: e,
            })?;
        }
        self.commit(store, storage_path)?;
        Ok(true)
    }
}

fn join_path(parent: &str, name: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_identity_mapping_when_enabled() {
        let strategy = DefaultPersistenceStrategy::new();
        assert_eq!(
            strategy.storage_path("conf/app").as_deref(),
            Some("conf/app")
        );

        let node = Node {
            path: "conf/app".into(),
            properties: PropertyMap::new(),
        };
        assert_eq!(strategy.logical_node(&node), Some(&node));
    }

    #[test]
    fn test_mappings_decline_when_disabled() {
        let strategy = DefaultPersistenceStrategy::with_config(StrategyConfig::disabled());
        assert_eq!(strategy.storage_path("conf/app"), None);

        let node = Node {
            path: "conf/app".into(),
            properties: PropertyMap::new(),
        };
        assert!(strategy.logical_node(&node).is_none());
    }

    #[test]
    fn test_persist_creates_ancestors() {
        let strategy = DefaultPersistenceStrategy::new();
        let mut store = MemoryStore::new();

        let data = PersistData::new(PropertyMap::from([("a".to_string(), json!(1))]));
        assert!(strategy.persist(&mut store, "conf/deep/app", &data).unwrap());

        assert!(store.exists("conf"));
        assert!(store.exists("conf/deep"));
        assert_eq!(store.properties("conf/deep/app").unwrap()["a"], json!(1));
    }

    #[test]
    fn test_persist_node_only_keeps_properties() {
        let strategy = DefaultPersistenceStrategy::new();
        let mut store = MemoryStore::new();

        strategy
            .persist(
                &mut store,
                "conf/app",
                &PersistData::new(PropertyMap::from([("a".to_string(), json!(1))])),
            )
            .unwrap();
        strategy
            .persist(&mut store, "conf/app", &PersistData::node_only())
            .unwrap();

        assert_eq!(store.properties("conf/app").unwrap()["a"], json!(1));
    }

    #[test]
    fn test_join_path_trailing_slash() {
        assert_eq!(join_path("conf/app/", "item"), "conf/app/item");
        assert_eq!(join_path("conf/app", "item"), "conf/app/item");
    }
}
