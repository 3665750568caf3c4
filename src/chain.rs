//! Strategy chain orchestrator
//!
//! Iterates registered strategies in priority order and uses the first
//! non-declined result. With the default strategy registered last as a
//! catch-all, the chain always resolves while that strategy is enabled.

use crate::data::{CollectionPersistData, PersistData};
use crate::error::Result;
use crate::store::{Node, ResourceStore};
use crate::strategy::{DefaultPersistenceStrategy, PersistenceStrategy};
use log::debug;

/// Ordered collection of persistence strategies.
///
/// # Example
/// ```rust
/// use resconfig::{DefaultPersistenceStrategy, MemoryStore, PersistData, StrategyChain};
/// use serde_json::json;
///
/// # fn example() -> resconfig::Result<()> {
/// let chain = StrategyChain::default();
/// let mut store = MemoryStore::new();
///
/// let data = PersistData::new([("theme".to_string(), json!("dark"))].into());
/// assert!(chain.persist(&mut store, "conf/app", &data)?);
/// # Ok(())
/// # }
/// ```
pub struct StrategyChain {
    strategies: Vec<Box<dyn PersistenceStrategy>>,
}

impl Default for StrategyChain {
    /// Chain holding only the enabled [`DefaultPersistenceStrategy`]
    fn default() -> Self {
        Self::new().with_strategy(DefaultPersistenceStrategy::new())
    }
}

impl StrategyChain {
    /// Empty chain; every request is declined until a strategy is added
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy at the end of the chain (lowest priority so far)
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl PersistenceStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Number of registered strategies
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check whether no strategies are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Storage path from the first strategy that does not decline the
    /// mapping, or `None` if all decline
    #[must_use]
    pub fn storage_path(&self, logical_path: &str) -> Option<String> {
        self.strategies
            .iter()
            .find_map(|s| s.storage_path(logical_path))
    }

    /// Reverse mapping from the first strategy that claims `node`
    #[must_use]
    pub fn logical_node<'a>(&self, node: &'a Node) -> Option<&'a Node> {
        self.strategies.iter().find_map(|s| s.logical_node(node))
    }

    /// Persist through the first strategy that handles the request.
    ///
    /// Returns `Ok(false)` if every strategy declined.
    ///
    /// # Errors
    ///
    /// Propagates the persistence failure of the handling strategy.
    pub fn persist(
        &self,
        store: &mut dyn ResourceStore,
        storage_path: &str,
        data: &PersistData,
    ) -> Result<bool> {
        for (index, strategy) in self.strategies.iter().enumerate() {
            if strategy.persist(store, storage_path, data)? {
                debug!("Strategy #{index} persisted {storage_path}");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Persist a collection through the first strategy that handles it.
    ///
    /// Returns `Ok(false)` if every strategy declined.
    ///
    /// # Errors
    ///
    /// Propagates the persistence failure of the handling strategy.
    pub fn persist_collection(
        &self,
        store: &mut dyn ResourceStore,
        parent_path: &str,
        data: &CollectionPersistData,
    ) -> Result<bool> {
        for (index, strategy) in self.strategies.iter().enumerate() {
            if strategy.persist_collection(store, parent_path, data)? {
                debug!("Strategy #{index} persisted collection {parent_path}");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Delete through the first strategy that handles the request.
    ///
    /// Returns `Ok(false)` if every strategy declined.
    ///
    /// # Errors
    ///
    /// Propagates the persistence failure of the handling strategy.
    pub fn delete(&self, store: &mut dyn ResourceStore, storage_path: &str) -> Result<bool> {
        for (index, strategy) in self.strategies.iter().enumerate() {
            if strategy.delete(store, storage_path)? {
                debug!("Strategy #{index} deleted {storage_path}");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
