//! # resconfig - Resource Configuration Persistence
//!
//! Pluggable persistence strategies for translating logical configuration
//! entries into nodes of a hierarchical, property-bearing resource store,
//! and back.
//!
//! ## Features
//!
//! - **Strategy chain**: register any number of [`PersistenceStrategy`]
//!   implementations; the first one that does not decline a request wins
//! - **Default strategy**: identity path mapping with full-replace write
//!   semantics and a single `enabled` switch
//! - **Reserved properties**: store-managed metadata survives full-replace
//!   writes through a pluggable [`PropertyFilter`] policy
//! - **Transactional stores**: built-in in-memory and JSON-file stores with
//!   explicit commit; an operation either fully succeeds or raises
//!
//! ## Quick Start
//!
//! ```rust
//! use resconfig::{
//!     CollectionItem, CollectionPersistData, DefaultPersistenceStrategy, MemoryStore,
//!     PersistData, PersistenceStrategy,
//! };
//! use serde_json::json;
//!
//! # fn example() -> resconfig::Result<()> {
//! let strategy = DefaultPersistenceStrategy::new();
//! let mut store = MemoryStore::new();
//!
//! // Singleton write: the node's non-reserved properties become exactly these
//! let data = PersistData::new([("theme".to_string(), json!("dark"))].into());
//! strategy.persist(&mut store, "conf/app", &data)?;
//!
//! // Collection write: the parent's children become exactly these items
//! let items = CollectionPersistData::new(vec![
//!     CollectionItem::new("first", [("order".to_string(), json!(1))].into()),
//!     CollectionItem::new("second", [("order".to_string(), json!(2))].into()),
//! ]);
//! strategy.persist_collection(&mut store, "conf/app/variants", &items)?;
//!
//! // Idempotent delete
//! strategy.delete(&mut store, "conf/app/variants")?;
//! strategy.delete(&mut store, "conf/app/variants")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Strategy Chains
//!
//! A disabled strategy declines every request (`None` for mappings,
//! `Ok(false)` for writes/deletes) with zero side effects, so a
//! [`StrategyChain`] can fall through to the next registered strategy:
//!
//! ```rust
//! use resconfig::{DefaultPersistenceStrategy, StrategyChain, StrategyConfig};
//!
//! let chain = StrategyChain::new()
//!     .with_strategy(DefaultPersistenceStrategy::with_config(StrategyConfig::disabled()))
//!     .with_strategy(DefaultPersistenceStrategy::new());
//!
//! // The disabled strategy is skipped; the enabled one claims the path
//! assert_eq!(chain.storage_path("conf/app").as_deref(), Some("conf/app"));
//! ```
//!
//! ## Reserved Properties
//!
//! Full-replace writes remove every existing property of the target node
//! except those the [`PropertyFilter`] marks as reserved. The default
//! [`ReservedProperties`] policy reserves the `sys:` prefix; stores that
//! namespace their metadata differently supply their own policy via
//! [`DefaultPersistenceStrategy::with_filter`].

// Core modules
mod chain;
mod config;
mod data;
mod error;
mod filter;
mod strategy;

// Store collaborators
pub mod store;

// Re-exports from core
pub use chain::StrategyChain;
pub use config::StrategyConfig;
pub use data::{CollectionItem, CollectionPersistData, PersistData};
pub use error::{Error, Result};
pub use filter::{PropertyFilter, ReservedProperties};
pub use strategy::{DefaultPersistenceStrategy, PersistenceStrategy};

// Store re-exports
pub use store::{JsonFileStore, MemoryStore, Node, PropertyMap, ResourceStore, StoreError};
