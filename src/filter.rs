//! Reserved-property filter policy
//!
//! Decides which existing property names are store/system metadata that a
//! full-replace write must never remove.

use std::collections::HashSet;

/// Policy marking property names as reserved (store-managed metadata)
pub trait PropertyFilter: Send + Sync {
    /// Check whether `name` is reserved and must survive a full-replace
    fn is_reserved(&self, name: &str) -> bool;
}

/// Default filter: reserves exact names and name prefixes.
///
/// Out of the box only the `sys:` prefix is reserved; both lists are
/// extensible for stores that namespace their metadata differently.
///
/// # Example
/// ```rust
/// use resconfig::{PropertyFilter, ReservedProperties};
///
/// let filter = ReservedProperties::new()
///     .with_prefix("jcr:")
///     .with_name("etag");
///
/// assert!(filter.is_reserved("sys:created"));
/// assert!(filter.is_reserved("jcr:primaryType"));
/// assert!(filter.is_reserved("etag"));
/// assert!(!filter.is_reserved("theme"));
/// ```
#[derive(Debug, Clone)]
pub struct ReservedProperties {
    names: HashSet<String>,
    prefixes: Vec<String>,
}

impl Default for ReservedProperties {
    fn default() -> Self {
        Self {
            names: HashSet::new(),
            prefixes: vec!["sys:".to_string()],
        }
    }
}

impl ReservedProperties {
    /// Filter reserving only the default `sys:` prefix
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter reserving nothing at all
    #[must_use]
    pub fn none() -> Self {
        Self {
            names: HashSet::new(),
            prefixes: Vec::new(),
        }
    }

    /// Reserve an exact property name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Reserve every property name starting with `prefix`
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }
}

impl PropertyFilter for ReservedProperties {
    fn is_reserved(&self, name: &str) -> bool {
        self.names.contains(name) || self.prefixes.iter().any(|p| name.starts_with(p))
    }
}
