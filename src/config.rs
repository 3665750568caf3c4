//! Strategy configuration

/// Configuration for [`DefaultPersistenceStrategy`](crate::DefaultPersistenceStrategy)
///
/// Injected at construction and immutable afterwards; reconfiguring means
/// building a new strategy instance with a new config. The `enabled` flag
/// is the single switch: a disabled strategy declines every request so the
/// chain can fall through to the next registered strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Enable this persistence strategy (default: true)
    pub enabled: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl StrategyConfig {
    /// Config with the strategy enabled (the documented default)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with the strategy disabled
    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert!(StrategyConfig::default().enabled);
        assert!(StrategyConfig::new().enabled);
    }

    #[test]
    fn test_disabled() {
        assert!(!StrategyConfig::disabled().enabled);
    }
}
