//! Search configuration

use serde::{Deserialize, Serialize};

/// Search service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of live suggestions shown while typing (default: 6)
    #[serde(default = "default_quick_results_limit")]
    pub quick_results_limit: usize,
}

fn default_quick_results_limit() -> usize {
    6
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quick_results_limit: default_quick_results_limit(),
        }
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn quick_results_limit(mut self, limit: usize) -> Self {
        self.config.quick_results_limit = limit;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(SearchConfig::default().quick_results_limit, 6);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SearchConfigBuilder::new().quick_results_limit(3).build();
        assert_eq!(config.quick_results_limit, 3);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: SearchConfig = toml::from_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
    }
}
