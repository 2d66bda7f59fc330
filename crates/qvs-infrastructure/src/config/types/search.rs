//! Search configuration types

use qvs_domain::constants::{TOP_K_DEFAULT, TOP_K_MAX, TOP_K_MIN};
use qvs_domain::error::Result;
use qvs_domain::TopKBounds;
use serde::{Deserialize, Serialize};

/// Result count bounds applied to every query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result count when the caller sends none
    pub default_k: usize,

    /// Smallest result count
    pub min_k: usize,

    /// Largest result count
    pub max_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: TOP_K_DEFAULT,
            min_k: TOP_K_MIN,
            max_k: TOP_K_MAX,
        }
    }
}

impl SearchConfig {
    /// Validated bounds
    pub fn bounds(&self) -> Result<TopKBounds> {
        TopKBounds::new(self.min_k, self.default_k, self.max_k)
    }
}
