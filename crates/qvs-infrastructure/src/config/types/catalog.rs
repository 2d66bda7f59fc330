//! Catalog source configuration types

use crate::constants::{
    DEFAULT_CATALOG_PATH, DEFAULT_CATALOG_PROVIDER, DEFAULT_STUB_DIMENSION, DEFAULT_STUB_ITEMS,
};
use qvs_application::ports::registry::CatalogSourceConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Registered provider name ("filesystem", "stub")
    pub provider: String,

    /// Catalog file read by the filesystem provider
    pub path: PathBuf,

    /// Item count generated by the stub provider
    pub stub_items: usize,

    /// Vector dimension generated by the stub provider
    pub stub_dim: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_CATALOG_PROVIDER.to_string(),
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
            stub_items: DEFAULT_STUB_ITEMS,
            stub_dim: DEFAULT_STUB_DIMENSION,
        }
    }
}

impl CatalogConfig {
    /// Registry lookup config for the selected provider
    pub fn source_config(&self) -> CatalogSourceConfig {
        CatalogSourceConfig::new(self.provider.clone())
            .with_path(self.path.clone())
            .with_items(self.stub_items)
            .with_dimensions(self.stub_dim)
    }
}
