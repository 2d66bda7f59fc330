//! Filesystem catalog source
//!
//! Reads the catalog JSON file written by the offline build pipeline.

use crate::constants::CATALOG_PROVIDER_FILESYSTEM;
use async_trait::async_trait;
use qvs_domain::error::{Error, Result};
use qvs_domain::ports::providers::CatalogSource;
use qvs_domain::CatalogDocument;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Catalog source backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct FilesystemCatalogSource {
    path: PathBuf,
}

impl FilesystemCatalogSource {
    /// Create a source reading the given catalog file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FilesystemCatalogSource {
    async fn load(&self) -> Result<CatalogDocument> {
        debug!(path = %self.path.display(), "reading catalog file");

        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::index_load_with_source(
                format!("failed to read catalog {}: {e}", self.path.display()),
                e,
            )
        })?;

        serde_json::from_str(&text).map_err(|e| {
            Error::index_load_with_source(
                format!("failed to parse catalog {}: {e}", self.path.display()),
                e,
            )
        })
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn provider_name(&self) -> &str {
        CATALOG_PROVIDER_FILESYSTEM
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use qvs_application::ports::registry::{
    CATALOG_SOURCES, CatalogSourceConfig, CatalogSourceEntry,
};

/// Factory function for creating filesystem catalog source instances.
fn filesystem_catalog_source_factory(
    config: &CatalogSourceConfig,
) -> std::result::Result<Arc<dyn CatalogSource>, String> {
    let path = config
        .path
        .clone()
        .ok_or_else(|| "filesystem catalog source requires a path".to_string())?;
    Ok(Arc::new(FilesystemCatalogSource::new(path)))
}

#[linkme::distributed_slice(CATALOG_SOURCES)]
static FILESYSTEM_PROVIDER: CatalogSourceEntry = CatalogSourceEntry {
    name: CATALOG_PROVIDER_FILESYSTEM,
    description: "Catalog JSON file produced by the build pipeline",
    factory: filesystem_catalog_source_factory,
};
