//! Catalog Source Registry
//!
//! Auto-registration system for catalog sources using linkme distributed slices.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::path::PathBuf;
use std::sync::Arc;

use qvs_domain::ports::providers::CatalogSource;

/// Configuration for catalog source creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CatalogSourceConfig {
    /// Provider name (e.g., "filesystem", "stub")
    pub provider: String,
    /// Catalog file path
    pub path: Option<PathBuf>,
    /// Number of generated items
    pub items: Option<usize>,
    /// Dimension of generated vectors
    pub dimensions: Option<usize>,
}

impl CatalogSourceConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the catalog path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the generated item count
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    /// Set the generated vector dimension
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

/// Registry entry for catalog sources
///
/// Each catalog source registers itself with this entry using
/// `#[linkme::distributed_slice(CATALOG_SOURCES)]`.
pub struct CatalogSourceEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&CatalogSourceConfig) -> Result<Arc<dyn CatalogSource>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static CATALOG_SOURCES: [CatalogSourceEntry] = [..];

/// Resolve catalog source by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn CatalogSource>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_catalog_source(
    config: &CatalogSourceConfig,
) -> Result<Arc<dyn CatalogSource>, String> {
    let provider_name = &config.provider;

    for entry in CATALOG_SOURCES {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CATALOG_SOURCES.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown catalog source '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered catalog sources as (name, description) tuples
pub fn list_catalog_sources() -> Vec<(&'static str, &'static str)> {
    CATALOG_SOURCES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
