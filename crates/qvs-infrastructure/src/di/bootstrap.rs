//! Application bootstrap
//!
//! ```text
//! AppConfig → catalog registry → CatalogSource → LazyIndexStore → SearchServiceImpl
//!                    ↑
//!                  linkme
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//! let response = context.search_service().search(query).await?;
//! ```

use crate::config::AppConfig;
use crate::utils::TimedOperation;
use qvs_application::ports::registry::resolve_catalog_source;
use qvs_application::ports::services::{IndexStoreInterface, SearchServiceInterface};
use qvs_application::use_cases::{LazyIndexStore, SearchServiceImpl};
use qvs_domain::error::{Error, Result};
use qvs_domain::ports::providers::CatalogSource;
use std::sync::Arc;
use tracing::info;

/// Application context shared by every transport
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    catalog_source: Arc<dyn CatalogSource>,
    index_store: Arc<dyn IndexStoreInterface>,
    search_service: Arc<dyn SearchServiceInterface>,
}

impl AppContext {
    /// Catalog source selected by configuration
    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.catalog_source)
    }

    /// Shared index store
    pub fn index_store(&self) -> Arc<dyn IndexStoreInterface> {
        Arc::clone(&self.index_store)
    }

    /// Query contract over the shared index
    pub fn search_service(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search_service)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("catalog_source", &self.catalog_source.describe())
            .field("index_loaded", &self.index_store.is_loaded())
            .finish_non_exhaustive()
    }
}

/// Build the application context from configuration
///
/// Resolves the catalog provider by name and validates the top-k bounds.
/// The catalog itself is not read here; the first search loads it.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let timer = TimedOperation::start();
    let config = Arc::new(config);

    let bounds = config.search.bounds()?;
    let catalog_source = resolve_catalog_source(&config.catalog.source_config())
        .map_err(Error::config)?;

    let index_store: Arc<dyn IndexStoreInterface> =
        Arc::new(LazyIndexStore::new(Arc::clone(&catalog_source)));
    let search_service: Arc<dyn SearchServiceInterface> = Arc::new(
        SearchServiceImpl::with_bounds(Arc::clone(&index_store), bounds),
    );

    info!(
        provider = catalog_source.provider_name(),
        source = %catalog_source.describe(),
        default_k = bounds.default,
        max_k = bounds.max,
        elapsed_ms = timer.elapsed_ms(),
        "application context ready"
    );

    Ok(AppContext {
        config,
        catalog_source,
        index_store,
        search_service,
    })
}
