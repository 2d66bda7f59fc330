//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.

use async_trait::async_trait;
use qvs_domain::error::Result;
use qvs_domain::{CatalogIndex, Embedding, KParam, SearchQuery, SearchResponse};
use std::sync::Arc;

// ============================================================================
// Index Store Interface
// ============================================================================

/// Shared, lazily-initialized catalog index
///
/// The first call to [`get_index`](Self::get_index) loads the catalog; every
/// later call observes the outcome of that single load.
#[async_trait]
pub trait IndexStoreInterface: Send + Sync {
    /// Get the index, loading it on first access
    async fn get_index(&self) -> Result<Arc<CatalogIndex>>;

    /// Item count of the loaded index, `None` until a load succeeded
    fn item_count(&self) -> Option<usize>;

    /// Whether a load has succeeded
    fn is_loaded(&self) -> bool {
        self.item_count().is_some()
    }
}

// ============================================================================
// Search Service Interface
// ============================================================================

/// Query Contract
///
/// Decode query, score against the index, select top-k, attach metadata.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Search with a transport-encoded query vector
    async fn search(&self, query: SearchQuery) -> Result<SearchResponse>;

    /// Search with a raw floating-point embedding
    async fn search_embedding(&self, embedding: &Embedding, k: KParam) -> Result<SearchResponse>;
}
