//! Index Store Use Case
//!
//! Owns the process-wide catalog index. The index goes from unloaded to
//! either loaded or failed exactly once and never changes afterwards;
//! picking up a new catalog requires a new store (in practice, a restart).

use crate::ports::services::IndexStoreInterface;
use async_trait::async_trait;
use qvs_domain::error::{Error, Result};
use qvs_domain::ports::providers::CatalogSource;
use qvs_domain::CatalogIndex;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Outcome of the one load attempt; failures keep only their message
type LoadOutcome = std::result::Result<Arc<CatalogIndex>, String>;

/// Lazily-initialized index store
///
/// Concurrent first callers await the same in-flight load, so the source
/// is read at most once per store.
pub struct LazyIndexStore {
    source: Arc<dyn CatalogSource>,
    cell: OnceCell<LoadOutcome>,
}

impl LazyIndexStore {
    /// Create an unloaded store over a catalog source
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    async fn load(&self) -> LoadOutcome {
        let started = Instant::now();
        let built = match self.source.load().await {
            Ok(document) => CatalogIndex::from_document(document),
            Err(e) => Err(e),
        };

        match built {
            Ok(index) => {
                info!(
                    items = index.len(),
                    dim = index.dimension(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    source = %self.source.describe(),
                    "index loaded"
                );
                Ok(Arc::new(index))
            }
            Err(e) => {
                let message = failure_message(&e);
                error!(
                    source = %self.source.describe(),
                    error = %message,
                    "index load failed"
                );
                Err(message)
            }
        }
    }
}

fn failure_message(err: &Error) -> String {
    match err {
        Error::IndexLoad { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl IndexStoreInterface for LazyIndexStore {
    async fn get_index(&self) -> Result<Arc<CatalogIndex>> {
        match self.cell.get_or_init(|| self.load()).await {
            Ok(index) => Ok(Arc::clone(index)),
            Err(message) => Err(Error::index_load(message.clone())),
        }
    }

    fn item_count(&self) -> Option<usize> {
        match self.cell.get() {
            Some(Ok(index)) => Some(index.len()),
            _ => None,
        }
    }
}
