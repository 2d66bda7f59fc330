//! In-memory catalog source for tests
//!
//! Serves a fixed document (or a fixed failure) and counts how many times it
//! was read. Not registered in the provider registry.

use async_trait::async_trait;
use qvs_domain::error::{Error, Result};
use qvs_domain::ports::providers::CatalogSource;
use qvs_domain::CatalogDocument;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Outcome {
    Document(CatalogDocument),
    Failure(String),
}

/// Catalog source holding its document in memory
pub struct InMemoryCatalogSource {
    outcome: Outcome,
    delay: Option<Duration>,
    loads: AtomicUsize,
}

impl InMemoryCatalogSource {
    /// Source that always returns `document`
    pub fn new(document: CatalogDocument) -> Self {
        Self {
            outcome: Outcome::Document(document),
            delay: None,
            loads: AtomicUsize::new(0),
        }
    }

    /// Source whose every load fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failure(message.into()),
            delay: None,
            loads: AtomicUsize::new(0),
        }
    }

    /// Hold each load open for `delay` before completing
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `load` has been entered
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load(&self) -> Result<CatalogDocument> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Outcome::Document(document) => Ok(document.clone()),
            Outcome::Failure(message) => Err(Error::index_load(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
