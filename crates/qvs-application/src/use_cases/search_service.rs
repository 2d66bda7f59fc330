//! Search Service Use Case
//!
//! The query contract: decode the query, obtain the shared index, rank every
//! item, keep the top-k and attach item metadata.

use crate::domain_services::ranking::{clamp_k, rank, top_k};
use crate::ports::services::{IndexStoreInterface, SearchServiceInterface};
use async_trait::async_trait;
use qvs_domain::codec;
use qvs_domain::error::{Error, Result};
use qvs_domain::{
    Embedding, KParam, QuantizedVector, SearchMatch, SearchQuery, SearchResponse, TopKBounds,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Search service implementation over a shared index store
pub struct SearchServiceImpl {
    index_store: Arc<dyn IndexStoreInterface>,
    bounds: TopKBounds,
}

impl SearchServiceImpl {
    /// Create a search service with the default top-k bounds
    pub fn new(index_store: Arc<dyn IndexStoreInterface>) -> Self {
        Self::with_bounds(index_store, TopKBounds::default())
    }

    /// Create a search service with explicit top-k bounds
    pub fn with_bounds(index_store: Arc<dyn IndexStoreInterface>, bounds: TopKBounds) -> Self {
        Self {
            index_store,
            bounds,
        }
    }

    fn decode_query(query: &SearchQuery) -> Result<QuantizedVector> {
        let encoded = query
            .q_b64
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::invalid_input("missing q_b64"))?;

        codec::decode(encoded)
            .map_err(|e| Error::invalid_input(format!("undecodable q_b64: {e}")))
    }

    async fn execute(
        &self,
        vector: QuantizedVector,
        k: usize,
        started: Instant,
        decode_ms: u64,
    ) -> Result<SearchResponse> {
        let index_started = Instant::now();
        let index = self.index_store.get_index().await?;
        let index_ms = elapsed_ms(index_started);

        if vector.len() != index.dimension() {
            return Err(Error::invalid_input(format!(
                "query has {} components, index dimension is {}",
                vector.len(),
                index.dimension()
            )));
        }

        let score_started = Instant::now();
        let ranked = rank(&vector, index.items());
        let matches: Vec<SearchMatch> = top_k(ranked, k).into_iter().map(Into::into).collect();
        let score_ms = elapsed_ms(score_started);

        info!(
            k,
            items = index.len(),
            elapsed_ms = elapsed_ms(started),
            decode_ms,
            index_ms,
            score_ms,
            "vector search"
        );

        Ok(SearchResponse { matches })
    }

    fn log_failure(&self, err: &Error, query_len: usize) {
        if !err.is_client_error() {
            error!(
                query_len,
                items = self.index_store.item_count(),
                error = %err,
                "vector search failed"
            );
        }
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    since.elapsed().as_millis() as u64
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, query: SearchQuery) -> Result<SearchResponse> {
        let started = Instant::now();
        let query_len = query.encoded_len();

        let result = async {
            let vector = Self::decode_query(&query)?;
            let decode_ms = elapsed_ms(started);
            let k = clamp_k(query.k, self.bounds);
            self.execute(vector, k, started, decode_ms).await
        }
        .await;

        if let Err(e) = &result {
            self.log_failure(e, query_len);
        }
        result
    }

    async fn search_embedding(&self, embedding: &Embedding, k: KParam) -> Result<SearchResponse> {
        let started = Instant::now();
        let vector = codec::quantize_embedding(&embedding.vector)?;
        let decode_ms = elapsed_ms(started);

        let result = self
            .execute(vector, clamp_k(k, self.bounds), started, decode_ms)
            .await;

        if let Err(e) = &result {
            self.log_failure(e, embedding.dimensions());
        }
        result
    }
}
