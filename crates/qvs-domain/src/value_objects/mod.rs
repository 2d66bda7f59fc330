//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Floating-point feature vector from the extractor |
//! | [`QuantizedVector`] | Symmetric int8 vector used for scoring |
//! | [`CatalogDocument`] | Persisted catalog as written by the build pipeline |
//! | [`CatalogIndex`] | Validated in-memory index of [`IndexedItem`]s |
//! | [`SearchQuery`] | Encoding-agnostic search request |
//! | [`SearchResponse`] | Ranked matches with item metadata |

/// Catalog and index value objects
pub mod catalog;
/// Embedding and quantized vector value objects
pub mod embedding;
/// Search request and result value objects
pub mod search;

// Re-export commonly used value objects
pub use catalog::{CatalogDocument, CatalogIndex, CatalogRecord, IndexedItem};
pub use embedding::{Embedding, QuantizedVector};
pub use search::{KParam, Match, SearchMatch, SearchQuery, SearchResponse, TopKBounds};
