//! # Domain Layer
//!
//! Core types and rules for quantized visual similarity search.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codec`] | L2 normalization, int8 quantization and base64 transport |
//! | [`value_objects`] | Embeddings, quantized vectors, catalog index and search shapes |
//! | [`ports`] | Provider contracts implemented outside the domain |
//! | [`error`] | Domain error type and wire error categories |
//! | [`constants`] | Quantization range and top-k bounds |

pub mod codec;
pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use error::{Error, ErrorCategory, Result};
pub use value_objects::{
    CatalogDocument, CatalogIndex, CatalogRecord, Embedding, IndexedItem, KParam, Match,
    QuantizedVector, SearchMatch, SearchQuery, SearchResponse, TopKBounds,
};
