//! Catalog Value Objects
//!
//! The persisted catalog document and the validated in-memory index built
//! from it.
//!
//! ## Persisted format
//!
//! ```text
//! {
//!   "dim": 512,
//!   "items": [
//!     { "id": "15970", "image": "/products/15970.jpg", "title": "...",
//!       "price": 42.5, "description": "...", "vec_b64": "..." }
//!   ]
//! }
//! ```

use crate::codec;
use crate::constants::MAX_DIMENSION;
use crate::error::{Error, Result};
use crate::value_objects::QuantizedVector;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Persisted catalog document, as produced by the catalog build pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    /// Declared vector dimension
    pub dim: usize,
    /// Catalog entries in index order
    pub items: Vec<CatalogRecord>,
}

/// One persisted catalog entry with its transport-encoded vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRecord {
    /// Unique item identifier
    pub id: String,
    /// Opaque image path or URL
    pub image: String,
    /// Display title
    pub title: String,
    /// Item price
    pub price: f64,
    /// Free-text description
    pub description: String,
    /// Base64 of the item's raw int8 vector bytes
    pub vec_b64: String,
}

/// Entity: Indexed Catalog Item
///
/// Immutable once built; its vector length equals the index dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedItem {
    /// Unique item identifier
    pub id: String,
    /// Opaque image path or URL
    pub image: String,
    /// Display title
    pub title: String,
    /// Item price
    pub price: f64,
    /// Free-text description
    pub description: String,
    /// Quantized item vector
    pub vector: QuantizedVector,
}

/// In-memory catalog index
///
/// Every item's vector has exactly `dimension` components, ids are unique
/// and `dimension` is at most [`MAX_DIMENSION`].
/// Construction is the only way in, so a held index is always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogIndex {
    dimension: usize,
    items: Vec<IndexedItem>,
}

impl CatalogIndex {
    /// Build an index from already-decoded items
    pub fn new(dimension: usize, items: Vec<IndexedItem>) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::index_load("catalog dimension must be at least 1"));
        }
        if dimension > MAX_DIMENSION {
            return Err(Error::index_load(format!(
                "catalog dimension {dimension} exceeds the supported maximum {MAX_DIMENSION}"
            )));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.vector.len() != dimension {
                return Err(Error::index_load(format!(
                    "item {position} ('{}') has {} components, expected {dimension}",
                    item.id,
                    item.vector.len()
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(Error::index_load(format!(
                    "item {position} reuses id '{}'",
                    item.id
                )));
            }
        }

        Ok(Self { dimension, items })
    }

    /// Decode and validate a persisted catalog document
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let dimension = document.dim;
        let items = document
            .items
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let vector = codec::decode(&record.vec_b64).map_err(|e| {
                    Error::index_load(format!(
                        "item {position} ('{}') has an undecodable vector: {e}",
                        record.id
                    ))
                })?;
                Ok(IndexedItem {
                    id: record.id,
                    image: record.image,
                    title: record.title,
                    price: record.price,
                    description: record.description,
                    vector,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(dimension, items)
    }

    /// Vector dimension shared by every item
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Items in catalog order
    pub fn items(&self) -> &[IndexedItem] {
        &self.items
    }

    /// Number of indexed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
