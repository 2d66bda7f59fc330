//! Embedding Value Objects
//!
//! Floating-point embeddings produced by the feature extractor and the
//! int8 vectors they are quantized into.

use serde::{Deserialize, Serialize};

/// Value Object: Image Embedding
///
/// A fixed-length feature vector from the external feature extractor.
/// Not unit-length by construction; see [`crate::codec::normalize`].
///
/// ## Example
///
/// ```rust
/// use qvs_domain::Embedding;
///
/// let embedding = Embedding::new(vec![3.0, 4.0]);
/// assert_eq!(embedding.dimensions(), 2);
/// assert!((embedding.l2_norm() - 5.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
}

impl Embedding {
    /// Wrap raw extractor output
    pub fn new(vector: Vec<f32>) -> Self {
        Self { vector }
    }

    /// Dimensionality of the embedding
    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }

    /// Euclidean length of the embedding
    pub fn l2_norm(&self) -> f32 {
        self.vector
            .iter()
            .map(|&x| f64::from(x) * f64::from(x))
            .sum::<f64>()
            .sqrt() as f32
    }
}

/// Value Object: Quantized Vector
///
/// Signed 8-bit components in `[-127, 127]`, one per embedding dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QuantizedVector(Vec<i8>);

impl QuantizedVector {
    /// Components as a slice
    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no components
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take back the component buffer
    pub fn into_inner(self) -> Vec<i8> {
        self.0
    }
}

impl From<Vec<i8>> for QuantizedVector {
    fn from(values: Vec<i8>) -> Self {
        Self(values)
    }
}

impl FromIterator<i8> for QuantizedVector {
    fn from_iter<I: IntoIterator<Item = i8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[i8]> for QuantizedVector {
    fn as_ref(&self) -> &[i8] {
        &self.0
    }
}
