//! Similarity Scorer and Top-K Selector
//!
//! Scores are integer dot products of quantized unit vectors. They order
//! items the same way cosine similarity of the original embeddings does,
//! but are not rescaled into `[-1, 1]`.
//!
//! Ranking is an exhaustive `O(N·D)` scan with no pruning.

use qvs_domain::constants::{MAX_DIMENSION, TOP_K_MAX, TOP_K_MIN};
use qvs_domain::{IndexedItem, KParam, Match, QuantizedVector, TopKBounds};

/// Integer dot product of two equal-length quantized vectors
///
/// The `i32` accumulator cannot overflow for slices no longer than
/// [`MAX_DIMENSION`], which every [`qvs_domain::CatalogIndex`] guarantees.
/// Callers guarantee equal lengths.
#[inline]
pub fn score(query: &[i8], item: &[i8]) -> i32 {
    debug_assert_eq!(query.len(), item.len());
    debug_assert!(query.len() <= MAX_DIMENSION);
    query
        .iter()
        .zip(item)
        .map(|(&a, &b)| i32::from(a) * i32::from(b))
        .sum()
}

/// Score every item and order by descending score
///
/// Equal scores are ordered by item id ascending.
pub fn rank<'a>(query: &QuantizedVector, items: &'a [IndexedItem]) -> Vec<Match<'a>> {
    let mut matches: Vec<Match<'a>> = items
        .iter()
        .map(|item| Match {
            item,
            score: score(query.as_slice(), item.vector.as_slice()),
        })
        .collect();

    matches.sort_unstable_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.item.id.cmp(&b.item.id))
    });
    matches
}

/// Keep the first `min(k, N)` ranked matches
///
/// `k` is held inside the fixed operational range `[1, 50]`.
pub fn top_k(mut ranked: Vec<Match<'_>>, k: usize) -> Vec<Match<'_>> {
    ranked.truncate(k.clamp(TOP_K_MIN, TOP_K_MAX));
    ranked
}

/// Resolve the requested result count against the configured bounds
pub fn clamp_k(requested: KParam, bounds: TopKBounds) -> usize {
    match requested {
        KParam::Absent => bounds.default,
        KParam::Invalid => bounds.min,
        // Negative counts fail the conversion and land on the minimum
        KParam::Number(n) => {
            usize::try_from(n).map_or(bounds.min, |n| n.clamp(bounds.min, bounds.max))
        }
    }
}
