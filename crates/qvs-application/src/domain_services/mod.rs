//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`ranking`] | Brute-force integer scoring and top-k selection |

/// Scoring and top-k selection
pub mod ranking;

pub use ranking::{clamp_k, rank, score, top_k};
