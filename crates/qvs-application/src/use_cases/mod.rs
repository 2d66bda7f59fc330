//! Use Cases
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`LazyIndexStore`] | Single-flight, load-once catalog index |
//! | [`SearchServiceImpl`] | Query contract over the shared index |

pub mod index_store;
pub mod search_service;

pub use index_store::LazyIndexStore;
pub use search_service::SearchServiceImpl;
