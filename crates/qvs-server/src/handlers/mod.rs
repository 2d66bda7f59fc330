//! Request handlers
//!
//! Handlers adapt transport encodings into [`qvs_domain::SearchQuery`] and
//! map domain errors onto wire categories. They hold no logic of their own.

pub mod catchers;
pub mod health;
pub mod vector_search;

use qvs_application::ports::services::{IndexStoreInterface, SearchServiceInterface};
use qvs_domain::error::{Error, ErrorCategory};
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for request handlers
#[derive(Clone)]
pub struct SearchState {
    /// Query contract
    pub search_service: Arc<dyn SearchServiceInterface>,
    /// Index store, for health reporting
    pub index_store: Arc<dyn IndexStoreInterface>,
}

/// Failure body: `{ "error": <category> }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error category
    pub error: String,
}

/// Error half of every fallible handler
pub type ApiError = (Status, Json<ErrorResponse>);

/// Map a domain error onto its status and wire category
///
/// Details stay in the server log; the body carries only the category.
pub fn api_error(err: &Error) -> ApiError {
    let status = if err.is_client_error() {
        Status::BadRequest
    } else {
        Status::InternalServerError
    };
    error_response(status, err.category())
}

/// Build a failure with an explicit status and category
pub fn error_response(status: Status, category: ErrorCategory) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: category.as_str().to_string(),
        }),
    )
}
