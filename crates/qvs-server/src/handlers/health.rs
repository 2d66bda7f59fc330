//! Health route

use super::SearchState;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::{Deserialize, Serialize};

/// Health response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    /// Whether the catalog index has been loaded
    pub index_loaded: bool,
}

/// Report liveness without touching the catalog
#[get("/health")]
pub fn health(state: &State<SearchState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        index_loaded: state.index_store.is_loaded(),
    })
}
