//! Vector search routes
//!
//! | Content-Type | Adapter |
//! |--------------|---------|
//! | `application/x-www-form-urlencoded` | [`SearchQuery::from_form`] |
//! | anything else | [`SearchQuery::from_json_body`] |
//!
//! Both routes take the raw, size-capped body so that truncated, non-UTF-8
//! or malformed payloads reach the query contract and are reported as
//! missing input.

use super::{ApiError, SearchState, api_error};
use qvs_domain::{SearchQuery, SearchResponse};
use rocket::FromForm;
use rocket::data::Capped;
use rocket::form::Form;
use rocket::http::RawStr;
use rocket::serde::json::Json;
use rocket::{State, post};

/// Form-encoded request fields
#[derive(Debug, FromForm)]
pub struct SearchForm {
    /// Base64 query vector
    pub q_b64: Option<String>,
    /// Requested result count, as sent
    pub k: Option<String>,
}

/// Body text, or `None` when it overran the limit or is not UTF-8
fn body_text(body: &Capped<Vec<u8>>) -> Option<&str> {
    if !body.is_complete() {
        return None;
    }
    std::str::from_utf8(body).ok()
}

/// Vector search with a form-encoded body
#[post("/api/vector-search", format = "form", data = "<body>", rank = 1)]
pub async fn vector_search_form(
    state: &State<SearchState>,
    body: Capped<Vec<u8>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = body_text(&body)
        .and_then(|text| Form::<SearchForm>::parse_encoded(RawStr::new(text)).ok())
        .map(|form| SearchQuery::from_form(form.q_b64, form.k))
        .unwrap_or_default();
    run(state, query).await
}

/// Vector search with a JSON (or untyped) body
#[post("/api/vector-search", data = "<body>", rank = 2)]
pub async fn vector_search_json(
    state: &State<SearchState>,
    body: Capped<Vec<u8>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = body_text(&body)
        .map(SearchQuery::from_json_body)
        .unwrap_or_default();
    run(state, query).await
}

async fn run(state: &SearchState, query: SearchQuery) -> Result<Json<SearchResponse>, ApiError> {
    state
        .search_service
        .search(query)
        .await
        .map(Json)
        .map_err(|e| api_error(&e))
}
