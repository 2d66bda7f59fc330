//! Error catchers
//!
//! Requests rocket rejects before a handler runs, and handler panics, still
//! answer with `{ "error": <category> }`. Client errors (4xx) report
//! `missing_input`; everything else reports `server_error`.

use super::{ApiError, error_response};
use qvs_domain::ErrorCategory;
use rocket::http::Status;
use rocket::{Request, catch};
use tracing::warn;

/// Category reported for a status rocket produced on its own
pub fn category_for_status(status: Status) -> ErrorCategory {
    if (400..500).contains(&status.code) {
        ErrorCategory::MissingInput
    } else {
        ErrorCategory::ServerError
    }
}

/// Catch every unhandled status
#[catch(default)]
pub fn json_catcher(status: Status, request: &Request<'_>) -> ApiError {
    warn!(status = status.code, path = %request.uri().path(), "request rejected");
    error_response(status, category_for_status(status))
}
