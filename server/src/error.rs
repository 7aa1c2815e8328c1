//! Error types for the HTTP surface.
//!
//! # Design
//! Only two outcomes in this API are errors, and both are expected,
//! recoverable, caller-visible ones: the requested id does not exist
//! (404) or a create collides with existing content (409). Storage is
//! in-memory and never fails, so no other variants exist.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors a handler can return to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// No item with the requested id exists — 404.
    NotFound,

    /// An existing item already has the same content — 409, not created.
    Conflict,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "item not found"),
            ApiError::Conflict => write!(f, "an item with the same content already exists"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
        };
        status.into_response()
    }
}
