//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! Two body shapes exist, carried over from the API contract: the account
//! routes answer `{"success": false, "message": ...}`, everything else
//! answers `{"error": ...}`. Every error resolves here at the route
//! boundary; none propagate as uncaught faults.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ecobot_types::error::{AccountError, StoreError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A required signup/login field was absent or empty.
    MissingFields,
    /// Signup email already present in the store.
    DuplicateEmail,
    /// Login email+password did not match any record.
    InvalidCredentials,
    /// A route requiring a session was called without one.
    NotLoggedIn,
    /// Classify called without an image file.
    NoImage,
    /// Gateway failure; the message is the route's fixed generic text.
    Upstream(&'static str),
    /// Store or other internal failure. The detail is logged, not sent.
    Internal(String),
}

impl From<AccountError> for AppError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::MissingFields => AppError::MissingFields,
            AccountError::DuplicateEmail => AppError::DuplicateEmail,
            AccountError::InvalidCredentials => AppError::InvalidCredentials,
            AccountError::Store(err) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingFields => account_error(
                StatusCode::BAD_REQUEST,
                "All fields are required",
            ),
            AppError::DuplicateEmail => account_error(
                StatusCode::BAD_REQUEST,
                "User already exists!",
            ),
            AppError::InvalidCredentials => account_error(
                StatusCode::UNAUTHORIZED,
                "Invalid email or password",
            ),
            AppError::NotLoggedIn => plain_error(StatusCode::UNAUTHORIZED, "Not logged in"),
            AppError::NoImage => plain_error(StatusCode::BAD_REQUEST, "No image uploaded"),
            AppError::Upstream(message) => {
                plain_error(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                plain_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn account_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

fn plain_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
