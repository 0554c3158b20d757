use thiserror::Error;

/// Errors from the user store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store content is not well-formed: {0}")]
    Parse(String),

    #[error("email '{0}' already exists")]
    Conflict(String),

    #[error("user not found")]
    NotFound,
}

/// Errors from account operations (signup, login).
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("all fields are required")]
    MissingFields,

    #[error("user already exists")]
    DuplicateEmail,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the AI gateway.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure, including request timeout.
    #[error("gateway request failed: {0}")]
    Http(String),

    /// The upstream API answered with a non-success status.
    #[error("gateway error {status}: {body}")]
    Api { status: u16, body: String },

    /// A 2xx response that carried no usable text content.
    #[error("gateway response contained no text content")]
    MissingContent,
}
