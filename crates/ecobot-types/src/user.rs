use serde::{Deserialize, Serialize};

/// Fixed number of ecopoints granted per rewarded action.
pub const ECOPOINT_AWARD: u64 = 10;

/// A registered user.
///
/// Persisted as one element of the JSON array in the user store file. The
/// email is the unique key; the record is never deleted by this service.
///
/// The password is stored and compared as plaintext, faithful to the data
/// the service inherits. The comparison itself is isolated behind the
/// `PasswordVerifier` trait in ecobot-core so a hashed scheme can replace it
/// without touching route logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    /// Unique key across the store.
    pub email: String,
    pub password: String,
    /// Reward counter; only ever incremented by exposed operations.
    pub ecopoints: u64,
}

impl User {
    /// Create a fresh user with zero ecopoints.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            ecopoints: 0,
        }
    }
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
