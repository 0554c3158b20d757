//! Plaintext credential verifier.
//!
//! Byte-for-byte comparison against the stored plaintext password, matching
//! the data this service inherits. Swapping this for a hashed scheme only
//! means replacing this implementation; login logic never sees the
//! difference.

use ecobot_core::service::credentials::PasswordVerifier;

/// Exact-match plaintext verifier.
pub struct PlaintextVerifier;

impl PasswordVerifier for PlaintextVerifier {
    fn verify(&self, submitted: &str, stored: &str) -> bool {
        submitted == stored
    }
}
