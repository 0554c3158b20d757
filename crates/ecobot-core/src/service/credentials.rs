//! Credential comparison trait.
//!
//! The inherited data holds plaintext passwords compared byte-for-byte, a
//! known security gap. Isolating the comparison here means a hashed scheme
//! (argon2 etc.) can replace the infra implementation without touching
//! login logic or the route layer.

/// Trait for checking a submitted password against the stored one.
pub trait PasswordVerifier: Send + Sync {
    /// Whether `submitted` matches the `stored` credential.
    fn verify(&self, submitted: &str, stored: &str) -> bool;
}
