//! Infrastructure layer for EcoBot.
//!
//! Contains implementations of the traits defined in `ecobot-core`: the
//! JSON flat-file user store, the in-memory session store, the Gemini
//! gateway, and the plaintext credential verifier.

pub mod config;
pub mod credentials;
pub mod llm;
pub mod session;
pub mod store;
