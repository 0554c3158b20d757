//! Shared domain types for the EcoBot backend.
//!
//! This crate contains the types used across the EcoBot service: the user
//! record, session tokens, gateway content, configuration, and error enums.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod session;
pub mod user;
