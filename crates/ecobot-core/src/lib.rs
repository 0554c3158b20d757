//! Business logic and trait definitions for the EcoBot backend.
//!
//! This crate defines the "ports" (user store, session store, gateway,
//! credential check) that the infrastructure layer implements. It depends
//! only on `ecobot-types` -- never on `ecobot-infra` or any IO crate.

pub mod llm;
pub mod prompts;
pub mod service;
pub mod session;
pub mod store;
