//! Service layer orchestrating stores, sessions, and the gateway.

pub mod account;
pub mod assistant;
pub mod credentials;
pub mod points;
