//! HTTP request handlers.

pub mod account;
pub mod chat;
pub mod classify;
pub mod points;
