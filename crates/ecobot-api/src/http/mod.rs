//! HTTP layer for the EcoBot backend.
//!
//! Axum-based JSON API with a cookie-bound session, permissive CORS, and
//! static asset serving for the browser widget.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
