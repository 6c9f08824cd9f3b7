//! Adapters - Implementations of ports against real infrastructure.
//!
//! - `http` - axum REST endpoint exposure
//! - `postgres` - sqlx-backed persistence

pub mod http;
pub mod postgres;
