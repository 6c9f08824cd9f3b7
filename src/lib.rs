//! Pereval API - REST service for registering mountain pass submissions.
//!
//! Accepts one submission describing a mountain pass (reporting user,
//! coordinates, seasonal difficulty levels, attached images) and persists
//! it across four related PostgreSQL tables.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
