//! HTTP adapters - REST API implementations.

pub mod submission;

// Re-export key types for convenience
pub use submission::submission_routes;
pub use submission::SubmissionHandlers;
