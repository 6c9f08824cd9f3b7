//! HTTP routes for submission endpoints.

use axum::{routing::post, Router};

use super::handlers::{submit_data, SubmissionHandlers};

/// Creates the submission router. Mounted under `/api/v1`.
pub fn submission_routes(handlers: SubmissionHandlers) -> Router {
    Router::new()
        .route("/submitData", post(submit_data))
        .with_state(handlers)
}
