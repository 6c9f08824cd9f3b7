//! HTTP handlers for the submission endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::submission::{SubmitDataCommand, SubmitDataHandler};

use super::dto::{SubmitDataRequest, SubmitDataResponse};

/// Handler state for submission routes.
#[derive(Clone)]
pub struct SubmissionHandlers {
    submit_handler: Arc<SubmitDataHandler>,
}

impl SubmissionHandlers {
    pub fn new(submit_handler: Arc<SubmitDataHandler>) -> Self {
        Self { submit_handler }
    }
}

/// POST /api/v1/submitData - Register a new pass submission
pub async fn submit_data(
    State(handlers): State<SubmissionHandlers>,
    Json(req): Json<SubmitDataRequest>,
) -> Response {
    let cmd = SubmitDataCommand {
        submission: req.into(),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(pereval_id) => (
            StatusCode::CREATED,
            Json(SubmitDataResponse::created(pereval_id)),
        )
            .into_response(),
        // Failure envelopes ship over HTTP 200; clients read the embedded
        // status, not the transport code.
        Err(e) => (StatusCode::OK, Json(SubmitDataResponse::error(e.message))).into_response(),
    }
}
