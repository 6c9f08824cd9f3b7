//! Submission HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{SubmitDataRequest, SubmitDataResponse};
pub use handlers::SubmissionHandlers;
pub use routes::submission_routes;
