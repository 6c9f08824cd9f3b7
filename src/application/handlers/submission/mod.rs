//! Submission command handlers.

mod submit_data;

pub use submit_data::{SubmitDataCommand, SubmitDataHandler};
