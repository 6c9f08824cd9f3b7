//! Submission domain module.
//!
//! A pereval submission is the root entity of this system: one reporting
//! user, one set of coordinates, four seasonal difficulty levels, and zero
//! or more attached images. All four records are created together within a
//! single request and never read back by this service.

mod submission;

pub use submission::{
    Coords, PerevalSubmission, SeasonLevels, SubmittedBy, SubmittedImage, NEW_STATUS,
};
