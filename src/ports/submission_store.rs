//! Submission store port (write side).
//!
//! Defines the contract for persisting the four records of a pass
//! submission. Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Insert-only**: this service never reads, updates, or deletes
//! - **Caller-ordered**: the request handler calls these in a fixed order
//!   (user, coords, pereval, images) and threads the generated ids through

use crate::domain::foundation::DomainError;
use crate::domain::submission::{Coords, PerevalSubmission, SubmittedBy, SubmittedImage};
use async_trait::async_trait;

/// Store port for pass submission persistence.
///
/// Each operation inserts one row and returns its generated id. All
/// failures surface as `DatabaseError`; the store does not retry and does
/// not distinguish error kinds.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert the reporting user.
    async fn insert_user(&self, user: &SubmittedBy) -> Result<i64, DomainError>;

    /// Insert the pass coordinates.
    async fn insert_coords(&self, coords: &Coords) -> Result<i64, DomainError>;

    /// Insert the pass submission row, referencing previously created
    /// user and coordinate rows.
    async fn insert_pereval(
        &self,
        submission: &PerevalSubmission,
        user_id: i64,
        coord_id: i64,
    ) -> Result<i64, DomainError>;

    /// Insert one attached image, referencing the pass submission row.
    async fn insert_image(
        &self,
        pereval_id: i64,
        image: &SubmittedImage,
    ) -> Result<i64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn submission_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SubmissionStore) {}
    }
}
