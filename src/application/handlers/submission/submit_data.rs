//! SubmitDataHandler - Command handler for registering a pass submission.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::submission::PerevalSubmission;
use crate::ports::SubmissionStore;

/// Command to register a new pass submission.
#[derive(Debug, Clone)]
pub struct SubmitDataCommand {
    pub submission: PerevalSubmission,
}

/// Handler for the submit-data use case.
pub struct SubmitDataHandler {
    store: Arc<dyn SubmissionStore>,
}

impl SubmitDataHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Run the insert sequence and return the new pass submission id.
    ///
    /// Rows inserted before a failing statement stay behind; there is no
    /// cleanup and no transaction spanning the sequence.
    pub async fn handle(&self, cmd: SubmitDataCommand) -> Result<i64, DomainError> {
        let submission = &cmd.submission;

        // 1. Insert the reporting user
        let user_id = self.store.insert_user(&submission.user).await?;

        // 2. Insert the coordinates
        let coord_id = self.store.insert_coords(&submission.coords).await?;

        // 3. Insert the pass submission, referencing both prior ids
        let pereval_id = self
            .store
            .insert_pereval(submission, user_id, coord_id)
            .await?;

        // 4. Insert each attached image, referencing the pass submission
        for image in &submission.images {
            self.store.insert_image(pereval_id, image).await?;
        }

        Ok(pereval_id)
    }
}
