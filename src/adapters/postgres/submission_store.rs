//! PostgreSQL implementation of SubmissionStore.
//!
//! Persists the four records of a pass submission with one parameterized
//! insert each. Statements run in autocommit mode against a shared pool.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{PgPool, Postgres, Row};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::submission::{
    Coords, PerevalSubmission, SubmittedBy, SubmittedImage, NEW_STATUS,
};
use crate::ports::SubmissionStore;

/// PostgreSQL implementation of SubmissionStore.
#[derive(Clone)]
pub struct PostgresSubmissionStore {
    pool: PgPool,
}

impl PostgresSubmissionStore {
    /// Creates a new PostgresSubmissionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Execute one parameterized statement and return all result rows.
    ///
    /// Every failure is logged here and collapsed into a single
    /// `DatabaseError` carrying the driver's message; callers cannot tell a
    /// constraint violation from a lost connection.
    async fn fetch_rows(
        &self,
        query: sqlx::query::Query<'_, Postgres, PgArguments>,
    ) -> Result<Vec<PgRow>, DomainError> {
        query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "statement failed");
            DomainError::new(ErrorCode::DatabaseError, e.to_string())
        })
    }

    /// Read the generated id from the first returned row.
    fn generated_id(rows: Vec<PgRow>) -> Result<i64, DomainError> {
        let row = rows.first().ok_or_else(|| {
            DomainError::new(ErrorCode::DatabaseError, "insert returned no rows")
        })?;
        row.try_get("id")
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))
    }
}

#[async_trait]
impl SubmissionStore for PostgresSubmissionStore {
    async fn insert_user(&self, user: &SubmittedBy) -> Result<i64, DomainError> {
        let rows = self
            .fetch_rows(
                sqlx::query(
                    r#"
                    INSERT INTO users (email, fam, name, otc, phone)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&user.email)
                .bind(&user.fam)
                .bind(&user.name)
                .bind(&user.otc)
                .bind(&user.phone),
            )
            .await?;

        Self::generated_id(rows)
    }

    async fn insert_coords(&self, coords: &Coords) -> Result<i64, DomainError> {
        let rows = self
            .fetch_rows(
                sqlx::query(
                    r#"
                    INSERT INTO coords (latitude, longitude, height)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(coords.latitude)
                .bind(coords.longitude)
                .bind(coords.height),
            )
            .await?;

        Self::generated_id(rows)
    }

    async fn insert_pereval(
        &self,
        submission: &PerevalSubmission,
        user_id: i64,
        coord_id: i64,
    ) -> Result<i64, DomainError> {
        let rows = self
            .fetch_rows(
                sqlx::query(
                    r#"
                    INSERT INTO pereval_added (
                        beauty_title, title, other_titles, connect, add_time,
                        user_id, coord_id,
                        winter_level, summer_level, autumn_level, spring_level,
                        status
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                    RETURNING id
                    "#,
                )
                .bind(&submission.beauty_title)
                .bind(&submission.title)
                .bind(&submission.other_titles)
                .bind(&submission.connect)
                .bind(submission.add_time)
                .bind(user_id)
                .bind(coord_id)
                .bind(&submission.level.winter)
                .bind(&submission.level.summer)
                .bind(&submission.level.autumn)
                .bind(&submission.level.spring)
                .bind(NEW_STATUS),
            )
            .await?;

        Self::generated_id(rows)
    }

    async fn insert_image(
        &self,
        pereval_id: i64,
        image: &SubmittedImage,
    ) -> Result<i64, DomainError> {
        let rows = self
            .fetch_rows(
                sqlx::query(
                    r#"
                    INSERT INTO pereval_images (pereval_id, image_data, title)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(pereval_id)
                .bind(&image.data)
                .bind(&image.title),
            )
            .await?;

        Self::generated_id(rows)
    }
}
