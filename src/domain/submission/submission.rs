//! Mountain pass submission types.
//!
//! Plain data carriers: shape validation happens at the HTTP boundary
//! during deserialization, and nothing downstream re-checks field formats.

use chrono::NaiveDateTime;

/// Status assigned to every newly created pass submission.
pub const NEW_STATUS: &str = "new";

/// The person reporting the pass.
///
/// Identity is the database-generated id; a user row is inserted for every
/// submission with no deduplication by email or phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedBy {
    pub email: String,
    /// Family name.
    pub fam: Option<String>,
    /// Given name.
    pub name: Option<String>,
    /// Patronymic.
    pub otc: Option<String>,
    pub phone: String,
}

/// Geographic location of the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Coords {
    pub latitude: f64,
    pub longitude: f64,
    /// Height above sea level in meters.
    pub height: i32,
}

/// Difficulty level per season, as free-form category strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonLevels {
    pub winter: String,
    pub summer: String,
    pub autumn: String,
    pub spring: String,
}

/// An image attached to the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedImage {
    /// Encoded image payload, stored verbatim.
    pub data: String,
    pub title: String,
}

/// A complete pass submission as accepted by the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PerevalSubmission {
    /// Display prefix, e.g. "Пер. ".
    pub beauty_title: String,
    pub title: String,
    pub other_titles: String,
    /// What the pass connects.
    pub connect: String,
    /// Submission timestamp, naive as submitted (no timezone on the wire).
    pub add_time: NaiveDateTime,
    pub user: SubmittedBy,
    pub coords: Coords,
    pub level: SeasonLevels,
    pub images: Vec<SubmittedImage>,
}
