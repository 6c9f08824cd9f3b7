//! HTTP DTOs for the submission endpoint.
//!
//! These types decouple the HTTP API from domain types. Required-versus-
//! optional field enforcement lives entirely in deserialization: a body
//! missing a required field never reaches the handler.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::submission::{
    Coords, PerevalSubmission, SeasonLevels, SubmittedBy, SubmittedImage,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The reporting user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub email: String,
    #[serde(default)]
    pub fam: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub otc: Option<String>,
    pub phone: String,
}

/// Pass coordinates, all fields required.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordsDto {
    pub latitude: f64,
    pub longitude: f64,
    pub height: i32,
}

/// Seasonal difficulty levels with the fixed placeholder defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDto {
    #[serde(default)]
    pub winter: String,
    #[serde(default = "default_season_level")]
    pub summer: String,
    #[serde(default = "default_season_level")]
    pub autumn: String,
    #[serde(default)]
    pub spring: String,
}

/// One attached image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDto {
    pub data: String,
    pub title: String,
}

/// Request body for `POST /api/v1/submitData`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitDataRequest {
    #[serde(default)]
    pub beauty_title: String,
    pub title: String,
    #[serde(default)]
    pub other_titles: String,
    #[serde(default)]
    pub connect: String,
    #[serde(default = "default_add_time")]
    pub add_time: NaiveDateTime,
    pub user: UserDto,
    pub coords: CoordsDto,
    pub level: LevelDto,
    pub images: Vec<ImageDto>,
}

fn default_season_level() -> String {
    "1А".to_string()
}

fn default_add_time() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

impl From<UserDto> for SubmittedBy {
    fn from(dto: UserDto) -> Self {
        Self {
            email: dto.email,
            fam: dto.fam,
            name: dto.name,
            otc: dto.otc,
            phone: dto.phone,
        }
    }
}

impl From<CoordsDto> for Coords {
    fn from(dto: CoordsDto) -> Self {
        Self {
            latitude: dto.latitude,
            longitude: dto.longitude,
            height: dto.height,
        }
    }
}

impl From<LevelDto> for SeasonLevels {
    fn from(dto: LevelDto) -> Self {
        Self {
            winter: dto.winter,
            summer: dto.summer,
            autumn: dto.autumn,
            spring: dto.spring,
        }
    }
}

impl From<ImageDto> for SubmittedImage {
    fn from(dto: ImageDto) -> Self {
        Self {
            data: dto.data,
            title: dto.title,
        }
    }
}

impl From<SubmitDataRequest> for PerevalSubmission {
    fn from(req: SubmitDataRequest) -> Self {
        Self {
            beauty_title: req.beauty_title,
            title: req.title,
            other_titles: req.other_titles,
            connect: req.connect,
            add_time: req.add_time,
            user: req.user.into(),
            coords: req.coords.into(),
            level: req.level.into(),
            images: req.images.into_iter().map(Into::into).collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The uniform `{status, message, id}` envelope returned for both success
/// and failure.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitDataResponse {
    pub status: u16,
    pub message: String,
    pub id: Option<i64>,
}

impl SubmitDataResponse {
    /// Success envelope carrying the new pass submission id.
    pub fn created(id: i64) -> Self {
        Self {
            status: 201,
            message: "Data saved successfully.".to_string(),
            id: Some(id),
        }
    }

    /// Failure envelope carrying the error message and a null id.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            id: None,
        }
    }
}
