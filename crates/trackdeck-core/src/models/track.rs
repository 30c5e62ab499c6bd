//! Track models and the two-step upload flow.
//!
//! Uploads go through `initiate` (returns a presigned storage URL), a direct
//! PUT of the audio bytes to that URL, and `finalize` (creates the track).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Processing state of an uploaded track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum TrackStatus {
    Processing,
    Ready,
    Failed,
}

impl TrackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackStatus::Processing => "processing",
            TrackStatus::Ready => "ready",
            TrackStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub artist_name: String,
    pub file_url: String,
    /// Length in seconds, once processing has measured it.
    pub duration: Option<f64>,
    pub status: TrackStatus,
    pub trending_score: f64,
    pub owner_user_id: i64,
    #[serde(with = "super::timestamp")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    pub owner: UserProfile,
}

impl Track {
    /// Duration formatted as `m:ss`, or `--:--` when unknown.
    pub fn duration_display(&self) -> String {
        match self.duration {
            Some(secs) if secs.is_finite() && secs >= 0.0 => {
                let total = secs.round() as u64;
                format!("{}:{:02}", total / 60, total % 60)
            }
            _ => "--:--".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UploadInitiateRequest {
    pub filename: String,
    pub content_type: String,
    pub file_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UploadInitiateResponse {
    pub upload_id: String,
    pub presigned_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UploadFinalizeRequest {
    pub upload_id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
}
