//! Data models for the music-sharing API.
//!
//! These mirror the backend's JSON schemas:
//!
//! - `UserProfile`, `UserProfileUpdate`: account profiles
//! - `Track`, upload request/response types
//! - Social types: likes, comments, follows
//! - `Playlist`, `PlaylistWithTracks` and membership types
//! - Play history types
//!
//! With the `ts` feature enabled every model also derives `ts_rs::TS`.

pub mod history;
pub mod playlist;
pub mod social;
pub mod timestamp;
pub mod track;
pub mod user;

use serde::{Deserialize, Serialize};

pub use history::{PlayCount, PlayHistoryEntry, PlayRecorded};
pub use playlist::{
    AddTrackResponse, Playlist, PlaylistCreate, PlaylistUpdate, PlaylistWithTracks,
    ReorderTrackRequest,
};
pub use social::{
    Comment, CommentCreate, CommentList, CommentUpdate, FollowList, FollowStatus, FollowToggle,
    Like, LikeList, LikeToggle,
};
pub use track::{
    Track, TrackStatus, UploadFinalizeRequest, UploadInitiateRequest, UploadInitiateResponse,
};
pub use user::{UserProfile, UserProfileUpdate};

/// Bare `{"message": "..."}` acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct MessageResponse {
    pub message: String,
}

/// `skip`/`limit` pagination accepted by every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    pub fn limit(limit: u32) -> Self {
        Self {
            skip: None,
            limit: Some(limit),
        }
    }

    /// Query pairs for the fields that are set.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}
