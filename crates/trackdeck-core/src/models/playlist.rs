use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Track, UserProfile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub owner_user_id: i64,
    #[serde(with = "super::timestamp")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    pub owner: UserProfile,
}

/// Playlist detail including its ordered tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlaylistWithTracks {
    #[serde(flatten)]
    pub playlist: Playlist,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Body for creating or replacing a playlist's metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlaylistCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

impl PlaylistCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_public: true,
        }
    }
}

/// Updates carry the full metadata, same as creation.
pub type PlaylistUpdate = PlaylistCreate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AddTrackResponse {
    pub message: String,
    pub playlist_id: i64,
    pub track_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ReorderTrackRequest {
    pub track_id: i64,
    pub new_order: i64,
}

fn default_public() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_with_tracks_flattens() {
        let json = r#"{"id":9,"name":"mix","description":null,"is_public":false,"owner_user_id":3,"created_at":"2024-02-10T08:00:00","owner":{"id":3,"user_id":"u","nickname":null,"profile_image_url":null,"bio":null,"is_active":true,"created_at":"2024-02-01T00:00:00"}}"#;
        let detail: PlaylistWithTracks = serde_json::from_str(json).unwrap();
        assert_eq!(detail.playlist.id, 9);
        assert!(!detail.playlist.is_public);
        assert!(detail.tracks.is_empty());
    }

    #[test]
    fn test_new_playlist_is_public() {
        let body = serde_json::to_value(PlaylistCreate::new("road trip")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "road trip", "description": null, "is_public": true})
        );
    }
}
