use crate::api::{ApiClient, ApiError, ApiRequest};
use crate::models::{Page, PlayCount, PlayHistoryEntry, PlayRecorded, Track};

use super::API_PREFIX;

/// Play history. Streaming a track while authenticated also records a play
/// server-side; `record_play` is for players that fetch audio elsewhere.
#[derive(Clone, Copy)]
pub struct History<'a> {
    client: &'a ApiClient,
}

impl<'a> History<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn record_play(self, track_id: i64) -> Result<PlayRecorded, ApiError> {
        self.client
            .send_json(ApiRequest::post(format!("{}/tracks/{}/play", API_PREFIX, track_id)))
            .await
    }

    pub async fn mine(self, page: Page) -> Result<Vec<PlayHistoryEntry>, ApiError> {
        let req = ApiRequest::get(format!("{}/users/me/history", API_PREFIX))
            .query_pairs(page.to_query());
        self.client.send_json(req).await
    }

    /// Distinct recently played tracks, most recent first.
    pub async fn recently_played(self, limit: Option<u32>) -> Result<Vec<Track>, ApiError> {
        let mut req = ApiRequest::get(format!("{}/users/me/recently-played", API_PREFIX));
        if let Some(limit) = limit {
            req = req.query("limit", limit);
        }
        self.client.send_json(req).await
    }

    pub async fn play_count(self, track_id: i64) -> Result<PlayCount, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/tracks/{}/play-count", API_PREFIX, track_id)))
            .await
    }
}
