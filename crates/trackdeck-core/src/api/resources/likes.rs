use serde_json::json;

use crate::api::{ApiClient, ApiError, ApiRequest};
use crate::models::{LikeList, LikeToggle, Page, Track};

use super::API_PREFIX;

#[derive(Clone, Copy)]
pub struct Likes<'a> {
    client: &'a ApiClient,
}

impl<'a> Likes<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Like the track, or remove the like if it already exists.
    pub async fn toggle(self, track_id: i64) -> Result<LikeToggle, ApiError> {
        let req = ApiRequest::post(format!("{}/likes", API_PREFIX))
            .json(&json!({ "track_id": track_id }))?;
        self.client.send_json(req).await
    }

    pub async fn get_by_track(self, track_id: i64) -> Result<LikeList, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/likes/track/{}", API_PREFIX, track_id)))
            .await
    }

    /// Tracks liked by the current user.
    pub async fn mine(self, page: Page) -> Result<Vec<Track>, ApiError> {
        let req =
            ApiRequest::get(format!("{}/users/me/likes", API_PREFIX)).query_pairs(page.to_query());
        self.client.send_json(req).await
    }
}
