use crate::api::{ApiClient, ApiError, ApiRequest};
use crate::models::{
    AddTrackResponse, MessageResponse, Page, Playlist, PlaylistCreate, PlaylistUpdate,
    PlaylistWithTracks, ReorderTrackRequest,
};

use super::API_PREFIX;

#[derive(Clone, Copy)]
pub struct Playlists<'a> {
    client: &'a ApiClient,
}

impl<'a> Playlists<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(self) -> Result<Vec<Playlist>, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/playlists", API_PREFIX)))
            .await
    }

    pub async fn get_by_id(self, id: i64) -> Result<PlaylistWithTracks, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/playlists/{}", API_PREFIX, id)))
            .await
    }

    pub async fn create(self, playlist: &PlaylistCreate) -> Result<PlaylistWithTracks, ApiError> {
        let req = ApiRequest::post(format!("{}/playlists", API_PREFIX)).json(playlist)?;
        self.client.send_json(req).await
    }

    pub async fn update(self, id: i64, playlist: &PlaylistUpdate) -> Result<Playlist, ApiError> {
        let req = ApiRequest::patch(format!("{}/playlists/{}", API_PREFIX, id)).json(playlist)?;
        self.client.send_json(req).await
    }

    pub async fn delete(self, id: i64) -> Result<MessageResponse, ApiError> {
        self.client
            .send_json(ApiRequest::delete(format!("{}/playlists/{}", API_PREFIX, id)))
            .await
    }

    pub async fn add_track(self, id: i64, track_id: i64) -> Result<AddTrackResponse, ApiError> {
        self.client
            .send_json(ApiRequest::post(format!(
                "{}/playlists/{}/tracks/{}",
                API_PREFIX, id, track_id
            )))
            .await
    }

    pub async fn remove_track(self, id: i64, track_id: i64) -> Result<MessageResponse, ApiError> {
        self.client
            .send_json(ApiRequest::delete(format!(
                "{}/playlists/{}/tracks/{}",
                API_PREFIX, id, track_id
            )))
            .await
    }

    /// Playlists owned by a user; private ones only show up for their owner.
    pub async fn by_user(self, user_id: i64, page: Page) -> Result<Vec<Playlist>, ApiError> {
        let req = ApiRequest::get(format!("{}/playlists/users/{}/playlists", API_PREFIX, user_id))
            .query_pairs(page.to_query());
        self.client.send_json(req).await
    }

    /// Move a track to a new position within the playlist.
    pub async fn reorder_track(self, id: i64, reorder: &ReorderTrackRequest) -> Result<(), ApiError> {
        let req = ApiRequest::patch(format!("{}/playlists/{}/tracks/reorder", API_PREFIX, id))
            .json(reorder)?;
        self.client.send_empty(req).await
    }
}
