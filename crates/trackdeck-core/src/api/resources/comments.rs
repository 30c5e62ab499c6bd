use crate::api::{ApiClient, ApiError, ApiRequest};
use crate::models::{Comment, CommentCreate, CommentList, CommentUpdate, MessageResponse};

use super::API_PREFIX;

#[derive(Clone, Copy)]
pub struct Comments<'a> {
    client: &'a ApiClient,
}

impl<'a> Comments<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(self, comment: &CommentCreate) -> Result<Comment, ApiError> {
        let req = ApiRequest::post(format!("{}/comments", API_PREFIX)).json(comment)?;
        self.client.send_json(req).await
    }

    pub async fn get_by_track(self, track_id: i64) -> Result<CommentList, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/comments/track/{}", API_PREFIX, track_id)))
            .await
    }

    pub async fn get(self, id: i64) -> Result<Comment, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/comments/{}", API_PREFIX, id)))
            .await
    }

    pub async fn update(self, id: i64, update: &CommentUpdate) -> Result<Comment, ApiError> {
        let req = ApiRequest::patch(format!("{}/comments/{}", API_PREFIX, id)).json(update)?;
        self.client.send_json(req).await
    }

    pub async fn delete(self, id: i64) -> Result<MessageResponse, ApiError> {
        self.client
            .send_json(ApiRequest::delete(format!("{}/comments/{}", API_PREFIX, id)))
            .await
    }
}
