use serde_json::json;

use crate::api::{ApiClient, ApiError, ApiRequest};
use crate::models::{FollowList, FollowStatus, FollowToggle};

use super::API_PREFIX;

#[derive(Clone, Copy)]
pub struct Follows<'a> {
    client: &'a ApiClient,
}

impl<'a> Follows<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Follow the user, or unfollow if already following.
    pub async fn toggle(self, user_id: i64) -> Result<FollowToggle, ApiError> {
        let req = ApiRequest::post(format!("{}/follows", API_PREFIX))
            .json(&json!({ "followed_user_id": user_id }))?;
        self.client.send_json(req).await
    }

    pub async fn followers(self, user_id: i64) -> Result<FollowList, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/follows/{}/followers", API_PREFIX, user_id)))
            .await
    }

    pub async fn following(self, user_id: i64) -> Result<FollowList, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/follows/{}/following", API_PREFIX, user_id)))
            .await
    }

    pub async fn status(self, user_id: i64) -> Result<FollowStatus, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!(
                "{}/follows/users/{}/follow-status",
                API_PREFIX, user_id
            )))
            .await
    }
}
