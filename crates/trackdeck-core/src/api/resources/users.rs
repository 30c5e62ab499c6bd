use crate::api::{ApiClient, ApiError, ApiRequest};
use crate::models::{UserProfile, UserProfileUpdate};

use super::API_PREFIX;

#[derive(Clone, Copy)]
pub struct Users<'a> {
    client: &'a ApiClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Profile of the user owning the current credential.
    pub async fn me(self) -> Result<UserProfile, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/users/me", API_PREFIX)))
            .await
    }

    pub async fn update_profile(self, update: &UserProfileUpdate) -> Result<UserProfile, ApiError> {
        let req = ApiRequest::patch(format!("{}/users/me", API_PREFIX)).json(update)?;
        self.client.send_json(req).await
    }

    pub async fn get_by_id(self, id: i64) -> Result<UserProfile, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/users/{}", API_PREFIX, id)))
            .await
    }
}
