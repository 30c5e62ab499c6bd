use crate::api::{ApiClient, ApiError, ApiRequest};
use crate::models::{Page, Track, UploadFinalizeRequest, UploadInitiateRequest, UploadInitiateResponse};

use super::API_PREFIX;

#[derive(Clone, Copy)]
pub struct Tracks<'a> {
    client: &'a ApiClient,
}

impl<'a> Tracks<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List tracks, newest first.
    pub async fn get_all(self, page: Page) -> Result<Vec<Track>, ApiError> {
        let req = ApiRequest::get(format!("{}/tracks", API_PREFIX)).query_pairs(page.to_query());
        self.client.send_json(req).await
    }

    pub async fn get_by_id(self, id: i64) -> Result<Track, ApiError> {
        self.client
            .send_json(ApiRequest::get(format!("{}/tracks/{}", API_PREFIX, id)))
            .await
    }

    /// Begin an upload; the response names the storage target for the bytes.
    pub async fn initiate_upload(
        self,
        req: &UploadInitiateRequest,
    ) -> Result<UploadInitiateResponse, ApiError> {
        let req = ApiRequest::post(format!("{}/tracks/upload/initiate", API_PREFIX)).json(req)?;
        self.client.send_json(req).await
    }

    /// PUT the audio bytes to the target returned by [`Tracks::initiate_upload`].
    pub async fn upload_to_target(
        self,
        target: &UploadInitiateResponse,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        self.client
            .put_presigned(&target.presigned_url, bytes, content_type)
            .await
    }

    /// Commit the uploaded track's metadata.
    pub async fn finalize_upload(self, req: &UploadFinalizeRequest) -> Result<Track, ApiError> {
        let req = ApiRequest::post(format!("{}/tracks/upload/finalize", API_PREFIX)).json(req)?;
        self.client.send_json(req).await
    }

    pub fn stream_url(self, id: i64) -> String {
        self.client.stream_url(id)
    }
}
