//! Session-aware API client for the music-sharing backend.
//!
//! Every backend call goes through [`ApiClient::request`], which runs the
//! request interceptor chain (credential attachment), sends the request, maps
//! non-2xx responses to [`ApiError`], and runs the response interceptor chain
//! (401 session invalidation) before returning to the caller.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::interceptor::{BearerAuth, RequestInterceptor, ResponseInterceptor, SessionExpiry};
use super::resources::{Comments, Follows, History, Likes, Playlists, Tracks, Users};
use super::{ApiError, ApiRequest};
use crate::auth::{Navigator, SessionStore, TracingNavigator};
use crate::config::{Config, API_URL_ENV, DEFAULT_LOGIN_ROUTE};

// ============================================================================
// Constants
// ============================================================================

const USER_AGENT: &str = concat!("trackdeck/", env!("CARGO_PKG_VERSION"));

/// Path of the audio stream endpoint, relative to the base URL.
const STREAM_PATH: &str = "/api/v1/tracks";

/// API client for the music-sharing backend.
/// Clone is cheap - the connection pool, store and interceptor chains are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    request_chain: Arc<Vec<Arc<dyn RequestInterceptor>>>,
    response_chain: Arc<Vec<Arc<dyn ResponseInterceptor>>>,
}

/// Builder composing the interceptor chains.
///
/// `BearerAuth` always heads the request chain and `SessionExpiry` always
/// heads the response chain; interceptors added here run after them.
pub struct ApiClientBuilder {
    base_url: Url,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
    timeout: Option<Duration>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Transport-level timeout. Unset means the transport default.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        let mut http = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build()?;

        let mut request_chain: Vec<Arc<dyn RequestInterceptor>> =
            vec![Arc::new(BearerAuth::new(self.store.clone()))];
        request_chain.extend(self.request_interceptors);

        let mut response_chain: Vec<Arc<dyn ResponseInterceptor>> = vec![Arc::new(
            SessionExpiry::new(self.store, self.navigator, self.login_route),
        )];
        response_chain.extend(self.response_interceptors);

        Ok(ApiClient {
            http,
            base_url: self.base_url,
            request_chain: Arc::new(request_chain),
            response_chain: Arc::new(response_chain),
        })
    }
}

impl ApiClient {
    pub fn builder(base_url: Url, store: Arc<dyn SessionStore>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url,
            store,
            navigator: Arc::new(TracingNavigator),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            timeout: None,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Create a client from configuration.
    ///
    /// `api_url` overrides the configured base URL. When it is `None` the
    /// `TRACKDECK_API_URL` environment variable is consulted instead.
    pub fn from_config(
        config: &Config,
        api_url: Option<String>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> anyhow::Result<Self> {
        let base_url = config.resolve_api_url(api_url.or_else(|| std::env::var(API_URL_ENV).ok()))?;
        debug!(base_url = %base_url, "Resolved API base URL");
        Self::builder(base_url, store)
            .navigator(navigator)
            .login_route(config.login_route())
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidRequest(format!("{}: {}", raw, e)))
    }

    /// Direct URL of a track's audio stream, suitable for a media element.
    ///
    /// Not a client call: the player fetches it on its own.
    pub fn stream_url(&self, track_id: i64) -> String {
        format!(
            "{}{}/{}/stream",
            self.base_url.as_str().trim_end_matches('/'),
            STREAM_PATH,
            track_id
        )
    }

    // ===== Core request path =====

    /// Send a request through both interceptor chains.
    pub async fn request(&self, descriptor: ApiRequest) -> Result<Response, ApiError> {
        let url = self.endpoint(descriptor.path())?;

        let mut builder = self.http.request(descriptor.method().clone(), url);
        if !descriptor.query_params().is_empty() {
            builder = builder.query(descriptor.query_params());
        }
        if let Some(body) = descriptor.body() {
            builder = builder.json(body);
        }
        let mut request = builder.build()?;

        for interceptor in self.request_chain.iter() {
            interceptor.intercept(&mut request);
        }

        debug!(
            method = %request.method(),
            path = descriptor.path(),
            authenticated = request.headers().contains_key(header::AUTHORIZATION),
            "Sending request"
        );

        let outcome = self.execute(request).await;

        self.response_chain
            .iter()
            .fold(outcome, |outcome, interceptor| interceptor.intercept(outcome))
    }

    async fn execute(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        let response = self.http.execute(request).await?;
        Self::check_response(response).await
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Request failed");
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Send a request and decode the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(&self, descriptor: ApiRequest) -> Result<T, ApiError> {
        let path = descriptor.path().to_string();
        let response = self.request(descriptor).await?;
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e)))
    }

    /// Send a request and discard the response body.
    pub async fn send_empty(&self, descriptor: ApiRequest) -> Result<(), ApiError> {
        self.request(descriptor).await.map(|_| ())
    }

    /// PUT raw bytes to a presigned storage URL.
    ///
    /// Presigned targets live on the storage host, not the backend, so the
    /// interceptor chains (and with them the credential) are not applied.
    pub(crate) async fn put_presigned(
        &self,
        presigned_url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        let url = Url::parse(presigned_url)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid presigned URL: {}", e)))?;
        debug!(host = url.host_str().unwrap_or_default(), size = bytes.len(), "Uploading to presigned URL");
        let response = self
            .http
            .put(url)
            .header(header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        Self::check_response(response).await.map(|_| ())
    }

    // ===== Resource call groups =====

    pub fn tracks(&self) -> Tracks<'_> {
        Tracks::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn likes(&self) -> Likes<'_> {
        Likes::new(self)
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    pub fn follows(&self) -> Follows<'_> {
        Follows::new(self)
    }

    pub fn playlists(&self) -> Playlists<'_> {
        Playlists::new(self)
    }

    pub fn history(&self) -> History<'_> {
        History::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemorySessionStore;

    fn client(base: &str) -> ApiClient {
        ApiClient::builder(Url::parse(base).unwrap(), Arc::new(MemorySessionStore::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.endpoint("/api/v1/tracks/42").unwrap().as_str(),
            "http://localhost:8000/api/v1/tracks/42"
        );

        let prefixed = client("https://example.com/music/");
        assert_eq!(
            prefixed.endpoint("/api/v1/users/me").unwrap().as_str(),
            "https://example.com/music/api/v1/users/me"
        );
    }

    #[test]
    fn test_stream_url_is_built_directly() {
        let c = client("http://localhost:8000/");
        assert_eq!(c.stream_url(42), "http://localhost:8000/api/v1/tracks/42/stream");
    }

    #[test]
    fn test_from_config_applies_settings() {
        let config = Config {
            api_url: Some("http://music.internal:9000".into()),
            login_route: Some("/signin".into()),
            ..Default::default()
        };
        let c = ApiClient::from_config(
            &config,
            Some("https://override.example".into()),
            Arc::new(MemorySessionStore::new()),
            Arc::new(TracingNavigator),
        )
        .unwrap();
        assert_eq!(c.base_url().host_str(), Some("override.example"));

        // The environment may override the file; only assert when it is unset
        if std::env::var(API_URL_ENV).is_err() {
            let c = ApiClient::from_config(
                &config,
                None,
                Arc::new(MemorySessionStore::new()),
                Arc::new(TracingNavigator),
            )
            .unwrap();
            assert_eq!(c.base_url().host_str(), Some("music.internal"));
        }
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let result = ApiClient::from_config(
            &Config::default(),
            Some("ftp://files.example".into()),
            Arc::new(MemorySessionStore::new()),
            Arc::new(TracingNavigator),
        );
        assert!(result.is_err());
    }
}
