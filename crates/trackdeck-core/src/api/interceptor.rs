//! Request/response interception.
//!
//! Interceptors are composed into two ordered chains when the client is built.
//! Every request passes through the whole request chain before it is sent, and
//! every outcome passes through the whole response chain before the caller
//! sees it.

use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use reqwest::{Request, Response};
use tracing::warn;

use super::ApiError;
use crate::auth::{Navigator, SessionEnd, SessionStore};

pub type ApiResult = Result<Response, ApiError>;

/// Runs on every outgoing request before transmission.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &mut Request);
}

/// Runs on every outcome before it is handed back to the caller.
///
/// Implementations may observe or replace the outcome. The built-in ones
/// return it unchanged.
pub trait ResponseInterceptor: Send + Sync {
    fn intercept(&self, outcome: ApiResult) -> ApiResult;
}

/// Attaches `Authorization: Bearer <token>` when the store holds a credential.
pub struct BearerAuth {
    store: Arc<dyn SessionStore>,
}

impl BearerAuth {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    fn header_value(&self) -> Option<HeaderValue> {
        let token = match self.store.get() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Session store unreadable, sending request without credential");
                return None;
            }
        };
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                Some(value)
            }
            Err(_) => {
                warn!("Stored credential is not a valid header value, sending request without it");
                None
            }
        }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, request: &mut Request) {
        if let Some(value) = self.header_value() {
            request.headers_mut().insert(header::AUTHORIZATION, value);
        }
    }
}

/// Clears the credential and forces navigation to the login route on 401.
///
/// The outcome is always passed through untouched, so callers still observe
/// the 401 after the redirect has been triggered.
pub struct SessionExpiry {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl SessionExpiry {
    pub fn new(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            login_route: login_route.into(),
        }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn intercept(&self, outcome: ApiResult) -> ApiResult {
        if let Err(ref e) = outcome {
            if e.is_unauthorized() {
                warn!("Received 401, clearing stored credential");
                if let Err(clear_err) = self.store.clear() {
                    warn!(error = %clear_err, "Failed to clear stored credential");
                }
                self.navigator
                    .navigate(&self.login_route, SessionEnd::Expired);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use reqwest::{Method, StatusCode, Url};

    use super::*;
    use crate::auth::MemorySessionStore;

    #[derive(Default)]
    struct RecordingNavigator {
        events: Mutex<Vec<(String, SessionEnd)>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &str, reason: SessionEnd) {
            self.events.lock().unwrap().push((route.to_string(), reason));
        }
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self) -> anyhow::Result<Option<String>> {
            Err(anyhow::anyhow!("disk on fire"))
        }
        fn set(&self, _token: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("disk on fire"))
        }
        fn clear(&self) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("disk on fire"))
        }
    }

    fn request() -> Request {
        Request::new(
            Method::GET,
            Url::parse("http://localhost:8000/api/v1/tracks/42").unwrap(),
        )
    }

    #[test]
    fn test_bearer_attached_when_present() {
        let auth = BearerAuth::new(Arc::new(MemorySessionStore::with_token("tok123")));
        let mut req = request();
        auth.intercept(&mut req);
        let value = req.headers().get(header::AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_no_header_when_absent() {
        let auth = BearerAuth::new(Arc::new(MemorySessionStore::new()));
        let mut req = request();
        auth.intercept(&mut req);
        assert!(req.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_unreadable_store_sends_unmodified() {
        let auth = BearerAuth::new(Arc::new(BrokenStore));
        let mut req = request();
        auth.intercept(&mut req);
        assert!(req.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_invalid_token_is_skipped() {
        let auth = BearerAuth::new(Arc::new(MemorySessionStore::with_token("bad\ntoken")));
        let mut req = request();
        auth.intercept(&mut req);
        assert!(req.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_401_clears_and_navigates_then_propagates() {
        let store = Arc::new(MemorySessionStore::with_token("tok123"));
        let navigator = Arc::new(RecordingNavigator::default());
        let expiry = SessionExpiry::new(store.clone(), navigator.clone(), "/login");

        let outcome = expiry.intercept(Err(ApiError::Unauthorized));
        assert!(matches!(outcome, Err(ApiError::Unauthorized)));
        assert_eq!(store.get().unwrap(), None);

        // Second 401 with nothing stored: still a no-op clear, still navigates
        let outcome = expiry.intercept(Err(ApiError::Unauthorized));
        assert!(matches!(outcome, Err(ApiError::Unauthorized)));
        assert_eq!(store.get().unwrap(), None);

        let events = navigator.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|(route, reason)| route == "/login" && *reason == SessionEnd::Expired));
    }

    #[test]
    fn test_other_errors_have_no_side_effects() {
        let store = Arc::new(MemorySessionStore::with_token("tok123"));
        let navigator = Arc::new(RecordingNavigator::default());
        let expiry = SessionExpiry::new(store.clone(), navigator.clone(), "/login");

        for err in [
            ApiError::AccessDenied("no".into()),
            ApiError::NotFound("gone".into()),
            ApiError::ServerError {
                status: StatusCode::BAD_GATEWAY,
                message: "boom".into(),
            },
            ApiError::InvalidResponse("bad json".into()),
        ] {
            let _ = expiry.intercept(Err(err));
        }
        assert_eq!(store.get().unwrap().as_deref(), Some("tok123"));
        assert!(navigator.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failing_clear_still_navigates() {
        let navigator = Arc::new(RecordingNavigator::default());
        let expiry = SessionExpiry::new(Arc::new(BrokenStore), navigator.clone(), "/login");
        let outcome = expiry.intercept(Err(ApiError::Unauthorized));
        assert!(outcome.is_err());
        assert_eq!(navigator.events.lock().unwrap().len(), 1);
    }
}
