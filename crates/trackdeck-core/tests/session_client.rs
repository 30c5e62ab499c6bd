use std::sync::{Arc, Mutex};

use httpmock::prelude::*;
use serde_json::json;
use trackdeck_core::api::{ApiClient, ApiError, ApiRequest};
use trackdeck_core::auth::{MemorySessionStore, Navigator, SessionEnd, SessionStore};

#[derive(Default)]
struct RecordingNavigator {
    events: Mutex<Vec<(String, SessionEnd)>>,
}

impl RecordingNavigator {
    fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str, reason: SessionEnd) {
        self.events.lock().unwrap().push((route.to_string(), reason));
    }
}

struct Harness {
    client: ApiClient,
    store: Arc<MemorySessionStore>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(base_url: &str, token: Option<&str>) -> Harness {
    let store = Arc::new(match token {
        Some(t) => MemorySessionStore::with_token(t),
        None => MemorySessionStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::builder(base_url.parse().unwrap(), store.clone())
        .navigator(navigator.clone())
        .build()
        .unwrap();
    Harness {
        client,
        store,
        navigator,
    }
}

fn track_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Night Drive",
        "description": null,
        "cover_image_url": null,
        "artist_name": "dj k",
        "file_url": "/uploads/tracks/abc.mp3",
        "duration": 185.0,
        "status": "ready",
        "trending_score": 1.5,
        "owner_user_id": 3,
        "created_at": "2024-02-10T08:00:00",
        "owner": {
            "id": 3, "user_id": "auth0|abc", "nickname": "k", "profile_image_url": null,
            "bio": null, "is_active": true, "created_at": "2024-02-01T00:00:00"
        }
    })
}

#[tokio::test]
async fn attaches_bearer_token_to_get_by_id() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/tracks/42")
            .header("authorization", "Bearer tok123");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(track_json(42));
    });

    let h = harness(&server.base_url(), Some("tok123"));
    let track = h.client.tracks().get_by_id(42).await.expect("track fetch should succeed");

    mock.assert();
    assert_eq!(track.id, 42);
    assert_eq!(h.navigator.count(), 0);
}

#[tokio::test]
async fn sends_no_authorization_header_when_anonymous() {
    let server = MockServer::start_async().await;
    let with_auth = server.mock(|when, then| {
        when.method(GET).path("/api/v1/tracks").header_exists("authorization");
        then.status(500);
    });
    let any = server.mock(|when, then| {
        when.method(GET).path("/api/v1/tracks");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let h = harness(&server.base_url(), None);
    let tracks = h
        .client
        .tracks()
        .get_all(Default::default())
        .await
        .expect("anonymous listing should succeed");

    assert!(tracks.is_empty());
    with_auth.assert_hits(0);
    any.assert_hits(1);
}

#[tokio::test]
async fn unauthorized_without_credential_redirects_and_rejects() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/me");
        then.status(401)
            .header("content-type", "application/json")
            .json_body(json!({"error": {"code": "UNAUTHORIZED", "message": "bad token", "details": {}}}));
    });

    let h = harness(&server.base_url(), None);
    let err = h.client.users().me().await.expect_err("401 should reject");

    mock.assert();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(h.store.get().unwrap(), None);
    let events = h.navigator.events.lock().unwrap();
    assert_eq!(events.as_slice(), &[("/login".to_string(), SessionEnd::Expired)]);
}

#[tokio::test]
async fn unauthorized_clears_stored_credential() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/me");
        then.status(401);
    });

    let h = harness(&server.base_url(), Some("stale"));
    let err = h.client.users().me().await.expect_err("401 should reject");

    assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
    assert_eq!(h.store.get().unwrap(), None);
    assert_eq!(h.navigator.count(), 1);
}

#[tokio::test]
async fn repeated_unauthorized_is_idempotent_but_navigates_each_time() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/me");
        then.status(401);
    });

    let h = harness(&server.base_url(), Some("stale"));
    let _ = h.client.users().me().await;
    let _ = h.client.users().me().await;

    mock.assert_hits(2);
    assert_eq!(h.store.get().unwrap(), None);
    assert_eq!(h.navigator.count(), 2);
}

#[tokio::test]
async fn other_http_errors_leave_session_alone() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/tracks/1");
        then.status(404)
            .header("content-type", "application/json")
            .json_body(json!({"detail": "track not found"}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/comments/5");
        then.status(403);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/tracks/2");
        then.status(503).body("maintenance");
    });

    let h = harness(&server.base_url(), Some("tok123"));

    let err = h.client.tracks().get_by_id(1).await.expect_err("404 expected");
    assert!(matches!(err, ApiError::NotFound(ref m) if m == "track not found"));

    let err = h.client.comments().delete(5).await.expect_err("403 expected");
    assert!(matches!(err, ApiError::AccessDenied(_)));

    let err = h.client.tracks().get_by_id(2).await.expect_err("503 expected");
    assert!(matches!(err, ApiError::ServerError { ref message, .. } if message == "maintenance"));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));

    assert_eq!(h.store.get().unwrap().as_deref(), Some("tok123"));
    assert_eq!(h.navigator.count(), 0);
}

#[tokio::test]
async fn network_failure_propagates_without_side_effects() {
    // Grab a free port and release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let h = harness(&format!("http://127.0.0.1:{}", port), Some("tok123"));
    let err = h.client.users().me().await.expect_err("connection should fail");

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
    assert_eq!(h.store.get().unwrap().as_deref(), Some("tok123"));
    assert_eq!(h.navigator.count(), 0);
}

#[tokio::test]
async fn unauthorized_on_one_clone_clears_for_all() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/me");
        then.status(401);
    });
    let anonymous = server.mock(|when, then| {
        when.method(GET).path("/api/v1/playlists");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let h = harness(&server.base_url(), Some("tok123"));
    let other = h.client.clone();

    let _ = h.client.users().me().await;
    other
        .playlists()
        .get_all()
        .await
        .expect("listing should succeed anonymously");

    anonymous.assert();
    assert_eq!(h.store.get().unwrap(), None);
}

#[tokio::test]
async fn custom_login_route_is_used() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/me");
        then.status(401);
    });

    let store = Arc::new(MemorySessionStore::with_token("tok"));
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::builder(server.base_url().parse().unwrap(), store)
        .navigator(navigator.clone())
        .login_route("/auth/signin")
        .build()
        .unwrap();

    let _ = client.users().me().await;
    let events = navigator.events.lock().unwrap();
    assert_eq!(events[0].0, "/auth/signin");
}

#[tokio::test]
async fn raw_request_passes_through_both_chains() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/tracks")
            .query_param("skip", "10")
            .query_param("limit", "5")
            .header("authorization", "Bearer tok123");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([track_json(1)]));
    });

    let h = harness(&server.base_url(), Some("tok123"));
    let response = h
        .client
        .request(ApiRequest::get("/api/v1/tracks").query("skip", 10).query("limit", 5))
        .await
        .expect("request should succeed");

    assert_eq!(response.status().as_u16(), 200);
    mock.assert();
}

#[tokio::test]
async fn undecodable_success_body_is_invalid_response() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/me");
        then.status(200).body("<html>proxy page</html>");
    });

    let h = harness(&server.base_url(), Some("tok123"));
    let err = h.client.users().me().await.expect_err("decode should fail");

    assert!(matches!(err, ApiError::InvalidResponse(_)));
    assert_eq!(h.store.get().unwrap().as_deref(), Some("tok123"));
    assert_eq!(h.navigator.count(), 0);
}
