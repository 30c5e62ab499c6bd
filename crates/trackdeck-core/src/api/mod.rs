//! REST API client module for the music-sharing backend.
//!
//! This module provides the `ApiClient` for communicating with the backend's
//! `/api/v1` endpoints (tracks, users, likes, comments, follows, playlists,
//! play history).
//!
//! Requests carry a bearer credential taken from a `SessionStore`. A 401
//! response clears that credential and sends the application back to its
//! login route through a `Navigator`.

pub mod client;
pub mod error;
pub mod interceptor;
pub mod request;
pub mod resources;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ApiError;
pub use interceptor::{ApiResult, BearerAuth, RequestInterceptor, ResponseInterceptor, SessionExpiry};
pub use request::ApiRequest;
