//! Core library for trackdeck.
//!
//! A session-aware client for the music-sharing REST API:
//!
//! - [`api`]: the client, its interceptor chains and the resource call groups
//! - [`auth`]: credential storage, session state and the navigation port
//! - [`config`]: base URL and client settings
//! - [`models`]: typed request/response bodies

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError, ApiRequest};
pub use auth::{Navigator, Session, SessionEnd, SessionState, SessionStore};
pub use config::Config;
