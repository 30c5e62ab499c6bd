//! Session management for the API client.
//!
//! This module provides:
//! - `SessionStore`: where the bearer credential lives (memory, file, OS keychain)
//! - `Navigator`: the port the client uses to force a return to the login route
//! - `Session`: login/logout facade over a store
//!
//! A stored credential is the only signal of an authenticated session.

pub mod navigator;
pub mod session;
pub mod store;

pub use navigator::{Navigator, SessionEnd, TracingNavigator};
pub use session::{Session, SessionState};
pub use store::{FileSessionStore, KeyringSessionStore, MemorySessionStore, SessionStore, TOKEN_KEY};
