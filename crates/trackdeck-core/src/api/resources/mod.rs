//! Resource call groups.
//!
//! Each group borrows the [`ApiClient`](super::ApiClient) and maps one function
//! to one backend endpoint. They only build descriptors; credential handling
//! and session expiry live in the client's interceptor chains.

mod comments;
mod follows;
mod history;
mod likes;
mod playlists;
mod tracks;
mod users;

pub use comments::Comments;
pub use follows::Follows;
pub use history::History;
pub use likes::Likes;
pub use playlists::Playlists;
pub use tracks::Tracks;
pub use users::Users;

/// Common prefix of every backend endpoint.
pub(crate) const API_PREFIX: &str = "/api/v1";
