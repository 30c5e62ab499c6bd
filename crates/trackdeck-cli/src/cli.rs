use clap::{Parser, Subcommand};

/// Command-line client for the trackdeck music-sharing service.
#[derive(Debug, Parser)]
#[command(name = "trackdeck", version, about)]
pub struct Cli {
    /// Backend base URL (overrides config file and default)
    #[arg(long, global = true, env = "TRACKDECK_API_URL")]
    pub api_url: Option<String>,

    /// Keep the session token in the OS keychain instead of a file
    #[arg(long, global = true)]
    pub keyring: bool,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a session token and verify it against the backend
    Login { token: String },
    /// Forget the stored session token
    Logout,
    /// Show the configured backend and session state
    Status,
    /// Show the current user's profile
    Me,
    /// List tracks
    Tracks {
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a track with its likes and comments
    Track { id: i64 },
    /// Like or unlike a track
    Like { track_id: i64 },
    /// Comment on a track
    Comment { track_id: i64, text: String },
    /// Follow or unfollow a user
    Follow { user_id: i64 },
    /// List a user's followers (or who they follow)
    Followers {
        user_id: i64,
        #[arg(long)]
        following: bool,
    },
    /// List playlists
    Playlists,
    /// Show a playlist and its tracks
    Playlist { id: i64 },
    /// Print the audio stream URL for a track
    StreamUrl { id: i64 },
    /// Show recently played tracks
    History {
        #[arg(long)]
        limit: Option<u32>,
    },
}
