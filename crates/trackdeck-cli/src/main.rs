//! trackdeck - a command-line client for the music-sharing service.
//!
//! Browses tracks, playlists and comments, and manages the session token
//! used by every authenticated call.

mod cli;
mod commands;
mod output;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trackdeck_core::auth::{FileSessionStore, KeyringSessionStore, Navigator, SessionEnd};
use trackdeck_core::config::CredentialBackend;
use trackdeck_core::{ApiClient, Config, Session, SessionStore};

use cli::Cli;
use commands::Ctx;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// A terminal has no login page; report the session change instead.
struct CliNavigator;

/// Also shown right after `login` when the backend refuses the new token, so
/// it must not claim an earlier session expired.
fn session_end_notice(reason: SessionEnd) -> &'static str {
    match reason {
        SessionEnd::Expired => "The backend rejected the session token; it has been removed.",
        SessionEnd::LoggedOut => "Logged out.",
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, route: &str, reason: SessionEnd) {
        debug!(route = route, reason = ?reason, "Session ended");
        match reason {
            SessionEnd::Expired => eprintln!("{}", session_end_notice(reason)),
            SessionEnd::LoggedOut => println!("{}", session_end_notice(reason)),
        }
    }
}

fn open_store(config: &Config, use_keyring: bool) -> Result<(Arc<dyn SessionStore>, &'static str)> {
    if use_keyring || config.credential_backend() == CredentialBackend::Keyring {
        return Ok((Arc::new(KeyringSessionStore::new()), "keyring"));
    }
    let store = FileSessionStore::new(config.session_dir()?);
    debug!(path = %store.path().display(), "Using file session store");
    Ok((Arc::new(store), "file"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    init_tracing();

    let config = Config::load()?;
    let (store, backend) = open_store(&config, args.keyring)?;
    let navigator: Arc<dyn Navigator> = Arc::new(CliNavigator);
    // clap has already merged --api-url with TRACKDECK_API_URL
    let client = ApiClient::from_config(&config, args.api_url.clone(), store.clone(), navigator.clone())?;
    let session = Session::new(store, navigator, config.login_route());

    info!(base_url = %client.base_url(), "trackdeck starting");

    let ctx = Ctx {
        client,
        session,
        json: args.json,
        backend,
    };
    commands::run(&ctx, args.command).await
}
