//! Command handlers. Each one calls into the core client and prints the result.

use anyhow::{Context, Result};
use tracing::warn;
use trackdeck_core::models::{CommentCreate, Page};
use trackdeck_core::{ApiClient, ApiError, Session, SessionState};

use crate::cli::Command;
use crate::output;

pub struct Ctx {
    pub client: ApiClient,
    pub session: Session,
    pub json: bool,
    pub backend: &'static str,
}

pub async fn run(ctx: &Ctx, command: Command) -> Result<()> {
    match command {
        Command::Login { token } => login(ctx, &token).await,
        Command::Logout => {
            ctx.session.logout()?;
            Ok(())
        }
        Command::Status => {
            status(ctx);
            Ok(())
        }
        Command::Me => {
            let me = ctx.client.users().me().await?;
            emit(ctx, &me, output::print_user)
        }
        Command::Tracks { skip, limit } => {
            let tracks = ctx.client.tracks().get_all(Page { skip, limit }).await?;
            emit(ctx, &tracks, |t| output::print_tracks(t))
        }
        Command::Track { id } => {
            let (track, likes, comments) = futures::try_join!(
                ctx.client.tracks().get_by_id(id),
                ctx.client.likes().get_by_track(id),
                ctx.client.comments().get_by_track(id),
            )?;
            if ctx.json {
                return output::print_json(&serde_json::json!({
                    "track": track,
                    "likes": likes,
                    "comments": comments,
                }));
            }
            output::print_track_detail(&track, &likes, &comments);
            Ok(())
        }
        Command::Like { track_id } => {
            let result = ctx.client.likes().toggle(track_id).await?;
            emit(ctx, &result, |r| {
                println!(
                    "{} ({} likes)",
                    if r.is_liked { "Liked" } else { "Unliked" },
                    r.like_count
                )
            })
        }
        Command::Comment { track_id, text } => {
            let comment = ctx
                .client
                .comments()
                .create(&CommentCreate {
                    track_id,
                    content: text,
                })
                .await?;
            emit(ctx, &comment, |c| println!("Posted comment #{}", c.id))
        }
        Command::Follow { user_id } => {
            let result = ctx.client.follows().toggle(user_id).await?;
            emit(ctx, &result, |r| {
                println!(
                    "{} ({} followers)",
                    if r.is_following { "Following" } else { "Unfollowed" },
                    r.follower_count
                )
            })
        }
        Command::Followers { user_id, following } => {
            let list = if following {
                ctx.client.follows().following(user_id).await?
            } else {
                ctx.client.follows().followers(user_id).await?
            };
            emit(ctx, &list, output::print_users)
        }
        Command::Playlists => {
            let playlists = ctx.client.playlists().get_all().await?;
            emit(ctx, &playlists, |p| output::print_playlists(p))
        }
        Command::Playlist { id } => {
            let detail = ctx.client.playlists().get_by_id(id).await?;
            emit(ctx, &detail, output::print_playlist)
        }
        Command::StreamUrl { id } => {
            println!("{}", ctx.client.tracks().stream_url(id));
            Ok(())
        }
        Command::History { limit } => {
            let tracks = ctx.client.history().recently_played(limit).await?;
            emit(ctx, &tracks, |t| output::print_tracks(t))
        }
    }
}

fn emit<T: serde::Serialize>(ctx: &Ctx, value: &T, render: impl FnOnce(&T)) -> Result<()> {
    if ctx.json {
        output::print_json(value)
    } else {
        render(value);
        Ok(())
    }
}

/// Store the token, then confirm it with `users/me`.
///
/// A rejected token is cleared again by the client's 401 handling; a backend
/// that cannot be reached leaves the token in place.
async fn login(ctx: &Ctx, token: &str) -> Result<()> {
    ctx.session.login(token).context("Failed to store token")?;
    match ctx.client.users().me().await {
        Ok(me) => {
            println!("Logged in as {}", me.display_name());
            Ok(())
        }
        Err(ApiError::Network(e)) => {
            warn!(error = %e, "Could not verify token");
            println!("Token stored, but the backend could not be reached to verify it.");
            Ok(())
        }
        Err(e) => Err(e).context("Token was rejected"),
    }
}

fn status(ctx: &Ctx) {
    println!("Backend:     {}", ctx.client.base_url());
    println!("Credentials: {}", ctx.backend);
    match ctx.session.state() {
        SessionState::Authenticated => println!("Session:     authenticated"),
        SessionState::Anonymous => println!("Session:     anonymous"),
    }
}
