//! Plain-text rendering of API results.

use anyhow::Result;
use serde::Serialize;
use trackdeck_core::models::{
    Comment, CommentList, FollowList, LikeList, Playlist, PlaylistWithTracks, Track, UserProfile,
};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn track_line(track: &Track) -> String {
    format!(
        "#{:<6} {} - {} [{}] ({})",
        track.id,
        track.artist_name,
        track.title,
        track.duration_display(),
        track.status.as_str()
    )
}

pub fn print_tracks(tracks: &[Track]) {
    if tracks.is_empty() {
        println!("No tracks.");
        return;
    }
    for track in tracks {
        println!("{}", track_line(track));
    }
}

pub fn print_track_detail(track: &Track, likes: &LikeList, comments: &CommentList) {
    println!("{}", track_line(track));
    println!("  by {}", track.owner.display_name());
    if let Some(ref description) = track.description {
        println!("  {}", description);
    }
    println!("  {} likes, {} comments", likes.total, comments.total);
    for comment in &comments.comments {
        println!("  {}", comment_line(comment));
    }
}

fn comment_line(comment: &Comment) -> String {
    format!(
        "{} ({}{}): {}",
        comment.user.display_name(),
        comment.created_at.format("%Y-%m-%d %H:%M"),
        if comment.is_edited() { ", edited" } else { "" },
        comment.content
    )
}

pub fn print_user(user: &UserProfile) {
    println!("{} (#{})", user.display_name(), user.id);
    if let Some(ref bio) = user.bio {
        println!("  {}", bio);
    }
    println!("  member since {}", user.created_at.format("%Y-%m-%d"));
}

pub fn print_users(list: &FollowList) {
    println!("{} users", list.total);
    for user in &list.users {
        println!("  {} (#{})", user.display_name(), user.id);
    }
}

pub fn print_playlists(playlists: &[Playlist]) {
    if playlists.is_empty() {
        println!("No playlists.");
        return;
    }
    for playlist in playlists {
        println!(
            "#{:<6} {}{}",
            playlist.id,
            playlist.name,
            if playlist.is_public { "" } else { " (private)" }
        );
    }
}

pub fn print_playlist(detail: &PlaylistWithTracks) {
    println!("{} by {}", detail.playlist.name, detail.playlist.owner.display_name());
    if let Some(ref description) = detail.playlist.description {
        println!("  {}", description);
    }
    print_tracks(&detail.tracks);
}
