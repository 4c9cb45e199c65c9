//! Reusable card component for media items in the library grid.

use leptos::prelude::*;

use crate::net::types::{MediaItem, MediaStatus};

/// A clickable card representing one video in the library.
#[component]
pub fn MediaCard(item: MediaItem) -> impl IntoView {
    let href = format!("/media/{}", item.id);
    let status = match item.status {
        MediaStatus::Uploading => "uploading",
        MediaStatus::Processing => "processing",
        MediaStatus::Ready => "ready",
        MediaStatus::Failed => "failed",
    };
    let duration = item
        .duration_seconds
        .map(|secs| format!("{}:{:02}", secs / 60, secs % 60));

    view! {
        <a class="media-card" href=href>
            <span class="media-card__title">{item.title}</span>
            <span class=format!("media-card__status media-card__status--{status}")>{status}</span>
            {duration.map(|d| view! { <span class="media-card__duration">{d}</span> })}
        </a>
    }
}
