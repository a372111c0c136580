//! Live post feed.

use chrono::{DateTime, Utc};

use crowdsphere_types::Post;

/// Returns the live feed: approved posts that have not expired, newest first.
///
/// Pass a `venue_id` to restrict the feed to a single venue.
#[must_use]
pub fn live_feed(posts: &[Post], venue_id: Option<&str>, now: DateTime<Utc>) -> Vec<Post> {
    let mut feed: Vec<Post> = posts
        .iter()
        .filter(|p| p.is_approved() && !p.is_expired(now))
        .filter(|p| venue_id.is_none_or(|id| p.venue_id == id))
        .cloned()
        .collect();
    feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    feed
}
