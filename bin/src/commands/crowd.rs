//! Crowd command implementation.
//!
//! Computes a crowd estimate from a JSON posts file, optionally restricted
//! to a single venue, with an overridable reference instant.

use anyhow::Result;
use crowdsphere_lib::prelude::*;
use crowdsphere_lib::badge_style;
use std::path::Path;

use crate::display::{load_posts, parse_now, render_crowd};

/// Compute and print a crowd estimate for a posts file.
pub(crate) fn estimate(
    posts_path: &Path,
    venue_id: Option<&str>,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = parse_now(now)?;
    let mut posts = load_posts(Some(posts_path), now)?;

    if let Some(venue_id) = venue_id {
        posts.retain(|p| p.venue_id == venue_id);
    }

    let estimate = compute_crowd_level(&posts, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    let live = posts
        .iter()
        .filter(|p| p.is_approved() && is_post_live(p.created_at, now, ACTIVITY_WINDOW_MINUTES))
        .count();

    println!("Posts:     {} total, {} live", posts.len(), live);
    println!("Window:    last {ACTIVITY_WINDOW_MINUTES} minutes");
    println!("Estimate:  {}", render_crowd(&estimate));
    println!("Badge:     {}", badge_style(estimate.level));

    Ok(())
}
