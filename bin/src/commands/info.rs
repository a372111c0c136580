//! Info command implementation.
//!
//! Shows a single venue's details, its current crowd estimate, and today's
//! posts with relative ages.

use anyhow::Result;
use crowdsphere_lib::prelude::*;
use crowdsphere_lib::clock_time;
use std::path::Path;

use crate::display::{load_posts, parse_now, render_crowd};

/// Show detailed information about a venue, including today's posts.
pub(crate) fn show(
    venue_id: &str,
    posts_path: Option<&Path>,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = parse_now(now)?;
    let posts = load_posts(posts_path, now)?;

    let detail = venue_detail(VenueRegistry::global(), venue_id, &posts, now)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let venue = &detail.venue;
    println!("Venue:    {}", venue.name);
    println!("ID:       {}", venue.id);
    println!("Type:     {}", venue.venue_type);
    println!("Address:  {}", venue.address);
    println!("Price:    {}", venue.price_level);
    println!("Elegance: {:.2}", venue.elegance);
    if let Some(phone) = &venue.phone {
        println!("Phone:    {phone}");
    }
    if let Some(website) = &venue.website {
        println!("Website:  {website}");
    }
    if let Some(open_hours) = &venue.open_hours {
        println!("Hours:    {open_hours}");
    }
    println!("Crowd:    {}", render_crowd(&detail.crowd));

    if detail.today_posts.is_empty() {
        println!("\nNo posts today.");
        return Ok(());
    }

    let tz = venue.timezone()?;
    println!("\nToday's posts:");
    println!("{:<14} {:<10} {:<10}", "ID", "AGE", "POSTED");
    println!("{}", "-".repeat(36));
    for post in &detail.today_posts {
        println!(
            "{:<14} {:<10} {:<10}",
            post.id,
            relative_age(post.created_at, now),
            clock_time(&post.created_at.with_timezone(&tz)),
        );
    }

    Ok(())
}
