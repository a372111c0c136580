//! Venues command implementation.
//!
//! Lists venues matching the given filters, each annotated with its distance
//! and live crowd badge.

use anyhow::Result;
use crowdsphere_lib::prelude::*;
use std::path::Path;

use crate::display::{
    load_posts, parse_level, parse_now, parse_price, parse_venue_type, render_crowd,
};

/// List venues with optional filters and live crowd badges.
#[allow(clippy::too_many_arguments)]
pub(crate) fn list(
    level: Option<&str>,
    venue_type: Option<&str>,
    price: Option<u8>,
    elegance_min: Option<f64>,
    search: Option<&str>,
    position: Option<(f64, f64)>,
    radius_km: Option<f64>,
    posts_path: Option<&Path>,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = parse_now(now)?;
    let posts = load_posts(posts_path, now)?;

    let mut query = VenueQuery::new();
    if let Some(level) = level {
        query = query.with_level(parse_level(level)?);
    }
    if let Some(venue_type) = venue_type {
        query = query.with_type(parse_venue_type(venue_type)?);
    }
    if let Some(tier) = price {
        query = query.with_price(parse_price(tier)?);
    }
    if let Some(elegance_min) = elegance_min {
        query = query.with_elegance_min(elegance_min);
    }
    if let Some(search) = search {
        query = query.with_text(search);
    }
    if let Some((lat, lng)) = position {
        query = query.with_origin(GeoPoint::new(lat, lng));
    }
    if let Some(radius_km) = radius_km {
        query = query.with_radius_km(radius_km);
    }

    let listings = list_venues(VenueRegistry::global(), &posts, &query, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("No venues found.");
        return Ok(());
    }

    println!(
        "{:<5} {:<18} {:<12} {:<6} {:<9} {:<18}",
        "ID", "NAME", "TYPE", "PRICE", "DISTANCE", "CROWD"
    );
    println!("{}", "-".repeat(70));

    for listing in &listings {
        println!(
            "{:<5} {:<18} {:<12} {:<6} {:<9} {:<18}",
            listing.venue.id,
            listing.venue.name,
            listing.venue.venue_type,
            listing.venue.price_level,
            format_distance(listing.distance_km),
            render_crowd(&listing.crowd),
        );
    }

    println!("\nTotal: {} venues", listings.len());
    Ok(())
}
