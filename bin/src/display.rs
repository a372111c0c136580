//! Input parsing and shared output helpers for the crowdsphere CLI.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use crowdsphere_lib::prelude::*;
use std::fs;
use std::path::Path;

/// Parses a crowd level filter string.
pub(crate) fn parse_level(s: &str) -> Result<CrowdLevel> {
    s.parse::<CrowdLevel>()
        .with_context(|| format!("invalid crowd level '{s}'"))
}

/// Parses a venue type filter string.
pub(crate) fn parse_venue_type(s: &str) -> Result<VenueType> {
    match s.to_lowercase().as_str() {
        "club" => Ok(VenueType::Club),
        "restaurant" => Ok(VenueType::Restaurant),
        "event" => Ok(VenueType::Event),
        _ => bail!("invalid venue type '{s}', expected one of: club, restaurant, event"),
    }
}

/// Parses a numeric price tier.
pub(crate) fn parse_price(tier: u8) -> Result<PriceLevel> {
    PriceLevel::try_from(tier).context("invalid price tier")
}

/// Parses an RFC 3339 reference instant, defaulting to the current time.
pub(crate) fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => {
            let parsed = DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("invalid RFC 3339 instant '{s}'"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

/// Loads posts from a JSON file, or generates the demo feed when no file is
/// given.
pub(crate) fn load_posts(path: Option<&Path>, now: DateTime<Utc>) -> Result<Vec<Post>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("cannot read posts file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid posts JSON in {}", path.display()))
        }
        None => {
            let posts = demo_posts(VenueRegistry::global(), now)?;
            Ok(posts)
        }
    }
}

/// Renders a crowd estimate as "Busy (0.850)".
pub(crate) fn render_crowd(crowd: &CrowdEstimate) -> String {
    format!("{} ({:.3})", badge_label(crowd.level), crowd.score)
}
