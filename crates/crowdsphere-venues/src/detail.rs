//! Single-venue detail view.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crowdsphere_crowd::{CrowdEstimate, compute_crowd_level};
use crowdsphere_types::{CrowdSphereError, Post, Result, Venue};

use crate::registry::VenueRegistry;

/// A venue together with its venue-local "today" posts and crowd estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueDetail {
    /// The venue.
    pub venue: Venue,
    /// Approved posts created today in the venue's timezone, newest first.
    pub today_posts: Vec<Post>,
    /// Crowd estimate computed over today's posts.
    pub crowd: CrowdEstimate,
}

/// Builds the detail view for a venue.
///
/// "Today" is the venue's local calendar day, so a 1 AM post still shows on
/// the detail screen of a club that opened the previous evening in another
/// timezone than the viewer's.
///
/// # Errors
///
/// Returns [`CrowdSphereError::UnknownVenue`] if the id is not registered,
/// or [`CrowdSphereError::UnknownTimezone`] if the venue's timezone name
/// does not resolve.
pub fn venue_detail(
    registry: &VenueRegistry,
    venue_id: &str,
    posts: &[Post],
    now: DateTime<Utc>,
) -> Result<VenueDetail> {
    let venue = registry
        .get(venue_id)
        .ok_or_else(|| CrowdSphereError::UnknownVenue(venue_id.to_string()))?;
    let tz = venue.timezone()?;

    let mut today_posts: Vec<Post> = posts
        .iter()
        .filter(|p| p.venue_id == venue.id && p.is_approved())
        .filter(|p| is_same_local_day(p.created_at, tz, now))
        .cloned()
        .collect();
    today_posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let crowd = compute_crowd_level(&today_posts, now);

    Ok(VenueDetail {
        venue: venue.clone(),
        today_posts,
        crowd,
    })
}

/// Returns true if `instant` falls on the same local calendar day as `now`
/// in the given timezone.
#[must_use]
pub fn is_same_local_day(instant: DateTime<Utc>, tz: Tz, now: DateTime<Utc>) -> bool {
    instant.with_timezone(&tz).date_naive() == now.with_timezone(&tz).date_naive()
}
