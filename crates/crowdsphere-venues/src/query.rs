//! Filtered venue listings with live crowd levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crowdsphere_crowd::{CrowdEstimate, compute_crowd_level};
use crowdsphere_types::{CrowdLevel, Post, PriceLevel, Venue, VenueType};

use crate::geo::GeoPoint;
use crate::registry::VenueRegistry;

/// Fallback reference position when the caller supplies none (Mumbai, BKC).
pub const DEFAULT_ORIGIN: GeoPoint = GeoPoint::new(19.0760, 72.8777);

/// Filter criteria for a venue listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueQuery {
    /// Keep only venues currently at this crowd level.
    pub level: Option<CrowdLevel>,
    /// Keep only venues of this type.
    pub venue_type: Option<VenueType>,
    /// Keep only venues at this price tier.
    pub price: Option<PriceLevel>,
    /// Keep only venues at or above this elegance rating.
    pub elegance_min: Option<f64>,
    /// Keep only venues whose name or address contains this text.
    pub text: Option<String>,
    /// Caller's position; defaults to [`DEFAULT_ORIGIN`].
    pub origin: Option<GeoPoint>,
    /// Keep only venues within this many kilometres of the origin.
    pub radius_km: Option<f64>,
}

impl VenueQuery {
    /// Creates an empty query matching every venue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to the given crowd level.
    #[must_use]
    pub const fn with_level(mut self, level: CrowdLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Restricts results to the given venue type.
    #[must_use]
    pub const fn with_type(mut self, venue_type: VenueType) -> Self {
        self.venue_type = Some(venue_type);
        self
    }

    /// Restricts results to the given price tier.
    #[must_use]
    pub const fn with_price(mut self, price: PriceLevel) -> Self {
        self.price = Some(price);
        self
    }

    /// Restricts results to venues at or above the given elegance.
    #[must_use]
    pub const fn with_elegance_min(mut self, elegance_min: f64) -> Self {
        self.elegance_min = Some(elegance_min);
        self
    }

    /// Restricts results to venues matching the given text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the caller's position for distance calculation.
    #[must_use]
    pub const fn with_origin(mut self, origin: GeoPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Restricts results to venues within the given radius of the origin.
    #[must_use]
    pub const fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }

    /// Returns true if a venue passes the static (non-crowd) filters.
    fn matches_venue(&self, venue: &Venue) -> bool {
        if self.venue_type.is_some_and(|t| venue.venue_type != t) {
            return false;
        }
        if self.price.is_some_and(|p| venue.price_level != p) {
            return false;
        }
        if self.elegance_min.is_some_and(|min| venue.elegance < min) {
            return false;
        }
        if let Some(text) = &self.text {
            let text = text.to_lowercase();
            if !venue.name.to_lowercase().contains(&text)
                && !venue.address.to_lowercase().contains(&text)
            {
                return false;
            }
        }
        true
    }
}

/// A venue annotated with its distance and live crowd estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueListing {
    /// The venue.
    pub venue: Venue,
    /// Distance from the query origin in kilometres.
    pub distance_km: f64,
    /// Crowd estimate computed over the venue's posts.
    pub crowd: CrowdEstimate,
}

/// Lists venues matching a query, annotated with distance and crowd level.
///
/// `posts` is the full post pool; each venue's estimate is computed over its
/// own posts only. Crowd-level filtering happens after estimation, so a
/// query for busy venues sees the same per-venue scores a listing screen
/// would badge with. Results are sorted ascending by distance.
#[must_use]
pub fn list_venues(
    registry: &VenueRegistry,
    posts: &[Post],
    query: &VenueQuery,
    now: DateTime<Utc>,
) -> Vec<VenueListing> {
    let origin = query.origin.unwrap_or(DEFAULT_ORIGIN);

    let mut listings: Vec<VenueListing> = registry
        .all()
        .filter(|venue| query.matches_venue(venue))
        .map(|venue| {
            let venue_posts: Vec<Post> = posts
                .iter()
                .filter(|p| p.venue_id == venue.id)
                .cloned()
                .collect();
            let crowd = compute_crowd_level(&venue_posts, now);
            let distance_km = origin.distance_km(GeoPoint::new(venue.lat, venue.lng));
            VenueListing {
                venue: venue.clone(),
                distance_km,
                crowd,
            }
        })
        .filter(|listing| query.level.is_none_or(|level| listing.crowd.level == level))
        .filter(|listing| {
            query
                .radius_km
                .is_none_or(|radius| listing.distance_km <= radius)
        })
        .collect();

    listings.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use crowdsphere_types::{MediaType, PostStatus};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 22, 0, 0).unwrap()
    }

    fn post_for(venue_id: &str, minutes_ago: i64, n: usize) -> Post {
        let now = reference_now();
        let created_at = now - TimeDelta::minutes(minutes_ago);
        Post::new(
            format!("{venue_id}-{n}"),
            venue_id,
            "https://cdn.example.com/p.jpg",
            "https://cdn.example.com/p_thumb.jpg",
            MediaType::Image,
            created_at,
            created_at + TimeDelta::hours(6),
            PostStatus::Approved,
        )
    }

    #[test]
    fn test_default_query_lists_all_sorted_by_distance() {
        let registry = VenueRegistry::global();
        let listings = list_venues(registry, &[], &VenueQuery::new(), reference_now());

        assert_eq!(listings.len(), 6);
        // Default origin is Skybar's own position.
        assert_eq!(listings[0].venue.id, "v1");
        assert!(listings[0].distance_km < 0.001);
        for pair in listings.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn test_no_posts_means_no_signal() {
        let registry = VenueRegistry::global();
        let listings = list_venues(registry, &[], &VenueQuery::new(), reference_now());
        assert!(listings.iter().all(|l| l.crowd.level == CrowdLevel::None));
    }

    #[test]
    fn test_posts_attach_to_their_venue_only() {
        let registry = VenueRegistry::global();
        let posts: Vec<Post> = (0..8).map(|n| post_for("v2", 0, n)).collect();
        let listings = list_venues(registry, &posts, &VenueQuery::new(), reference_now());

        for listing in &listings {
            if listing.venue.id == "v2" {
                assert_eq!(listing.crowd.level, CrowdLevel::Busy);
            } else {
                assert_eq!(listing.crowd.level, CrowdLevel::None);
            }
        }
    }

    #[test]
    fn test_filter_by_crowd_level() {
        let registry = VenueRegistry::global();
        let posts: Vec<Post> = (0..8).map(|n| post_for("v2", 0, n)).collect();
        let query = VenueQuery::new().with_level(CrowdLevel::Busy);
        let listings = list_venues(registry, &posts, &query, reference_now());

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].venue.id, "v2");
    }

    #[test]
    fn test_filter_by_type_and_price() {
        let registry = VenueRegistry::global();
        let query = VenueQuery::new()
            .with_type(VenueType::Club)
            .with_price(PriceLevel::Premium);
        let listings = list_venues(registry, &[], &query, reference_now());

        let ids: Vec<&str> = listings.iter().map(|l| l.venue.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"v1"));
        assert!(ids.contains(&"v4"));
    }

    #[test]
    fn test_filter_by_elegance_and_text() {
        let registry = VenueRegistry::global();
        let query = VenueQuery::new().with_elegance_min(0.9);
        let listings = list_venues(registry, &[], &query, reference_now());
        assert_eq!(listings.len(), 2);

        let query = VenueQuery::new().with_text("NEON");
        let listings = list_venues(registry, &[], &query, reference_now());
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].venue.id, "v4");
    }

    #[test]
    fn test_radius_filter() {
        let registry = VenueRegistry::global();
        // Tight radius around the default origin keeps only nearby venues.
        let query = VenueQuery::new().with_radius_km(2.0);
        let listings = list_venues(registry, &[], &query, reference_now());

        assert!(!listings.is_empty());
        assert!(listings.len() < 6);
        assert!(listings.iter().all(|l| l.distance_km <= 2.0));
    }
}
