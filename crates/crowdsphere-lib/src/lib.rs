//! CrowdSphere venue discovery and crowd estimation library.
//!
//! This is a facade crate that re-exports functionality from the CrowdSphere
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use crowdsphere_lib::prelude::*;
//!
//! let registry = VenueRegistry::global();
//! let now = chrono::Utc::now();
//! let posts = demo_posts(registry, now).unwrap();
//!
//! for listing in list_venues(registry, &posts, &VenueQuery::new(), now) {
//!     println!(
//!         "{:<18} {:<10} {:.3}",
//!         listing.venue.name, listing.crowd.level, listing.crowd.score
//!     );
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/crowdsphere/crowdsphere/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use crowdsphere_types::*;

// Re-export crowd estimation
pub use crowdsphere_crowd::{
    ACTIVITY_WINDOW_MINUTES, CrowdEstimate, classify_score, compute_crowd_level,
    current_crowd_level, is_post_live,
};

// Re-export venue registry and queries
#[cfg(feature = "venues")]
pub use crowdsphere_venues::{
    DEFAULT_ORIGIN, GeoPoint, VenueDetail, VenueListing, VenueQuery, VenueRegistry, demo_posts,
    haversine_km, is_same_local_day, list_venues, live_feed, venue_detail,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use crowdsphere_format::{badge_label, badge_style, clock_time, format_distance, relative_age};

/// Prelude module for convenient imports.
///
/// ```
/// use crowdsphere_lib::prelude::*;
/// ```
pub mod prelude {
    pub use crowdsphere_types::{
        CrowdLevel, CrowdSnapshot, CrowdSphereError, MediaType, Post, PostStatus, PriceLevel,
        Result, Venue, VenueType,
    };

    pub use crowdsphere_crowd::{
        ACTIVITY_WINDOW_MINUTES, CrowdEstimate, compute_crowd_level, current_crowd_level,
        is_post_live,
    };

    #[cfg(feature = "venues")]
    pub use crowdsphere_venues::{
        GeoPoint, VenueDetail, VenueListing, VenueQuery, VenueRegistry, demo_posts, list_venues,
        live_feed, venue_detail,
    };

    #[cfg(feature = "format")]
    pub use crowdsphere_format::{badge_label, badge_style, format_distance, relative_age};
}
