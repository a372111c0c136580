//! Venue registry and discovery queries for CrowdSphere.
//!
//! This crate provides everything between the raw data model and a venue
//! listing screen:
//!
//! - [`VenueRegistry`] - Embedded seed registry with lookup and search
//! - [`VenueQuery`] / [`list_venues`] - Filtered listings with live crowd levels
//! - [`venue_detail`] - Single-venue view with its venue-local "today" posts
//! - [`live_feed`] - Approved, unexpired posts across venues
//! - [`demo_posts`] - Deterministic demo feed for offline use
//!
//! # Example
//!
//! ```
//! use crowdsphere_venues::VenueRegistry;
//!
//! let registry = VenueRegistry::global();
//! let venue = registry.get("v1").unwrap();
//! assert_eq!(venue.name, "Skybar Lounge");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/crowdsphere/crowdsphere/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod detail;
mod feed;
mod geo;
mod query;
mod registry;
mod seed;

pub use detail::{VenueDetail, is_same_local_day, venue_detail};
pub use feed::live_feed;
pub use geo::{GeoPoint, haversine_km};
pub use query::{DEFAULT_ORIGIN, VenueListing, VenueQuery, list_venues};
pub use registry::VenueRegistry;
pub use seed::demo_posts;
