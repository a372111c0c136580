//! Core types for the CrowdSphere venue discovery service.
//!
//! This crate provides the fundamental data structures used throughout
//! CrowdSphere:
//!
//! - [`Venue`] - A venue with location, pricing, and timezone metadata
//! - [`Post`] - An owner-uploaded media post with moderation status
//! - [`CrowdLevel`] - Discrete busyness classification
//! - [`CrowdSnapshot`] - A persisted crowd observation for a venue

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/crowdsphere/crowdsphere/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod crowd_level;
mod error;
mod post;
mod snapshot;
mod venue;

pub use crowd_level::{CrowdLevel, CrowdLevelParseError};
pub use error::{CrowdSphereError, Result};
pub use post::{MediaType, ModerationFlag, Post, PostStatus};
pub use snapshot::CrowdSnapshot;
pub use venue::{PriceLevel, PriceLevelError, Venue, VenueType};
