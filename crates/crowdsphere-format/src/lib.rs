//! Presentation formatting for CrowdSphere crowd levels and posts.
//!
//! This crate maps computed values to user-facing strings:
//!
//! - [`badge_label`] / [`badge_style`] - Crowd level badges
//! - [`relative_age`] - Relative post ages ("Just now", "5m ago")
//! - [`clock_time`] - Venue-local 12-hour clock times
//! - [`format_distance`] - Human-readable distances

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/crowdsphere/crowdsphere/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod badge;
mod relative;

pub use badge::{badge_label, badge_style};
pub use relative::{clock_time, format_distance, relative_age};
