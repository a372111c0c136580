//! Crowd level estimation for the CrowdSphere venue discovery service.
//!
//! This crate provides the core busyness signal:
//!
//! - [`compute_crowd_level`] - Maps recent posts to a `(level, score)` pair
//! - [`CrowdEstimate`] - The classified level and continuous score
//! - [`is_post_live`] - Whether a single post still counts as live
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use crowdsphere_crowd::compute_crowd_level;
//! use crowdsphere_types::CrowdLevel;
//!
//! let estimate = compute_crowd_level(&[], Utc::now());
//! assert_eq!(estimate.level, CrowdLevel::None);
//! assert_eq!(estimate.score, 0.0);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/crowdsphere/crowdsphere/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::{
    ACTIVITY_WINDOW_MINUTES, CrowdEstimate, classify_score, compute_crowd_level,
    current_crowd_level, is_post_live,
};
