//! Persisted crowd observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CrowdLevel;

/// A point-in-time crowd observation for a venue.
///
/// Snapshots are what callers persist when they want history; the estimator
/// itself never stores state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrowdSnapshot {
    /// Unique snapshot identifier.
    pub id: String,
    /// Venue this observation belongs to.
    pub venue_id: String,
    /// Classified crowd level at `at`.
    pub level: CrowdLevel,
    /// Continuous crowd score at `at`.
    pub score: f64,
    /// Observation instant (UTC).
    pub at: DateTime<Utc>,
}

impl CrowdSnapshot {
    /// Creates a new snapshot.
    // Snapshot ids are assigned by the storage layer, not generated here.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        venue_id: impl Into<String>,
        level: CrowdLevel,
        score: f64,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            level,
            score,
            at,
        }
    }
}
