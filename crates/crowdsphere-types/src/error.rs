//! Error types for CrowdSphere.

use thiserror::Error;

use crate::CrowdLevelParseError;

/// Result type alias for CrowdSphere operations.
pub type Result<T> = std::result::Result<T, CrowdSphereError>;

/// Errors that can occur across the CrowdSphere crates.
#[derive(Error, Debug)]
pub enum CrowdSphereError {
    /// Venue lookup failed.
    #[error("Unknown venue: {0}")]
    UnknownVenue(String),

    /// Venue carries an unresolvable IANA timezone name.
    #[error("Venue {venue} has unknown timezone '{tz}'")]
    UnknownTimezone {
        /// The venue identifier.
        venue: String,
        /// The unresolvable timezone name.
        tz: String,
    },

    /// Invalid crowd level string.
    #[error(transparent)]
    CrowdLevel(#[from] CrowdLevelParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
