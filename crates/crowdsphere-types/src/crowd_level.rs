//! Crowd level classification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Discrete crowd level for a venue, ordered by increasing activity.
///
/// [`CrowdLevel::None`] is a sentinel for "no live signal" (no qualifying
/// posts in the activity window), not a busyness tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    /// No qualifying signal available.
    #[default]
    None,
    /// Little recent activity.
    Quiet,
    /// Moderate recent activity.
    Moderate,
    /// High recent activity.
    Busy,
}

impl CrowdLevel {
    /// Returns the level as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Quiet => "quiet",
            Self::Moderate => "moderate",
            Self::Busy => "busy",
        }
    }

    /// Returns true if this level carries a live signal.
    #[must_use]
    pub const fn has_signal(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns all levels in ascending activity order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::Quiet, Self::Moderate, Self::Busy]
    }
}

impl std::fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CrowdLevel {
    type Err = CrowdLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "quiet" => Ok(Self::Quiet),
            "moderate" => Ok(Self::Moderate),
            "busy" => Ok(Self::Busy),
            _ => Err(CrowdLevelParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid crowd level string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrowdLevelParseError(String);

impl std::fmt::Display for CrowdLevelParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid crowd level '{}', expected one of: none, quiet, moderate, busy",
            self.0
        )
    }
}

impl std::error::Error for CrowdLevelParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(CrowdLevel::None < CrowdLevel::Quiet);
        assert!(CrowdLevel::Quiet < CrowdLevel::Moderate);
        assert!(CrowdLevel::Moderate < CrowdLevel::Busy);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("quiet".parse::<CrowdLevel>().unwrap(), CrowdLevel::Quiet);
        assert_eq!("BUSY".parse::<CrowdLevel>().unwrap(), CrowdLevel::Busy);
        assert!("packed".parse::<CrowdLevel>().is_err());
    }

    #[test]
    fn test_level_serde() {
        let json = serde_json::to_string(&CrowdLevel::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let level: CrowdLevel = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(level, CrowdLevel::None);
    }

    #[test]
    fn test_has_signal() {
        assert!(!CrowdLevel::None.has_signal());
        assert!(CrowdLevel::Quiet.has_signal());
    }
}
