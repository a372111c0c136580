//! Crowd level badge mapping.

use crowdsphere_types::CrowdLevel;

/// Returns the user-facing badge label for a crowd level.
#[must_use]
pub const fn badge_label(level: CrowdLevel) -> &'static str {
    match level {
        CrowdLevel::Quiet => "Quiet",
        CrowdLevel::Moderate => "Moderate",
        CrowdLevel::Busy => "Busy",
        CrowdLevel::None => "No live update",
    }
}

/// Returns the style key for a crowd level badge.
///
/// Clients map these to their own color schemes.
#[must_use]
pub const fn badge_style(level: CrowdLevel) -> &'static str {
    match level {
        CrowdLevel::Quiet => "crowd-quiet",
        CrowdLevel::Moderate => "crowd-moderate",
        CrowdLevel::Busy => "crowd-busy",
        CrowdLevel::None => "crowd-none",
    }
}
