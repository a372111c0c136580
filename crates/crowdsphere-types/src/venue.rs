//! Venue definitions.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::CrowdSphereError;

/// Venue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    /// Nightclub or bar.
    Club,
    /// Restaurant or lounge.
    Restaurant,
    /// Temporary event space.
    Event,
}

impl VenueType {
    /// Returns the venue type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Club => "club",
            Self::Restaurant => "restaurant",
            Self::Event => "event",
        }
    }
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Price tier of a venue, serialized as 1 (lowest) to 3 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PriceLevel {
    /// Budget-friendly.
    Affordable,
    /// Mid-range.
    Standard,
    /// High-end.
    Premium,
}

impl PriceLevel {
    /// Returns the numeric tier (1-3).
    #[must_use]
    pub const fn tier(&self) -> u8 {
        match self {
            Self::Affordable => 1,
            Self::Standard => 2,
            Self::Premium => 3,
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.tier()
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = PriceLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Affordable),
            2 => Ok(Self::Standard),
            3 => Ok(Self::Premium),
            _ => Err(PriceLevelError(value)),
        }
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.tier() {
            write!(f, "$")?;
        }
        Ok(())
    }
}

/// Error returned for a price level outside 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevelError(u8);

impl std::fmt::Display for PriceLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid price level {}, expected 1, 2 or 3", self.0)
    }
}

impl std::error::Error for PriceLevelError {}

/// A venue listed in CrowdSphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Venue category.
    #[serde(rename = "type")]
    pub venue_type: VenueType,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Street address.
    pub address: String,
    /// Price tier.
    pub price_level: PriceLevel,
    /// Elegance rating in `[0.0, 1.0]`.
    pub elegance: f64,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// IANA timezone name (e.g., "Asia/Kolkata").
    pub tz: String,
    /// Whether the venue's ownership has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// Human-readable opening hours for today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_hours: Option<String>,
}

impl Venue {
    /// Resolves the venue's IANA timezone.
    ///
    /// # Errors
    ///
    /// Returns [`CrowdSphereError::UnknownTimezone`] if the `tz` field is
    /// not a valid IANA timezone name.
    pub fn timezone(&self) -> Result<Tz, CrowdSphereError> {
        self.tz
            .parse::<Tz>()
            .map_err(|_| CrowdSphereError::UnknownTimezone {
                venue: self.id.clone(),
                tz: self.tz.clone(),
            })
    }
}
