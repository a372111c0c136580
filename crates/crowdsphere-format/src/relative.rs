//! Relative age, clock time, and distance formatting.

use chrono::{DateTime, TimeZone, Utc};

/// Formats a post's age relative to `now` (e.g., "Just now", "5m ago").
///
/// Under one minute (including future-dated posts) formats as "Just now";
/// then whole minutes, hours, and days with floor division.
#[must_use]
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }

    format!("{}d ago", hours / 24)
}

/// Formats an instant as a 12-hour clock time in its timezone (e.g., "7:30 PM").
#[must_use]
pub fn clock_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%l:%M %p").to_string().trim_start().to_string()
}

/// Formats a distance in kilometres (e.g., "450m", "2.3km").
#[must_use]
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{distance_km:.1}km")
    }
}
