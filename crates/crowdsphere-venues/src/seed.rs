//! Deterministic demo post feed.

use chrono::{DateTime, Days, TimeDelta, TimeZone, Utc};

use crowdsphere_types::{MediaType, Post, PostStatus, Result};

use crate::registry::VenueRegistry;

/// Post ages in minutes, applied per venue in order.
const AGE_STEPS_MINUTES: [i64; 6] = [6, 18, 35, 52, 74, 88];

/// Demo media URLs cycled across generated posts.
const DEMO_MEDIA: [&str; 3] = [
    "https://cdn.crowdsphere.example/demo/club-floor.jpg",
    "https://cdn.crowdsphere.example/demo/bar-scene.jpg",
    "https://cdn.crowdsphere.example/demo/rooftop.jpg",
];

/// Generates a reproducible demo feed across all registered venues.
///
/// Each venue gets two to six approved posts at staggered ages, expiring at
/// the venue's next local midnight. The same registry and `now` always
/// produce the same feed, so CLI output and tests are stable.
///
/// # Errors
///
/// Returns [`crowdsphere_types::CrowdSphereError::UnknownTimezone`] if a
/// registered venue carries an unresolvable timezone name.
pub fn demo_posts(registry: &VenueRegistry, now: DateTime<Utc>) -> Result<Vec<Post>> {
    let mut posts = Vec::new();

    for (index, id) in registry.ids().into_iter().enumerate() {
        // ids() is sorted, so lookups cannot miss.
        let Some(venue) = registry.get(id) else {
            continue;
        };
        let tz = venue.timezone()?;

        let count = 2 + (index % 5);
        for (n, age) in AGE_STEPS_MINUTES.iter().take(count).enumerate() {
            let created_at = now - TimeDelta::minutes(*age);
            let expires_at = next_local_midnight(created_at, tz);
            let media_url = DEMO_MEDIA[(index + n) % DEMO_MEDIA.len()];

            let mut post = Post::new(
                format!("{id}-demo-{}", n + 1),
                id,
                media_url,
                media_url,
                MediaType::Image,
                created_at,
                expires_at,
                PostStatus::Approved,
            );
            post.has_faces = true;
            post.faces_blurred = true;
            posts.push(post);
        }
    }

    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(posts)
}

/// Returns the next local midnight after `instant` in the given timezone.
fn next_local_midnight(instant: DateTime<Utc>, tz: chrono_tz::Tz) -> DateTime<Utc> {
    let local_date = instant.with_timezone(&tz).date_naive();
    let next_day = local_date
        .checked_add_days(Days::new(1))
        .unwrap_or(local_date);
    next_day
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map_or_else(|| instant + TimeDelta::hours(24), |dt| dt.with_timezone(&Utc))
}
