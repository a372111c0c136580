//! Crowd level estimation logic.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crowdsphere_types::{CrowdLevel, Post};

/// Lookback window for qualifying posts, in minutes.
pub const ACTIVITY_WINDOW_MINUTES: i64 = 90;

/// Weight floor for posts at the edge of the activity window.
const MIN_POST_WEIGHT: f64 = 0.2;

/// Fraction of weight lost across the full window (1.0 fresh, 0.2 at the edge).
const WEIGHT_DECAY_SPAN: f64 = 0.8;

/// Assumed post count in the window for a fully busy venue.
const MAX_POSTS_IN_WINDOW: f64 = 8.0;

/// Placeholder venue popularity term.
///
/// Venue elegance and price level should eventually feed into this, but the
/// estimator has no venue context in its signature; callers wanting
/// venue-aware scoring blend it upstream.
const POPULARITY_PROXY: f64 = 0.5;

/// Blend weight of the post-derived score.
const POST_SCORE_WEIGHT: f64 = 0.7;

/// Blend weight of the popularity proxy.
const POPULARITY_WEIGHT: f64 = 0.3;

/// Scores below this classify as quiet.
const QUIET_CEILING: f64 = 0.22;

/// Scores from [`QUIET_CEILING`] up to (but excluding) this classify as moderate.
const MODERATE_CEILING: f64 = 0.45;

/// A crowd estimate: classified level plus the continuous score behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrowdEstimate {
    /// Classified crowd level.
    pub level: CrowdLevel,
    /// Continuous crowd score.
    pub score: f64,
}

impl CrowdEstimate {
    /// Creates a new estimate.
    #[must_use]
    pub const fn new(level: CrowdLevel, score: f64) -> Self {
        Self { level, score }
    }

    /// The sentinel estimate for "no live signal".
    #[must_use]
    pub const fn none() -> Self {
        Self {
            level: CrowdLevel::None,
            score: 0.0,
        }
    }
}

impl Default for CrowdEstimate {
    fn default() -> Self {
        Self::none()
    }
}

/// Computes the crowd level for a venue from its recent posts.
///
/// Only approved posts created within the last [`ACTIVITY_WINDOW_MINUTES`]
/// of `now` qualify. Each qualifying post contributes a weight decaying
/// linearly from 1.0 (fresh) to a 0.2 floor at the window edge; the weighted
/// sum is normalized against an assumed busy-venue maximum of 8 posts and
/// blended with a fixed popularity proxy before classification.
///
/// Returns [`CrowdEstimate::none`] when no post qualifies. Deterministic for
/// identical inputs, touches no shared state, and runs in `O(posts.len())`.
///
/// Posts dated after `now` pass the window filter and receive weights above
/// 1.0; see the note on `post_weight`.
#[must_use]
pub fn compute_crowd_level(posts: &[Post], now: DateTime<Utc>) -> CrowdEstimate {
    let window_start = now - TimeDelta::minutes(ACTIVITY_WINDOW_MINUTES);

    let mut qualifying = 0usize;
    let mut weighted_sum = 0.0;
    for post in posts {
        if !post.is_approved() || post.created_at < window_start {
            continue;
        }
        qualifying += 1;
        weighted_sum += post_weight(post.age_minutes(now));
    }

    if qualifying == 0 {
        return CrowdEstimate::none();
    }

    let post_score = (weighted_sum / MAX_POSTS_IN_WINDOW).min(1.0);
    let final_score = POST_SCORE_WEIGHT * post_score + POPULARITY_WEIGHT * POPULARITY_PROXY;

    CrowdEstimate::new(classify_score(final_score), final_score)
}

/// Computes the crowd level using the current wall-clock time.
///
/// Prefer [`compute_crowd_level`] with an explicit instant in anything that
/// needs reproducible results.
#[must_use]
pub fn current_crowd_level(posts: &[Post]) -> CrowdEstimate {
    compute_crowd_level(posts, Utc::now())
}

/// Computes a single post's contribution weight from its age in minutes.
///
/// Linear decay from 1.0 at age 0 to the 0.2 floor at the window edge.
/// Negative ages (future-dated posts) yield weights above 1.0: there is no
/// upper clamp.
// TODO: needs a product decision on future-dated posts; until then their
// over-unity weights are pinned by regression tests.
fn post_weight(age_minutes: f64) -> f64 {
    let decayed = 1.0 - (age_minutes / ACTIVITY_WINDOW_MINUTES as f64) * WEIGHT_DECAY_SPAN;
    decayed.max(MIN_POST_WEIGHT)
}

/// Classifies a continuous crowd score into a level.
///
/// Pure function of the score alone, using half-open intervals:
/// `[0, 0.22)` quiet, `[0.22, 0.45)` moderate, `[0.45, ..)` busy.
#[must_use]
pub const fn classify_score(score: f64) -> CrowdLevel {
    if score < QUIET_CEILING {
        CrowdLevel::Quiet
    } else if score < MODERATE_CEILING {
        CrowdLevel::Moderate
    } else {
        CrowdLevel::Busy
    }
}

/// Returns true if a post created at `created_at` still counts as live.
///
/// Uses an inclusive `<=` age comparison, unlike the estimator's window
/// filter which compares timestamps with `>=`.
#[must_use]
pub fn is_post_live(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    threshold_minutes: i64,
) -> bool {
    let age_minutes = (now - created_at).num_milliseconds() as f64 / 60_000.0;
    age_minutes <= threshold_minutes as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;
    use crowdsphere_types::{MediaType, PostStatus};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 22, 0, 0).unwrap()
    }

    fn post_aged(minutes: i64, status: PostStatus) -> Post {
        let now = reference_now();
        let created_at = now - TimeDelta::minutes(minutes);
        Post::new(
            format!("p-{minutes}"),
            "v1",
            "https://cdn.example.com/p.jpg",
            "https://cdn.example.com/p_thumb.jpg",
            MediaType::Image,
            created_at,
            created_at + TimeDelta::hours(6),
            status,
        )
    }

    #[test]
    fn test_no_posts_is_none() {
        let estimate = compute_crowd_level(&[], reference_now());
        assert_eq!(estimate, CrowdEstimate::none());
        assert_eq!(estimate.score, 0.0);
    }

    #[test]
    fn test_only_stale_posts_is_none() {
        let posts = vec![
            post_aged(91, PostStatus::Approved),
            post_aged(600, PostStatus::Approved),
        ];
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_eq!(estimate.level, CrowdLevel::None);
        assert_eq!(estimate.score, 0.0);
    }

    #[test]
    fn test_unapproved_posts_never_count() {
        let posts = vec![
            post_aged(0, PostStatus::Pending),
            post_aged(5, PostStatus::Rejected),
        ];
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_eq!(estimate.level, CrowdLevel::None);
    }

    #[test]
    fn test_single_fresh_post() {
        // One post at age 0: weight 1.0, post score 1/8, final 0.7 * 0.125 + 0.15.
        let posts = vec![post_aged(0, PostStatus::Approved)];
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_relative_eq!(estimate.score, 0.2375, epsilon = 1e-12);
        assert_eq!(estimate.level, CrowdLevel::Moderate);
    }

    #[test]
    fn test_eight_fresh_posts_is_busy() {
        let posts: Vec<Post> = (0..8).map(|_| post_aged(0, PostStatus::Approved)).collect();
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_relative_eq!(estimate.score, 0.85, epsilon = 1e-12);
        assert_eq!(estimate.level, CrowdLevel::Busy);
    }

    #[test]
    fn test_window_edge_post_included_at_floor_weight() {
        // Exactly 90 minutes old: included (>=), weight at the 0.2 floor.
        let posts = vec![post_aged(90, PostStatus::Approved)];
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_relative_eq!(estimate.score, 0.7 * (0.2 / 8.0) + 0.15, epsilon = 1e-12);
        assert_eq!(estimate.level, CrowdLevel::Quiet);
    }

    #[test]
    fn test_post_just_outside_window_excluded() {
        let posts = vec![post_aged(91, PostStatus::Approved)];
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_eq!(estimate.level, CrowdLevel::None);
    }

    #[test]
    fn test_future_dated_post_passes_filter_with_over_unity_weight() {
        // Regression: a post 45 minutes in the future weighs 1.4, more than
        // a fresh post's 1.0. Keep asserting the documented formula until
        // the product decision lands.
        let posts = vec![post_aged(-45, PostStatus::Approved)];
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_relative_eq!(estimate.score, 0.7 * (1.4 / 8.0) + 0.15, epsilon = 1e-12);

        let fresh = compute_crowd_level(&[post_aged(0, PostStatus::Approved)], reference_now());
        assert!(estimate.score > fresh.score);
    }

    #[test]
    fn test_future_dated_posts_inflate_weighted_sum() {
        // Three posts 90 minutes ahead weigh 1.8 each (5.4 total) where
        // three fresh ones weigh 3.0; classification shifts accordingly.
        let future: Vec<Post> = (0..3).map(|_| post_aged(-90, PostStatus::Approved)).collect();
        let fresh: Vec<Post> = (0..3).map(|_| post_aged(0, PostStatus::Approved)).collect();

        let future_estimate = compute_crowd_level(&future, reference_now());
        let fresh_estimate = compute_crowd_level(&fresh, reference_now());

        assert_relative_eq!(future_estimate.score, 0.7 * (5.4 / 8.0) + 0.15, epsilon = 1e-12);
        assert_eq!(future_estimate.level, CrowdLevel::Busy);
        assert_relative_eq!(fresh_estimate.score, 0.4125, epsilon = 1e-12);
        assert_eq!(fresh_estimate.level, CrowdLevel::Moderate);
    }

    #[test]
    fn test_more_fresh_posts_never_lowers_score() {
        let mut posts = vec![post_aged(60, PostStatus::Approved)];
        let mut previous = compute_crowd_level(&posts, reference_now()).score;
        for _ in 0..12 {
            posts.push(post_aged(0, PostStatus::Approved));
            let score = compute_crowd_level(&posts, reference_now()).score;
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_post_score_caps_at_one() {
        // Sixteen fresh posts saturate the normalization; the blend tops
        // out at 0.85.
        let posts: Vec<Post> = (0..16).map(|_| post_aged(0, PostStatus::Approved)).collect();
        let estimate = compute_crowd_level(&posts, reference_now());
        assert_relative_eq!(estimate.score, 0.85, epsilon = 1e-12);
    }

    #[test]
    fn test_classify_score_boundaries() {
        assert_eq!(classify_score(0.0), CrowdLevel::Quiet);
        assert_eq!(classify_score(0.2199), CrowdLevel::Quiet);
        assert_eq!(classify_score(0.22), CrowdLevel::Moderate);
        assert_eq!(classify_score(0.4499), CrowdLevel::Moderate);
        assert_eq!(classify_score(0.45), CrowdLevel::Busy);
        assert_eq!(classify_score(1.0), CrowdLevel::Busy);
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let posts = vec![
            post_aged(3, PostStatus::Approved),
            post_aged(27, PostStatus::Approved),
            post_aged(88, PostStatus::Approved),
        ];
        let now = reference_now();
        let first = compute_crowd_level(&posts, now);
        let second = compute_crowd_level(&posts, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_post_live_threshold_inclusive() {
        let now = reference_now();
        assert!(is_post_live(now - TimeDelta::minutes(90), now, 90));
        assert!(!is_post_live(now - TimeDelta::minutes(91), now, 90));
        assert!(is_post_live(now + TimeDelta::minutes(5), now, 90));
    }

    #[test]
    fn test_estimate_serde() {
        let estimate = CrowdEstimate::new(CrowdLevel::Busy, 0.85);
        let json = serde_json::to_string(&estimate).unwrap();
        assert_eq!(json, "{\"level\":\"busy\",\"score\":0.85}");
    }
}
