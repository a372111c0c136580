//! Owner-uploaded venue posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media type of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image.
    #[default]
    Image,
    /// Short video clip.
    Video,
}

/// Moderation status of a post.
///
/// Only [`PostStatus::Approved`] posts contribute to crowd estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Passed moderation, visible in feeds.
    Approved,
    /// Awaiting moderation.
    #[default]
    Pending,
    /// Failed moderation, never shown.
    Rejected,
}

impl PostStatus {
    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Moderation flag attached during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModerationFlag {
    /// No issue found.
    #[default]
    None,
    /// Flagged as not safe for work.
    Nsfw,
    /// Flagged for another reason.
    Other,
}

/// An owner-uploaded media post for a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: String,
    /// Identifier of the venue this post belongs to.
    pub venue_id: String,
    /// Full-size media URL.
    pub media_url: String,
    /// Thumbnail URL.
    pub thumb_url: String,
    /// Media type.
    #[serde(default)]
    pub media_type: MediaType,
    /// Upload instant (UTC).
    pub created_at: DateTime<Utc>,
    /// Instant the post drops out of live feeds (UTC).
    pub expires_at: DateTime<Utc>,
    /// Moderation status.
    #[serde(default)]
    pub status: PostStatus,
    /// Whether faces were detected in the media.
    #[serde(default)]
    pub has_faces: bool,
    /// Whether detected faces were blurred before upload.
    #[serde(default)]
    pub faces_blurred: bool,
    /// Flag attached during moderation review.
    #[serde(default)]
    pub moderation_flag: ModerationFlag,
}

impl Post {
    /// Creates a new post.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        venue_id: impl Into<String>,
        media_url: impl Into<String>,
        thumb_url: impl Into<String>,
        media_type: MediaType,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        status: PostStatus,
    ) -> Self {
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            media_url: media_url.into(),
            thumb_url: thumb_url.into(),
            media_type,
            created_at,
            expires_at,
            status,
            has_faces: false,
            faces_blurred: false,
            moderation_flag: ModerationFlag::None,
        }
    }

    /// Returns true if the post passed moderation.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.status, PostStatus::Approved)
    }

    /// Returns true if the post has expired relative to `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Returns the post age in fractional minutes relative to `now`.
    ///
    /// Negative for future-dated posts.
    #[must_use]
    pub fn age_minutes(&self, now: DateTime<Utc>) -> f64 {
        (now - self.created_at).num_milliseconds() as f64 / 60_000.0
    }
}
