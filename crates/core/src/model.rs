//! Feed post and group value types.
//!
//! `Post` mirrors the upstream feed record (camelCase JSON); `PostGroup` is
//! the engine's output and exists only for the duration of a rendering pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A geographic point, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single user-submitted feed post.
///
/// Coordinates arrive as decimal strings (the upstream schema stores them
/// that way); `location` is a free-text place label. Every post is expected
/// to carry at least `created_at` - that is an upstream invariant, not
/// validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,

    /// Capture timestamp, if the client supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<DateTime<Utc>>,

    /// Record creation timestamp, always present.
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,

    /// Free-text place label, e.g. "Montmartre, Paris".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Explicit 1-based trip day, if the author assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl Post {
    /// Capture time if present, else creation time.
    ///
    /// This is the timestamp used for sorting, gating, and day assignment.
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.taken_at.unwrap_or(self.created_at)
    }

    /// Parses the decimal-string coordinate pair, if both halves are present
    /// and numeric. A string that fails to parse behaves as absent.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.latitude.as_deref()?.trim().parse::<f64>().ok()?;
        let lng = self.longitude.as_deref()?.trim().parse::<f64>().ok()?;
        Some(Coordinates::new(lat, lng))
    }
}

/// A cluster of posts judged close enough in time and place to render as
/// one compound card.
///
/// Members are in discovery order with the representative (seed) first; the
/// time range bounds every member's effective timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostGroup {
    /// Synthetic identifier, `"group-<seed id>"`.
    pub id: String,

    pub posts: Vec<Post>,

    /// The seed post: the earliest-by-effective-timestamp member.
    pub representative: Post,

    /// Seed's place label, or `"location-<seed id>"` when it has none.
    pub location: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    /// Seed's coordinates, if it carries any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Reads a JSON array of posts from any reader.
pub fn read_posts<R: std::io::Read>(reader: R) -> Result<Vec<Post>> {
    Ok(serde_json::from_reader(reader)?)
}
