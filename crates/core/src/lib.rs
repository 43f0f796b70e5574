//! stopover - proximity grouping for travel feed posts.
//!
//! Compresses a raw stream of geotagged, timestamped posts into groups that
//! read as one stop of an outing, for compact rendering in a feed or a
//! day-by-day trip timeline.

pub mod error;
pub mod geo;
pub mod grouping;
pub mod model;
pub mod text;

pub use error::{Result, StopoverError};
pub use grouping::{GroupingParams, group_posts_by_day, group_similar_posts};
pub use model::{Coordinates, Post, PostGroup};
