//! Proximity grouping for feed posts.
//!
//! This module contains:
//! - Grouping parameters (GroupingParams)
//! - The greedy seed-and-absorb grouping algorithm (group_similar_posts)
//! - Day-bucketed timeline grouping (group_posts_by_day)

pub mod daily;
pub mod engine;
pub mod params;

pub use daily::{group_posts_by_day, group_posts_by_day_with_params};
pub use engine::{group_similar_posts, group_similar_posts_with_params};
pub use params::GroupingParams;
