//! Day-bucketed timeline grouping.
//!
//! Posts are first assigned to 1-based trip days, then each day's subset is
//! grouped independently; groups never span day boundaries.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;

use crate::model::{Post, PostGroup};

use super::engine::group_similar_posts_with_params;
use super::params::GroupingParams;

/// Groups posts per trip day, using default parameters.
pub fn group_posts_by_day(
    posts: &[Post],
    start_date: Option<NaiveDate>,
) -> BTreeMap<u32, Vec<PostGroup>> {
    group_posts_by_day_with_params(posts, start_date, &GroupingParams::default())
}

/// Groups posts per trip day.
///
/// With a trip start date, a post's day is the number of elapsed whole days
/// from the start (UTC midnight) plus one, floored at day 1 so posts from
/// before the trip collapse into the first day. Without one, the post's
/// explicit `day` field is used, defaulting to 1. Each day's subset is then
/// run through [`group_similar_posts_with_params`] on its own; the returned
/// map iterates days in ascending order.
pub fn group_posts_by_day_with_params(
    posts: &[Post],
    start_date: Option<NaiveDate>,
    params: &GroupingParams,
) -> BTreeMap<u32, Vec<PostGroup>> {
    let buckets = posts
        .iter()
        .cloned()
        .into_group_map_by(|post| assign_day(post, start_date));

    buckets
        .into_iter()
        .map(|(day, day_posts)| (day, group_similar_posts_with_params(&day_posts, params)))
        .collect()
}

fn assign_day(post: &Post, start_date: Option<NaiveDate>) -> u32 {
    match start_date {
        Some(start) => {
            let start_midnight = start.and_time(NaiveTime::MIN).and_utc();
            let elapsed_days = (post.effective_timestamp() - start_midnight).num_days();
            // num_days truncates toward zero; anything at or before the
            // start still lands on day 1 after the floor below.
            (elapsed_days + 1).max(1) as u32
        }
        None => post.day.unwrap_or(1),
    }
}
