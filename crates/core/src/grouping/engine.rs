//! Greedy seed-and-absorb grouping of posts by temporal and spatial
//! proximity.
//!
//! Contains group_similar_posts() and the pairwise gate it is built on.

use crate::geo::haversine_km;
use crate::model::{Post, PostGroup};
use crate::text::labels_overlap;

use super::params::GroupingParams;

/// Groups posts by temporal and spatial proximity, using default parameters.
///
/// Output groups partition the input: every post lands in exactly one group,
/// in seed-discovery order.
pub fn group_similar_posts(posts: &[Post]) -> Vec<PostGroup> {
    group_similar_posts_with_params(posts, &GroupingParams::default())
}

/// Groups posts by temporal and spatial proximity.
///
/// # Algorithm
/// Posts are sorted ascending by effective timestamp (stable, so equal
/// timestamps keep input order). The earliest unprocessed post seeds a new
/// group, then a single scan over the whole sorted list absorbs every
/// unprocessed post that passes both gates *against the seed*:
/// - temporal gate: timestamps within `time_margin` of the seed's;
/// - spatial gate: haversine distance within `distance_margin_km` when both
///   sides have coordinates, else a place-label token overlap, else no match.
///
/// The construction is greedy and single-pass: a post absorbed into a group
/// never seeds or joins another, and candidates are compared to the seed
/// rather than chained through earlier members, so similarity is not
/// transitive. That order dependence is intentional product behavior.
pub fn group_similar_posts_with_params(
    posts: &[Post],
    params: &GroupingParams,
) -> Vec<PostGroup> {
    if posts.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by_key(|p| p.effective_timestamp());

    let mut processed = vec![false; sorted.len()];
    let mut result = Vec::new();

    for seed_idx in 0..sorted.len() {
        if processed[seed_idx] {
            continue;
        }
        processed[seed_idx] = true;
        let seed = sorted[seed_idx];
        let mut members: Vec<Post> = vec![seed.clone()];

        for (cand_idx, candidate) in sorted.iter().enumerate() {
            if processed[cand_idx] {
                continue;
            }
            if posts_match(seed, candidate, params) {
                processed[cand_idx] = true;
                members.push((*candidate).clone());
            }
        }

        result.push(finalize_group(seed, members));
    }

    result
}

/// Pairwise gate between a group seed and a candidate.
///
/// The temporal gate is checked first and rejects on its own; the spatial
/// gate runs only once time passes, falling from coordinates to place-label
/// text when either side lacks a usable coordinate pair. Both gates are
/// inclusive at their margins.
fn posts_match(seed: &Post, candidate: &Post, params: &GroupingParams) -> bool {
    let gap = seed.effective_timestamp() - candidate.effective_timestamp();
    if gap.abs() > params.time_margin {
        return false;
    }

    match (seed.coordinates(), candidate.coordinates()) {
        (Some(a), Some(b)) => haversine_km(a, b) <= params.distance_margin_km,
        _ => match (seed.location.as_deref(), candidate.location.as_deref()) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
                labels_overlap(a, b, params.min_token_len)
            }
            _ => false,
        },
    }
}

fn finalize_group(seed: &Post, members: Vec<Post>) -> PostGroup {
    let start_time = members
        .iter()
        .map(Post::effective_timestamp)
        .min()
        .unwrap_or_else(|| seed.effective_timestamp());
    let end_time = members
        .iter()
        .map(Post::effective_timestamp)
        .max()
        .unwrap_or_else(|| seed.effective_timestamp());

    PostGroup {
        id: format!("group-{}", seed.id),
        location: seed
            .location
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| format!("location-{}", seed.id)),
        coordinates: seed.coordinates(),
        representative: seed.clone(),
        start_time,
        end_time,
        posts: members,
    }
}
