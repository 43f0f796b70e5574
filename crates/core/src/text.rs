//! Fuzzy place-name comparison for posts without usable coordinates.

use rustc_hash::FxHashSet;

/// Tests whether two free-text place labels plausibly name the same place.
///
/// Both labels are lowercased and split on whitespace, commas, and hyphens;
/// they overlap when at least one shared token is strictly longer than
/// `min_token_len` characters. The length floor keeps two-letter fragments
/// like state or airport codes from gluing unrelated places together.
pub fn labels_overlap(a: &str, b: &str, min_token_len: usize) -> bool {
    let a_tokens: FxHashSet<String> = tokenize(a).collect();
    tokenize(b).any(|t| t.chars().count() > min_token_len && a_tokens.contains(&t))
}

fn tokenize(label: &str) -> impl Iterator<Item = String> + '_ {
    label
        .split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}
