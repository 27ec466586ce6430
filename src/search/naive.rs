// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Reference search by direct substring containment.
//!
//! Runs in O(patterns × domain length). It exists to validate and benchmark
//! the trie search, not as the production path for large pattern sets.

use crate::utils::dedup_preserving_order;

/// Returns every pattern that occurs in `domain`, deduplicated in order of
/// first appearance in `patterns`.
///
/// Empty patterns never match.
pub fn naive_search<S>(patterns: &[S], domain: &str) -> Vec<String>
where
    S: AsRef<str>,
{
    let found = patterns
        .iter()
        .map(|pattern| pattern.as_ref())
        .filter(|pattern: &&str| !pattern.is_empty() && domain.contains(*pattern));

    dedup_preserving_order(found)
        .into_iter()
        .map(str::to_owned)
        .collect()
}
