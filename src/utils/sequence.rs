// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Sequence helpers used to normalize match results.

use std::hash::Hash;

use fnv::FnvHashSet;

/// Removes repeated elements, keeping the first occurrence of each.
///
/// # Example
///
/// ```
/// use squatwatch_lib::utils::dedup_preserving_order;
///
/// let deduped = dedup_preserving_order(["b", "a", "b", "c", "a"]);
/// assert_eq!(deduped, vec!["b", "a", "c"]);
/// ```
pub fn dedup_preserving_order<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = FnvHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Linear membership test.
pub fn contains<T: PartialEq>(items: &[T], element: &T) -> bool {
    items.iter().any(|item| item == element)
}

/// Checks whether two sequences hold the same distinct elements, ignoring
/// order and repetition.
pub fn same_distinct_elements<T: Eq + Hash>(left: &[T], right: &[T]) -> bool {
    let left: FnvHashSet<&T> = left.iter().collect();
    let right: FnvHashSet<&T> = right.iter().collect();
    left == right
}
