// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Multi-pattern substring search.
//!
//! This module finds every stored pattern that occurs anywhere inside a
//! domain string. Two algorithms are provided:
//!
//! - [`trie_search`] walks a [`CodepointTrie`](crate::data_structures::CodepointTrie)
//!   once per starting offset of the domain. Its cost does not grow with the
//!   number of patterns, which makes it the production path when thousands of
//!   permutations are checked per protected name.
//! - [`naive_search`] tests each pattern with direct containment. It is the
//!   correctness oracle for the trie search.
//!
//! Both select the same set of distinct pattern strings for the same pattern
//! list. They differ in occurrence counting: the trie reports a pattern once
//! per start offset, the naive search reports each pattern once.
//!
//! # Example
//!
//! ```
//! use squatwatch_lib::data_structures::CodepointTrie;
//! use squatwatch_lib::search::{naive_search, trie_search};
//! use squatwatch_lib::utils::same_distinct_elements;
//!
//! let patterns = ["groove.id", "roove.id", "groove.i"];
//! let trie: CodepointTrie<bool> = patterns.iter().map(|p| (*p, true)).collect();
//!
//! let found = trie_search(&trie, "groove.id");
//! assert_eq!(found, vec!["groove.i", "groove.id", "roove.id"]);
//! assert!(same_distinct_elements(&found, &naive_search(&patterns, "groove.id")));
//! ```
//!
//! # Performance Characteristics
//!
//! - Trie search: O(n × longest matching chain) for a domain of n codepoints
//! - Naive search: O(p × n) for p patterns
//! - Neither search mutates its inputs, so one built trie can serve many
//!   concurrent queries

mod naive;
mod trie;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

// Re-exports
pub use naive::naive_search;
pub use trie::{trie_matches, trie_search, Match, TrieMatches};

/// Selects which algorithm answers a scan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SearchAlgorithm {
    /// Trie walk, one pass per starting offset
    #[default]
    Trie,
    /// Direct containment test per pattern
    Naive,
}

impl Display for SearchAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchAlgorithm::Trie => f.write_str("trie"),
            SearchAlgorithm::Naive => f.write_str("naive"),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ConfigError;

    /// Parses an algorithm name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trie" => Ok(SearchAlgorithm::Trie),
            "naive" => Ok(SearchAlgorithm::Naive),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl TryFrom<String> for SearchAlgorithm {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests;
