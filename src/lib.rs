// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Squatwatch Library
//!
//! Squatwatch detects whether any string from a large pattern set occurs as
//! a contiguous substring of a domain. The intended use is typosquat and
//! lookalike detection: thousands of permutations of protected names are
//! loaded once, then arbitrary observed domains are tested against them.
//!
//! # Architecture
//!
//! - [`data_structures::CodepointTrie`] stores the patterns, one edge per
//!   Unicode codepoint
//! - [`search::trie_search`] finds every occurrence of every pattern,
//!   including overlapping and nested ones
//! - [`search::naive_search`] is the brute-force oracle the trie search is
//!   checked against
//! - [`scanner`] packages load-once, scan-many usage with parallel batches
//!   and rebuild-and-swap updates
//!
//! # Example
//!
//! ```
//! use squatwatch_lib::scanner::DomainScanner;
//!
//! let scanner = DomainScanner::new(["micro-soft", "micro-soft.com", "go0gle"]);
//! let report = scanner.scan("www.www-micro-soft.com");
//!
//! assert_eq!(report.matches, vec!["micro-soft", "micro-soft.com"]);
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod scanner;
pub mod search;
pub mod utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{CodepointTrie, TrieValue};
pub use scanner::{DomainScanner, ScanReport, SharedScanner};
pub use search::{naive_search, trie_search, SearchAlgorithm};

/// Version information for squatwatch.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
