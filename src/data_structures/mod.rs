// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for squatwatch.
//!
//! This module contains the pattern storage used by the matching engine.
//! Structures are built once and then shared read-only across searches.

pub mod codepoint_trie;

// Re-export common data structures
pub use codepoint_trie::{CodepointTrie, TrieNode, TrieValue};
