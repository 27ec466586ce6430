// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie-driven substring search.
//!
//! The domain is walked once per starting offset. From each offset the walk
//! follows trie edges codepoint by codepoint until an edge is missing, and
//! every visited node with a stored value is reported. A node can be both a
//! match and the prefix of a longer pattern, so walks always continue past a
//! match.

use std::iter::FusedIterator;

use crate::data_structures::{CodepointTrie, TrieNode};

/// A pattern occurrence inside a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match<'d> {
    /// The matched slice of the domain
    pub text: &'d str,

    /// Codepoint offset where the match starts
    pub start: usize,

    /// Codepoint offset one past the last matched codepoint
    pub end: usize,
}

impl<'d> Match<'d> {
    /// Length of the match in codepoints.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Iterator over every pattern occurrence of a trie inside a domain.
///
/// Matches are yielded by ascending start offset, then by ascending end
/// offset. The trie is only read.
#[derive(Debug)]
pub struct TrieMatches<'t, 'd, V> {
    /// Root of the trie being searched
    root: &'t TrieNode<V>,

    /// The domain being searched
    domain: &'d str,

    /// Byte offset and codepoint for every character of the domain
    chars: Vec<(usize, char)>,

    /// Codepoint offset of the current walk
    start: usize,

    /// Next codepoint offset to consume
    end: usize,

    /// Node reached by the current walk; `None` means the root
    cursor: Option<&'t TrieNode<V>>,
}

impl<'t, 'd, V> TrieMatches<'t, 'd, V> {
    fn new(trie: &'t CodepointTrie<V>, domain: &'d str) -> Self {
        Self {
            root: trie.root(),
            domain,
            chars: domain.char_indices().collect(),
            start: 0,
            end: 0,
            cursor: None,
        }
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.chars
            .get(pos)
            .map_or(self.domain.len(), |&(offset, _)| offset)
    }

    fn next_start(&mut self) {
        self.start += 1;
        self.end = self.start;
        self.cursor = None;
    }
}

impl<'t, 'd, V> Iterator for TrieMatches<'t, 'd, V> {
    type Item = Match<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.chars.len() {
            let Some(&(_, c)) = self.chars.get(self.end) else {
                self.next_start();
                continue;
            };

            let node = self.cursor.unwrap_or(self.root);
            match node.child(c) {
                None => self.next_start(),
                Some(child) => {
                    self.end += 1;
                    self.cursor = Some(child);

                    if child.value().is_some() {
                        let domain = self.domain;
                        let span = self.byte_offset(self.start)..self.byte_offset(self.end);
                        let text = &domain[span];
                        return Some(Match {
                            text,
                            start: self.start,
                            end: self.end,
                        });
                    }
                }
            }
        }

        None
    }
}

impl<'t, 'd, V> FusedIterator for TrieMatches<'t, 'd, V> {}

/// Returns a lazy iterator over every occurrence of every stored pattern in
/// `domain`, including overlapping and nested occurrences.
///
/// The root value (an inserted empty pattern) is never reported.
pub fn trie_matches<'t, 'd, V>(
    trie: &'t CodepointTrie<V>,
    domain: &'d str,
) -> TrieMatches<'t, 'd, V> {
    TrieMatches::new(trie, domain)
}

/// Returns every substring of `domain` that is a stored pattern.
///
/// A pattern appears once per distinct start offset at which it occurs.
///
/// # Complexity
///
/// O(n × longest matching chain) for a domain of n codepoints, independent
/// of how many patterns the trie holds.
pub fn trie_search<V>(trie: &CodepointTrie<V>, domain: &str) -> Vec<String> {
    trie_matches(trie, domain)
        .map(|m| m.text.to_owned())
        .collect()
}
