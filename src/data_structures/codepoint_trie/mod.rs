// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Codepoint Trie Implementation
//!
//! This module provides a prefix tree keyed by Unicode scalar values. Every
//! edge consumes exactly one `char`, so multi-byte characters are matched as
//! atomic units and never split mid-sequence.
//!
//! # Concurrency
//!
//! The trie is built with `&mut self` and queried with `&self`. Once it is
//! fully built it can be shared across threads (for example behind an `Arc`)
//! and searched concurrently without locking. Callers that need to add
//! patterns after the trie is in use should build a new trie and swap it in,
//! see [`SharedScanner`](crate::scanner::SharedScanner).

mod node;
mod value;

pub use node::TrieNode;
pub use value::TrieValue;

/// Codepoint Trie is a prefix tree storing patterns with an associated value.
///
/// Key features:
/// * One edge per Unicode codepoint
/// * Value presence tracked independently of the value itself
/// * Structural, value-exact equality
/// * Insertion order has no effect on the final shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointTrie<V = TrieValue> {
    /// The root node of the trie, representing the empty prefix
    root: TrieNode<V>,
}

impl<V> CodepointTrie<V> {
    /// Creates a new empty `CodepointTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Inserts a pattern with its value into the trie.
    ///
    /// Nodes are created for every missing prefix of `pattern`. An empty
    /// pattern stores the value on the root.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to insert.
    /// * `value` - The value to associate with the pattern.
    ///
    /// # Returns
    ///
    /// The value previously stored for exactly this pattern, if any.
    pub fn insert<K>(&mut self, pattern: K, value: V) -> Option<V>
    where
        K: AsRef<str>,
    {
        let node = pattern
            .as_ref()
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));
        node.set_value(value)
    }

    /// Retrieves the value stored for `pattern`.
    ///
    /// Returns `None` when the path does not exist or when it exists only as
    /// a prefix of longer patterns.
    pub fn get<K>(&self, pattern: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        self.find_node(pattern.as_ref())?.value()
    }

    /// Checks if `pattern` was inserted.
    pub fn contains_key<K>(&self, pattern: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(pattern).is_some()
    }

    /// Checks whether any inserted pattern starts with `prefix`.
    pub fn has_prefix<K>(&self, prefix: K) -> bool
    where
        K: AsRef<str>,
    {
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Returns the number of patterns with a stored value.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.nodes().filter(|node| node.value().is_some()).count()
    }

    /// Checks if the trie holds no patterns.
    pub fn is_empty(&self) -> bool {
        // Nodes are never removed, so any child implies a stored value below it.
        self.root.child_count() == 0 && self.root.value().is_none()
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode<V>> {
        prefix.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    /// Depth-first walk over every node. Uses an explicit stack so long
    /// patterns cannot exhaust the call stack.
    fn nodes(&self) -> impl Iterator<Item = &TrieNode<V>> + '_ {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().map(|(_, child)| child));
            Some(node)
        })
    }
}

impl<V> Default for CodepointTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for CodepointTrie<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (pattern, value) in iter {
            self.insert(pattern, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CodepointTrie<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
