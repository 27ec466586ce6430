// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Codepoint Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns
//! its children outright and optionally carries the value of the prefix it
//! represents.

use std::fmt;

use fnv::FnvHashMap;

/// A node in the Codepoint Trie.
///
/// A node reached by following `c1 c2 .. ck` from the root represents the
/// prefix `c1 c2 .. ck`. Children are owned by exactly one parent, so two
/// paths never lead to the same node.
///
/// Cloning, comparing and dropping walk the subtree with an explicit work
/// list, so a node may sit any number of levels deep.
pub struct TrieNode<V> {
    /// Map of codepoints to child nodes
    children: FnvHashMap<char, TrieNode<V>>,

    /// Value stored when this exact prefix was inserted
    value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            value: None,
        }
    }

    /// Returns the child reached by `c`, if any.
    #[inline]
    pub fn child(&self, c: char) -> Option<&TrieNode<V>> {
        self.children.get(&c)
    }

    /// Returns the child reached by `c`, creating it if needed.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode<V> {
        self.children.entry(c).or_default()
    }

    /// Returns the value stored at this node.
    ///
    /// `None` means the prefix is only a path to longer patterns. A stored
    /// `false` or `0` is still `Some`.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Stores `value` at this node and returns the previous one.
    pub(crate) fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Iterates over the outgoing edges of this node in arbitrary order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode<V>)> {
        self.children.iter().map(|(&c, child)| (c, child))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        // Detach every descendant before it is freed, one node at a time.
        let mut detached: Vec<TrieNode<V>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = detached.pop() {
            detached.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<V: PartialEq> PartialEq for TrieNode<V> {
    /// Two nodes are equal when they store equal values and their children
    /// are pairwise equal under the same codepoints.
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.value != right.value || left.children.len() != right.children.len() {
                return false;
            }
            for (c, left_child) in &left.children {
                match right.children.get(c) {
                    Some(right_child) => pending.push((left_child, right_child)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl<V: Eq> Eq for TrieNode<V> {}

/// A node being copied: its edge from the parent, the source edges not yet
/// copied, and the copy built so far.
struct CloneFrame<'a, V> {
    edge: Option<char>,
    remaining: Vec<(char, &'a TrieNode<V>)>,
    copy: TrieNode<V>,
}

impl<'a, V: Clone> CloneFrame<'a, V> {
    fn new(edge: Option<char>, source: &'a TrieNode<V>) -> Self {
        let mut copy = TrieNode::new();
        copy.children.reserve(source.children.len());
        copy.value = source.value.clone();

        Self {
            edge,
            remaining: source.children().collect(),
            copy,
        }
    }
}

impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(None, self)];
        let mut root = TrieNode::new();

        while let Some(mut frame) = stack.pop() {
            if let Some((c, child)) = frame.remaining.pop() {
                stack.push(frame);
                stack.push(CloneFrame::new(Some(c), child));
                continue;
            }

            // Every edge is copied; hand the finished subtree to its parent.
            match (stack.last_mut(), frame.edge) {
                (Some(parent), Some(c)) => {
                    parent.copy.children.insert(c, frame.copy);
                }
                _ => root = frame.copy,
            }
        }

        root
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieNode<V> {
    /// Shows this node only: its value and its outgoing codepoints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<char> = self.children.keys().copied().collect();
        edges.sort_unstable();

        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("edges", &edges)
            .finish()
    }
}
