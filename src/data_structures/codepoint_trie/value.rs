// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tagged payload stored alongside trie patterns.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Value attached to an inserted pattern.
///
/// Callers use it for metadata such as "known bad" flags or severity codes.
/// Equality is variant-exact: `Bool(true)` and `Int(1)` are different values.
/// Serialized forms keep the variant as well, e.g. `{"int":1}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrieValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer, e.g. a severity code
    Int(i64),
    /// Free-form text label
    Text(String),
}

impl From<bool> for TrieValue {
    fn from(value: bool) -> Self {
        TrieValue::Bool(value)
    }
}

impl From<i64> for TrieValue {
    fn from(value: i64) -> Self {
        TrieValue::Int(value)
    }
}

impl From<i32> for TrieValue {
    fn from(value: i32) -> Self {
        TrieValue::Int(i64::from(value))
    }
}

impl From<&str> for TrieValue {
    fn from(value: &str) -> Self {
        TrieValue::Text(value.to_owned())
    }
}

impl From<String> for TrieValue {
    fn from(value: String) -> Self {
        TrieValue::Text(value)
    }
}

impl Display for TrieValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TrieValue::Bool(b) => write!(f, "{b}"),
            TrieValue::Int(i) => write!(f, "{i}"),
            TrieValue::Text(s) => f.write_str(s),
        }
    }
}
