// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Matcher configuration module.
//!
//! Controls which search algorithm answers scans and how results are
//! normalized and parallelized.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::search::SearchAlgorithm;
use serde::{Deserialize, Serialize};

/// Upper bound on scan worker threads.
pub const MAX_THREADS: usize = 1024;

/// Matcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Algorithm used for scans
    pub algorithm: SearchAlgorithm,

    /// Whether to collapse repeated occurrences of a pattern in trie results
    pub dedup: bool,

    /// Worker threads for batch scans (0 = one per CPU)
    pub threads: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::Trie,
            dedup: true,
            threads: 0,
        }
    }
}

impl Validate for MatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.threads > MAX_THREADS {
            return Err(ConfigError::ValueOutOfRange {
                key: "matcher.threads".to_string(),
                message: format!("must be at most {MAX_THREADS}, got {}", self.threads),
            });
        }

        Ok(())
    }
}
