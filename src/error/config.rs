// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration error module.
//!
//! Errors raised while layering defaults, config files and environment
//! overrides into a [`ScanConfig`](crate::config::ScanConfig).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when parsing the configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A search algorithm name that is neither `trie` nor `naive`.
    #[error("Unknown search algorithm: {0} (expected trie or naive)")]
    UnknownAlgorithm(String),

    /// Error when a configuration value is out of the valid range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// The key of the invalid value
        key: String,
        /// Description of the valid range
        message: String,
    },
}
