// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for squatwatch.
//!
//! The matching engine itself is infallible: insertion always succeeds and
//! searches report "no match" as an empty result. The errors below cover the
//! surrounding layers (configuration, pattern files, report output).

use thiserror::Error;

pub mod config;

/// Result type alias used throughout squatwatch.
pub type SquatResult<T> = Result<T, SquatError>;

/// Core error enum for squatwatch.
#[derive(Error, Debug)]
pub enum SquatError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading pattern or domain lists.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors while writing reports.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
