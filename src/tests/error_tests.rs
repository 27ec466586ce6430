// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::SquatError;
use std::path::PathBuf;

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = SquatError::from(io_error);

    let error_string = format!("{error}");
    assert!(error_string.starts_with("IO error"));
    assert!(error_string.contains("file not found"));
}

/// Test that configuration errors convert and keep their context.
#[test]
fn test_config_error_conversion() {
    let error: SquatError = ConfigError::FileNotFound(PathBuf::from("missing.toml")).into();
    assert!(matches!(error, SquatError::Config(ConfigError::FileNotFound(_))));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration file not found: missing.toml"
    );

    let error = ConfigError::ValueOutOfRange {
        key: "matcher.threads".to_string(),
        message: "must be at most 1024".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration value matcher.threads is out of valid range: must be at most 1024"
    );
}

/// Test serialization error conversion.
#[test]
fn test_serialization_error() {
    let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
    let error = SquatError::from(json_error);
    assert!(error.to_string().starts_with("Serialization error"));
}

/// Test custom error display.
#[test]
fn test_custom_error() {
    let error = SquatError::Custom("no domains given".to_string());
    assert_eq!(error.to_string(), "no domains given");
}

/// Test that unknown algorithm names keep the offending value.
#[test]
fn test_unknown_algorithm_error() {
    let error: SquatError = ConfigError::UnknownAlgorithm("regex".to_string()).into();
    assert_eq!(
        error.to_string(),
        "Configuration error: Unknown search algorithm: regex (expected trie or naive)"
    );
}
