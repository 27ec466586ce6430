// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration module for squatwatch.
//!
//! This module provides a layered configuration system: built-in defaults,
//! then an optional file (TOML, YAML, JSON), then environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod matcher;

pub use matcher::MatcherConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "SQUATWATCH";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for squatwatch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Matcher configuration
    pub matcher: MatcherConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for ScanConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.matcher.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for squatwatch.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// Environment variables take the form `{PREFIX}__{SECTION}__{KEY}`, for
    /// example `SQUATWATCH__MATCHER__ALGORITHM=naive`.
    ///
    /// # Returns
    ///
    /// * `Ok(ScanConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<ScanConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&ScanConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config: ScanConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        tracing::debug!(?config, "configuration loaded");

        Ok(config)
    }
}
