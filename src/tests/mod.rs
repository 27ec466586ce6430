// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for squatwatch.
//!
//! This module contains crate-internal test suites and shared fixtures:
//! - Configuration loading and validation
//! - Error conversions and messages
//! - Scanner behavior, including parallel batches and scanner swaps
//! - Proptest strategies shared with the search property tests

pub mod error_tests;
