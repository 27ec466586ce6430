// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Utility helpers shared across squatwatch.

mod sequence;

pub use sequence::{contains, dedup_preserving_order, same_distinct_elements};
