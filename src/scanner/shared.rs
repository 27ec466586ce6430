// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rebuild-and-swap handle for scanners that change while in use.
//!
//! A built trie is never mutated. To change the pattern set, a new scanner is
//! built off to the side and swapped in under a short write lock. Readers
//! take a snapshot and search it without holding the lock, so a swap never
//! waits on a running scan.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::{DomainScanner, ScanReport};

/// Shared, swappable [`DomainScanner`].
#[derive(Debug)]
pub struct SharedScanner {
    current: RwLock<Arc<DomainScanner>>,
}

impl SharedScanner {
    /// Wraps a fully built scanner.
    pub fn new(scanner: DomainScanner) -> Self {
        Self {
            current: RwLock::new(Arc::new(scanner)),
        }
    }

    /// Returns the scanner currently in service.
    pub fn snapshot(&self) -> Arc<DomainScanner> {
        self.current.read().clone()
    }

    /// Swaps in `scanner` and returns the one it replaced.
    ///
    /// Scans already running on an older snapshot finish against it.
    pub fn replace(&self, scanner: DomainScanner) -> Arc<DomainScanner> {
        let patterns = scanner.patterns().len();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(scanner));
        info!(patterns, "swapped in rebuilt scanner");
        previous
    }

    /// Builds a scanner for `patterns` with the current options and swaps it in.
    pub fn rebuild<I, S>(&self, patterns: I) -> Arc<DomainScanner>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = *self.snapshot().options();
        self.replace(DomainScanner::new(patterns).with_options(options))
    }

    /// Scans one domain against the current snapshot.
    pub fn scan(&self, domain: &str) -> ScanReport {
        self.snapshot().scan(domain)
    }
}
