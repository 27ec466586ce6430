// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Domain scanning built on the matching engine.
//!
//! A [`DomainScanner`] loads a pattern set once and then answers any number
//! of domain queries against it. Scans only read the scanner, so batches are
//! split across worker threads that share it without locking.

mod shared;

use std::io::{self, BufRead};
use std::thread;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::MatcherConfig;
use crate::data_structures::{CodepointTrie, TrieValue};
use crate::search::{naive_search, trie_search, SearchAlgorithm};
use crate::utils::{dedup_preserving_order, same_distinct_elements};

pub use shared::SharedScanner;

/// Options controlling how a scanner answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Algorithm used for scans
    pub algorithm: SearchAlgorithm,

    /// Collapse repeated occurrences in trie results
    pub dedup: bool,

    /// Worker threads for [`DomainScanner::scan_all`] (0 = one per CPU)
    pub threads: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&MatcherConfig::default())
    }
}

impl From<&MatcherConfig> for ScanOptions {
    fn from(config: &MatcherConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            dedup: config.dedup,
            threads: config.threads,
        }
    }
}

/// Result of scanning one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// The scanned domain
    pub domain: String,

    /// Patterns found inside the domain
    pub matches: Vec<String>,
}

impl ScanReport {
    /// Whether any pattern matched.
    pub fn is_hit(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Side-by-side result of both algorithms for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// The scanned domain
    pub domain: String,

    /// Trie search result, one entry per occurrence
    pub trie: Vec<String>,

    /// Naive search result, one entry per pattern
    pub naive: Vec<String>,

    /// Whether both results hold the same distinct patterns
    pub agree: bool,
}

/// A pattern set loaded once and scanned against many domains.
#[derive(Debug, Clone)]
pub struct DomainScanner {
    /// Patterns in load order, kept for the naive path
    patterns: Vec<String>,

    /// Trie built from `patterns`
    trie: CodepointTrie,

    options: ScanOptions,
}

impl DomainScanner {
    /// Builds a scanner from a pattern list.
    ///
    /// Every pattern is stored with `TrieValue::Bool(true)`. Duplicates are
    /// accepted and collapse onto the same trie node.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let trie: CodepointTrie = patterns
            .iter()
            .map(|pattern| (pattern.as_str(), TrieValue::Bool(true)))
            .collect();

        info!(
            patterns = patterns.len(),
            distinct = trie.len(),
            nodes = trie.node_count(),
            "built pattern trie"
        );

        Self {
            patterns,
            trie,
            options: ScanOptions::default(),
        }
    }

    /// Replaces the scan options.
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the scan options.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Returns the patterns in load order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the pattern trie.
    pub fn trie(&self) -> &CodepointTrie {
        &self.trie
    }

    /// Scans one domain with the configured algorithm.
    pub fn scan(&self, domain: &str) -> ScanReport {
        let matches = match self.options.algorithm {
            SearchAlgorithm::Trie => {
                let found = trie_search(&self.trie, domain);
                if self.options.dedup {
                    dedup_preserving_order(found)
                } else {
                    found
                }
            }
            SearchAlgorithm::Naive => naive_search(&self.patterns, domain),
        };

        debug!(
            domain,
            algorithm = %self.options.algorithm,
            matches = matches.len(),
            "scanned domain"
        );

        ScanReport {
            domain: domain.to_owned(),
            matches,
        }
    }

    /// Scans many domains, splitting the work across worker threads.
    ///
    /// Reports are returned in input order.
    pub fn scan_all<S>(&self, domains: &[S]) -> Vec<ScanReport>
    where
        S: AsRef<str> + Sync,
    {
        let workers = self.worker_count(domains.len());
        if workers <= 1 {
            return domains.iter().map(|d| self.scan(d.as_ref())).collect();
        }

        let chunk_size = domains.len().div_ceil(workers);
        debug!(domains = domains.len(), workers, chunk_size, "scanning batch");

        thread::scope(|scope| {
            let handles: Vec<_> = domains
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|d| self.scan(d.as_ref()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }

    /// Runs both algorithms on `domain` and reports whether they agree.
    pub fn compare(&self, domain: &str) -> Comparison {
        let trie = trie_search(&self.trie, domain);
        let naive = naive_search(&self.patterns, domain);
        let agree = same_distinct_elements(&trie, &naive);

        Comparison {
            domain: domain.to_owned(),
            trie,
            naive,
            agree,
        }
    }

    fn worker_count(&self, jobs: usize) -> usize {
        let threads = match self.options.threads {
            0 => num_cpus::get(),
            n => n,
        };
        threads.min(jobs).max(1)
    }
}

/// Reads newline-separated entries such as patterns or domains.
///
/// Surrounding whitespace is trimmed. Blank lines and lines starting with
/// `#` are skipped.
pub fn read_entries<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        entries.push(entry.to_owned());
    }
    Ok(entries)
}
