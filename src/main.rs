// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Squatwatch - Main entrypoint.
//!
//! Loads a pattern list once and checks domains against it. Reports go to
//! stdout; logs go to stderr.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use squatwatch_lib::config::{ConfigLoader, LogConfig, ScanConfig, ENV_PREFIX};
use squatwatch_lib::error::{SquatError, SquatResult};
use squatwatch_lib::scanner::{read_entries, DomainScanner, ScanOptions};
use squatwatch_lib::search::SearchAlgorithm;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for squatwatch.
#[derive(Parser, Debug)]
#[clap(name = "squatwatch", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Scan domains for occurrences of the patterns
    Scan {
        /// File with one pattern per line
        #[clap(short, long, value_parser)]
        patterns: PathBuf,

        /// File with one domain per line (stdin when no domains are given)
        #[clap(short = 'f', long, value_parser)]
        domains_file: Option<PathBuf>,

        /// Override the configured search algorithm
        #[clap(short, long, value_enum)]
        algorithm: Option<SearchAlgorithm>,

        /// Print one JSON report per domain
        #[clap(long)]
        json: bool,

        /// Domains to scan
        domains: Vec<String>,
    },

    /// Run trie and naive search side by side and report disagreements
    Compare {
        /// File with one pattern per line
        #[clap(short, long, value_parser)]
        patterns: PathBuf,

        /// File with one domain per line (stdin when no domains are given)
        #[clap(short = 'f', long, value_parser)]
        domains_file: Option<PathBuf>,

        /// Domains to check
        domains: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &LogConfig) -> SquatResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| SquatError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn read_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_entries(BufReader::new(file)).with_context(|| format!("failed to read {}", path.display()))
}

/// Collects domains from the arguments, then the domains file, falling back to stdin.
fn collect_domains(mut domains: Vec<String>, domains_file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    if let Some(path) = domains_file {
        domains.extend(read_list(path)?);
    }
    if domains.is_empty() {
        domains = read_entries(io::stdin().lock()).context("failed to read domains from stdin")?;
    }
    Ok(domains)
}

fn load_scanner(patterns: &Path, config: &ScanConfig) -> anyhow::Result<DomainScanner> {
    let patterns = read_list(patterns)?;
    Ok(DomainScanner::new(patterns).with_options(ScanOptions::from(&config.matcher)))
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Command::GenConfig { output } = &args.command {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent).map_err(SquatError::Io)?;
        }

        let toml = toml::to_string_pretty(&ScanConfig::default())
            .map_err(|e| SquatError::Custom(format!("Failed to serialize config: {e}")))?;
        std::fs::write(output, toml).map_err(SquatError::Io)?;

        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .context("failed to load configuration")?;
    init_logging(&config.log)?;

    match args.command {
        Command::Scan {
            patterns,
            domains_file,
            algorithm,
            json,
            domains,
        } => {
            let mut scanner = load_scanner(&patterns, &config)?;
            if let Some(algorithm) = algorithm {
                let options = ScanOptions {
                    algorithm,
                    ..*scanner.options()
                };
                scanner = scanner.with_options(options);
            }

            let domains = collect_domains(domains, domains_file.as_deref())?;
            let reports = scanner.scan_all(&domains);
            let hits = reports.iter().filter(|r| r.is_hit()).count();

            for report in &reports {
                if json {
                    println!("{}", serde_json::to_string(report).map_err(SquatError::from)?);
                } else if report.is_hit() {
                    println!("{} -> {}", report.domain, report.matches.join(","));
                }
            }

            info!(domains = reports.len(), hits, "scan complete");
            Ok(())
        }
        Command::Compare {
            patterns,
            domains_file,
            domains,
        } => {
            let scanner = load_scanner(&patterns, &config)?;
            let domains = collect_domains(domains, domains_file.as_deref())?;

            let mut disagreements = 0;
            for domain in &domains {
                let comparison = scanner.compare(domain);
                if !comparison.agree {
                    disagreements += 1;
                    warn!(domain = %comparison.domain, "trie and naive search disagree");
                    println!(
                        "{}: trie [{}] naive [{}]",
                        comparison.domain,
                        comparison.trie.join(","),
                        comparison.naive.join(",")
                    );
                }
            }

            info!(domains = domains.len(), disagreements, "comparison complete");
            if disagreements > 0 {
                bail!("{disagreements} domain(s) disagree between trie and naive search");
            }
            Ok(())
        }
        Command::Validate => {
            info!(
                algorithm = %config.matcher.algorithm,
                threads = config.matcher.threads,
                "configuration validated successfully"
            );
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
