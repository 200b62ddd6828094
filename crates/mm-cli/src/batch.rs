// Dweve MM - Container Markup Compiler
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Batch processing for multiple MM files with parallel execution and
//! progress reporting.
//!
//! Files below the configured threshold are processed serially; larger sets
//! go through rayon's work-stealing pool. Failures never stop the batch:
//! every file gets a [`FileResult`] and the caller decides what to report.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mm_cli::batch::{BatchConfig, BatchProcessor, ValidationOperation};
//! use std::path::PathBuf;
//!
//! let processor = BatchProcessor::new(BatchConfig::default());
//! let files = vec![PathBuf::from("a.mm"), PathBuf::from("b.mm")];
//!
//! let results = processor.process(&files, ValidationOperation, true);
//! println!(
//!     "Processed {} files, {} succeeded, {} failed",
//!     results.total_files(),
//!     results.success_count(),
//!     results.failure_count()
//! );
//! ```

use crate::commands::{compile_options, tracing_sink};
use crate::error::CliError;
use colored::Colorize;
use mm_core::{compile_file, traverse, StatsCollector};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Configuration for batch processing operations.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum number of files to trigger parallel processing.
    ///
    /// Default: 10
    pub parallel_threshold: usize,

    /// Number of files between progress updates. Set to 0 to disable.
    ///
    /// Default: 1 (update after each file)
    pub progress_interval: usize,

    /// Show file names and detailed status for each file.
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10,
            progress_interval: 1,
            verbose: false,
        }
    }
}

/// Result of processing a single file in a batch operation.
#[derive(Debug, Clone)]
pub struct FileResult<T> {
    /// The file path that was processed
    pub path: PathBuf,
    /// The result of processing (Ok or Err)
    pub result: Result<T, CliError>,
}

impl<T> FileResult<T> {
    /// Create a successful file result.
    pub fn success(path: PathBuf, value: T) -> Self {
        Self {
            path,
            result: Ok(value),
        }
    }

    /// Create a failed file result.
    pub fn failure(path: PathBuf, error: CliError) -> Self {
        Self {
            path,
            result: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Aggregated results from a batch processing operation, in input order.
#[derive(Debug, Clone)]
pub struct BatchResults<T> {
    /// Individual results for each processed file
    pub results: Vec<FileResult<T>>,
    /// Total processing time in milliseconds
    pub elapsed_ms: u128,
}

impl<T> BatchResults<T> {
    pub fn new(results: Vec<FileResult<T>>, elapsed_ms: u128) -> Self {
        Self { results, elapsed_ms }
    }

    pub fn total_files(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.is_success())
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failure())
    }

    pub fn successes(&self) -> impl Iterator<Item = &FileResult<T>> {
        self.results.iter().filter(|r| r.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult<T>> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Processing throughput in files per second.
    pub fn throughput(&self) -> f64 {
        if self.elapsed_ms == 0 {
            0.0
        } else {
            (self.total_files() as f64) / (self.elapsed_ms as f64 / 1000.0)
        }
    }
}

/// An operation applied to every file of a batch.
///
/// Must be `Send + Sync` so it can run on the rayon pool.
///
/// # Examples
///
/// ```rust
/// use mm_cli::batch::BatchOperation;
/// use mm_cli::error::CliError;
/// use std::path::Path;
///
/// struct CountBraces;
///
/// impl BatchOperation for CountBraces {
///     type Output = usize;
///
///     fn process_file(&self, path: &Path) -> Result<Self::Output, CliError> {
///         let content = std::fs::read_to_string(path)
///             .map_err(|e| CliError::io_error(path, e))?;
///         Ok(content.matches('{').count())
///     }
///
///     fn name(&self) -> &str {
///         "count-braces"
///     }
/// }
/// ```
pub trait BatchOperation: Send + Sync {
    /// The output type for successful processing
    type Output: Send;

    /// Process a single file.
    fn process_file(&self, path: &Path) -> Result<Self::Output, CliError>;

    /// Human-readable name used in progress reports.
    fn name(&self) -> &str;
}

/// Lock-free progress tracking shared by the worker threads.
#[derive(Debug)]
struct ProgressTracker {
    total: usize,
    processed: AtomicUsize,
    succeeded: AtomicUsize,
    failed: AtomicUsize,
    interval: usize,
    verbose: bool,
    start_time: Instant,
}

impl ProgressTracker {
    fn new(total: usize, interval: usize, verbose: bool) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            interval,
            verbose,
            start_time: Instant::now(),
        }
    }

    fn record_success(&self, path: &Path) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        self.succeeded.fetch_add(1, Ordering::Relaxed);

        if self.should_report(processed) {
            self.report_progress(path, true);
        }
    }

    fn record_failure(&self, path: &Path, error: &CliError) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        self.failed.fetch_add(1, Ordering::Relaxed);

        if self.verbose {
            eprintln!("{} {} - {}", "✗".red().bold(), path.display(), error);
        }

        if self.should_report(processed) {
            self.report_progress(path, false);
        }
    }

    fn should_report(&self, processed: usize) -> bool {
        self.interval > 0 && (processed % self.interval == 0 || processed == self.total)
    }

    fn report_progress(&self, current_file: &Path, success: bool) {
        let processed = self.processed.load(Ordering::Relaxed);
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);

        if self.verbose {
            let status = if success {
                "✓".green().bold()
            } else {
                "✗".red().bold()
            };
            eprintln!(
                "{} [{}/{}] {}",
                status,
                processed,
                self.total,
                current_file.display()
            );
        } else {
            eprintln!(
                "Progress: [{}/{}] {} succeeded, {} failed",
                processed, self.total, succeeded, failed
            );
        }
    }

    fn print_summary(&self, operation_name: &str) {
        let processed = self.processed.load(Ordering::Relaxed);
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed();

        println!();
        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "{} {}",
            "Batch Operation:".bright_blue().bold(),
            operation_name.bright_white()
        );
        println!("{}", "═".repeat(60).bright_blue());
        println!("  {} {}", "Total files:".bright_cyan(), processed);
        println!("  {} {}", "Succeeded:".green().bold(), succeeded);
        println!("  {} {}", "Failed:".red().bold(), failed);
        println!("  {} {:.2}s", "Elapsed:".bright_cyan(), elapsed.as_secs_f64());
        println!("{}", "═".repeat(60).bright_blue());
    }
}

/// Batch processor selecting serial or parallel execution by file count.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn default_config() -> Self {
        Self::new(BatchConfig::default())
    }

    /// Process every file with `operation` and collect the results.
    ///
    /// Uses rayon when `files.len() >= config.parallel_threshold`. Results
    /// keep the order of `files` either way.
    pub fn process<O>(&self, files: &[PathBuf], operation: O, show_progress: bool) -> BatchResults<O::Output>
    where
        O: BatchOperation,
    {
        let start_time = Instant::now();

        if files.is_empty() {
            return BatchResults::new(vec![], 0);
        }

        let tracker = show_progress.then(|| {
            ProgressTracker::new(files.len(), self.config.progress_interval, self.config.verbose)
        });

        let run = |path: &PathBuf| {
            let result = operation.process_file(path);
            if let Some(t) = &tracker {
                match &result {
                    Ok(_) => t.record_success(path),
                    Err(e) => t.record_failure(path, e),
                }
            }
            FileResult {
                path: path.clone(),
                result,
            }
        };

        let results: Vec<FileResult<O::Output>> = if files.len() < self.config.parallel_threshold {
            files.iter().map(run).collect()
        } else {
            files.par_iter().map(run).collect()
        };

        if let Some(tracker) = tracker {
            tracker.print_summary(operation.name());
        }

        BatchResults::new(results, start_time.elapsed().as_millis())
    }
}

// ============================================================================
// Standard Operations
// ============================================================================

/// Batch validation operation.
///
/// Compiles each file and returns its tree statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOperation;

impl BatchOperation for ValidationOperation {
    type Output = StatsCollector;

    fn process_file(&self, path: &Path) -> Result<Self::Output, CliError> {
        let name = path.display().to_string();
        let mut sink = tracing_sink(&name);
        let root = compile_file(path, &compile_options(&name), &mut sink)?;

        let mut stats = StatsCollector::default();
        traverse(&root, &mut stats).unwrap_or_else(|never| match never {});
        Ok(stats)
    }

    fn name(&self) -> &str {
        "validate"
    }
}
