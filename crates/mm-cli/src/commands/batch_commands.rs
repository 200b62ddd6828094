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

//! Batch command implementations - Process multiple MM files

use crate::batch::{BatchConfig, BatchProcessor, ValidationOperation};
use crate::error::CliError;
use colored::Colorize;
use std::path::PathBuf;

/// Batch validate multiple MM files.
///
/// # Arguments
///
/// * `files` - List of file paths to validate
/// * `parallel` - If `true`, processes files on the rayon thread pool
/// * `verbose` - If `true`, shows per-file progress
///
/// # Errors
///
/// Returns [`CliError::BatchFailed`] if any file cannot be read or does not
/// compile; every failure is listed on stderr first.
///
/// # Examples
///
/// ```no_run
/// use mm_cli::commands::batch_validate;
///
/// # fn main() -> Result<(), mm_cli::error::CliError> {
/// let files = vec!["a.mm".to_string(), "b.mm".to_string()];
/// batch_validate(files, true, false)?;
/// # Ok(())
/// # }
/// ```
pub fn batch_validate(files: Vec<String>, parallel: bool, verbose: bool) -> Result<(), CliError> {
    if files.is_empty() {
        return Err(CliError::invalid_input("no files given"));
    }
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

    let config = BatchConfig {
        parallel_threshold: if parallel { 1 } else { usize::MAX },
        verbose,
        ..Default::default()
    };

    let processor = BatchProcessor::new(config);
    let results = processor.process(&paths, ValidationOperation, true);

    if results.has_failures() {
        eprintln!();
        eprintln!("{}", "Validation failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} {}", "✗".red(), failure.path.display());
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(CliError::BatchFailed {
            failed: results.failure_count(),
            total: results.total_files(),
        });
    }

    Ok(())
}
