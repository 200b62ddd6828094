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

//! Validate command - MM file compilation check

use super::compile_path;
use crate::error::CliError;
use colored::Colorize;
use mm_core::{traverse, StatsCollector};

/// Validate an MM file for syntax and structural correctness.
///
/// Compiles the file and prints a summary.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or does not compile.
///
/// # Examples
///
/// ```no_run
/// use mm_cli::commands::validate;
///
/// # fn main() -> Result<(), mm_cli::error::CliError> {
/// validate("level.mm")?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints the validation status (✓ or ✗) followed by:
/// - Root container name
/// - Number of containers, root included
/// - Number of attribute values
/// - Maximum nesting depth
pub fn validate(file: &str) -> Result<(), CliError> {
    let root = match compile_path(file) {
        Ok(root) => root,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e);
        }
    };

    let mut stats = StatsCollector::default();
    traverse(&root, &mut stats).unwrap_or_else(|never| match never {});

    println!("{} {}", "✓".green().bold(), file);
    println!("  Root: {}", root.name);
    println!("  Containers: {}", stats.container_count);
    println!("  Values: {}", stats.value_count);
    println!("  Max depth: {}", stats.max_depth);
    Ok(())
}
