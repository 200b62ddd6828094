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

//! Batch processing commands for MM.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Batch processing commands.
///
/// These commands operate on multiple MM files. Small sets are processed
/// serially; `--parallel` spreads the work over the rayon thread pool.
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Batch validate multiple MM files
    ///
    /// Compiles every file, prints a summary and fails when any file fails.
    BatchValidate {
        /// Input file paths
        #[arg(value_name = "FILES", num_args = 1.., required = true)]
        files: Vec<String>,

        /// Force parallel processing
        #[arg(short, long)]
        parallel: bool,

        /// Show verbose progress
        #[arg(short, long)]
        verbose: bool,
    },
}

impl BatchCommands {
    /// Execute the batch command.
    ///
    /// # Errors
    ///
    /// Returns `Err` when any file fails validation.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            BatchCommands::BatchValidate {
                files,
                parallel,
                verbose,
            } => commands::batch_validate(files, parallel, verbose),
        }
    }
}
