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

//! CLI command definitions and argument parsing.
//!
//! Commands are organized into the following modules:
//!
//! - [`core`]: Core commands (validate, inspect)
//! - [`conversion`]: Format conversion commands (to-json)
//! - [`batch`]: Batch processing commands (batch-validate)

mod batch;
mod conversion;
mod core;

use crate::error::CliError;
use clap::Subcommand;

pub use batch::BatchCommands;
pub use conversion::ConversionCommands;
pub use core::CoreCommands;

/// Top-level CLI commands enum.
///
/// Each variant is a category of related commands, flattened so that every
/// command appears at the top level:
///
/// ```text
/// Commands
/// ├── Core (validate, inspect)
/// ├── Conversion (to-json)
/// └── Batch (batch-validate)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use mm_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Conversion commands - flattened to appear at top level
    #[command(flatten)]
    Conversion(ConversionCommands),

    // Batch commands - flattened to appear at top level
    #[command(flatten)]
    Batch(BatchCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails, the file does not compile, or the
    /// conversion fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Conversion(cmd) => cmd.execute(),
            Commands::Batch(cmd) => cmd.execute(),
        }
    }
}
