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

//! Core MM commands for validation and inspection.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Core MM commands.
///
/// # Commands
///
/// - **Validate**: Compile a file and report whether it is well formed
/// - **Inspect**: Print the compiled container tree
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate an MM file
    ///
    /// Compiles the file and prints the number of containers and values it
    /// holds. Fails when the file does not compile.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the compiled container tree
    ///
    /// Shows every container with its default value. In verbose mode every
    /// attribute value is listed as well.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Show attribute values
        #[arg(short, long)]
        verbose: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file } => commands::validate(&file),
            CoreCommands::Inspect { file, verbose } => commands::inspect(&file, verbose),
        }
    }
}
