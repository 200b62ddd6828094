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

//! Format conversion commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Format conversion commands.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert an MM file to JSON
    ///
    /// Every container becomes an object with `name`, `default`, `values`
    /// and `children` keys.
    ToJson {
        /// Input MM file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Compact JSON (no whitespace)
        #[arg(short, long)]
        compact: bool,

        /// Drop containers that have no values and no children
        #[arg(long)]
        prune: bool,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading, compiling, converting or writing fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToJson {
                file,
                output,
                compact,
                prune,
            } => commands::to_json(&file, output.as_deref(), compact, prune),
        }
    }
}
