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

//! MM Command Line Interface

use clap::Parser;
use mm_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// MM - container markup toolkit
///
/// Validates, inspects and converts `.mm` container files.
///
/// # Examples
///
/// ```bash
/// # Validate an MM file
/// mm validate level.mm
///
/// # Print the container tree with every value
/// mm inspect level.mm --verbose
///
/// # Convert to compact JSON
/// mm to-json level.mm --compact -o level.json
///
/// # Validate many files in parallel
/// mm batch-validate content/*.mm --parallel
/// ```
#[derive(Parser)]
#[command(name = "mm")]
#[command(author, version, about = "MM - container markup toolkit", long_about = None)]
struct Cli {
    /// Log compiler progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(debug: bool) {
    let fallback = if debug { "mm_core=debug,mm_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
