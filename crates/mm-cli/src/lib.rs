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

//! MM CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Validation & Inspection
//!
//! - **validate**: Compile an `.mm` file and report container and value counts
//! - **inspect**: Print the compiled container tree
//!
//! ## Format Conversion
//!
//! - **to-json**: Export the container tree as JSON (pretty or compact)
//!
//! ## Batch Processing
//!
//! - **batch-validate**: Validate multiple files, optionally in parallel
//!
//! # Examples
//!
//! ```no_run
//! use mm_cli::commands::{to_json, validate};
//!
//! # fn main() -> Result<(), mm_cli::error::CliError> {
//! validate("level.mm")?;
//! to_json("level.mm", Some("level.json"), false, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Compiler progress and warnings go through `tracing`. The binary installs a
//! `tracing-subscriber` writing to stderr; `--debug` or `RUST_LOG` raise the
//! level.
//!
//! # Security
//!
//! Input files are size-checked before reading. The limit defaults to 64 MB
//! and can be changed with the `MM_MAX_FILE_SIZE` environment variable.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
