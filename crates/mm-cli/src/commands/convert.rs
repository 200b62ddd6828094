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

//! Convert commands - MM to JSON export

use super::{compile_path, write_output};
use crate::error::CliError;
use mm_json::ToJsonConfig;

/// Convert an MM file to JSON.
///
/// # Arguments
///
/// * `file` - Path to the MM file
/// * `output` - Optional output path; stdout when `None`
/// * `compact` - Emit JSON without whitespace
/// * `prune` - Drop containers with neither values nor children
///
/// # Errors
///
/// Returns `Err` if the file does not compile or the output cannot be
/// written.
///
/// # Examples
///
/// ```no_run
/// use mm_cli::commands::to_json;
///
/// # fn main() -> Result<(), mm_cli::error::CliError> {
/// to_json("level.mm", Some("level.json"), false, false)?;
/// to_json("level.mm", None, true, true)?;
/// # Ok(())
/// # }
/// ```
pub fn to_json(file: &str, output: Option<&str>, compact: bool, prune: bool) -> Result<(), CliError> {
    let root = compile_path(file)?;

    let config = ToJsonConfig {
        prune_useless: prune,
        pretty: !compact,
        ..ToJsonConfig::default()
    };

    let mut json = mm_json::to_json(&root, &config).map_err(CliError::json_conversion)?;
    json.push('\n');
    write_output(&json, output)
}
