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

//! CLI command implementations

mod batch_commands;
mod convert;
mod inspect;
mod validate;

pub use batch_commands::batch_validate;
pub use convert::to_json;
pub use inspect::{inspect, render_tree};
pub use validate::validate;

use crate::error::CliError;
use mm_core::{compile_with, CallbackSink, CompileOptions, Container};
use std::fs;
use std::io::{self, Write};

/// Default maximum file size to prevent OOM attacks (64 MB)
/// Can be overridden via MM_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Get the maximum file size from environment or use default.
///
/// Falls back to [`DEFAULT_MAX_FILE_SIZE`] if `MM_MAX_FILE_SIZE` is not set
/// or does not parse.
pub fn max_file_size() -> u64 {
    std::env::var("MM_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Compiler options used by every command.
///
/// The source name is the file path and the file size limit follows
/// [`max_file_size`].
pub fn compile_options(file: &str) -> CompileOptions {
    CompileOptions::builder()
        .max_file_size(usize::try_from(max_file_size()).unwrap_or(usize::MAX))
        .source_name(file)
        .build()
}

/// Sink forwarding compiler progress and warnings to `tracing`.
///
/// The error channel stays silent; commands report failures through
/// [`CliError`].
pub fn tracing_sink(file: &str) -> CallbackSink<'_> {
    CallbackSink::new()
        .on_message(move |m| tracing::debug!(file, "{}", m))
        .on_warning(move |m| tracing::warn!(file, "{}", m))
}

/// Read a file from disk with size validation.
///
/// Files larger than [`max_file_size`] are rejected before reading.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the maximum allowed size
/// - The file cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use mm_cli::commands::read_file;
///
/// # fn main() -> Result<(), mm_cli::error::CliError> {
/// let content = read_file("level.mm")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Read and compile a file, logging diagnostics through `tracing`.
pub fn compile_path(file: &str) -> Result<Container, CliError> {
    let content = read_file(file)?;
    let mut sink = tracing_sink(file);
    let root = compile_with(&content, &compile_options(file), &mut sink)?;
    Ok(root)
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if writing to the file or to stdout fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[Root]{}").unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(read_file(path).unwrap(), "[Root]{}");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/definitely/not/here.mm").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_compile_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[Root:r]{[A=1]}").unwrap();

        let root = compile_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(root.default_value(), Some("r"));
        assert_eq!(root.value("a"), Some("1"));
    }

    #[test]
    fn test_compile_path_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[Root]{}}").unwrap();

        let err = compile_path(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Compile(_)));
    }

    #[test]
    fn test_write_output_to_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        write_output("{}", Some(path)).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn test_compile_options_use_file_name() {
        let options = compile_options("level.mm");
        assert_eq!(options.source_name, "level.mm");
    }
}
