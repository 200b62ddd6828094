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

//! Compile entry points for MM sources.
//!
//! A compile runs three passes over one complete in-memory text:
//!
//! ```text
//! raw text --scanner--> compressed --lines--> line sequence --builder--> Container
//! ```
//!
//! Each call owns its own [`TreeBuilder`], so separate compiles share no
//! state and may run on different threads.
//!
//! # Security Limits
//!
//! - `max_file_size`: rejects oversized sources before any work (default: 64MB)
//! - `max_nesting_depth`: bounds the open container stack (default: 256)
//! - `max_containers`: bounds the tree size, implicit containers included
//!   (default: 1M)

use crate::builder::TreeBuilder;
use crate::container::Container;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{MmError, MmResult};
use crate::lines::split_lines;
use crate::limits::Limits;
use crate::scanner::compress;
use std::fs;
use std::path::Path;

/// Options for a single compile.
///
/// ```text
/// use mm_core::CompileOptions;
///
/// let opts = CompileOptions::builder()
///     .max_nesting_depth(32)
///     .source_name("textures.mm")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Security limits.
    pub limits: Limits,
    /// Identifier used in diagnostics only.
    pub source_name: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            source_name: "<memory>".to_string(),
        }
    }
}

impl CompileOptions {
    /// Create a new builder for CompileOptions.
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of CompileOptions.
#[derive(Debug, Clone, Default)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum source size in bytes.
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.options.limits.max_file_size = size;
        self
    }

    /// Set the maximum number of simultaneously open containers.
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_nesting_depth = depth;
        self
    }

    /// Set the maximum number of containers in the tree.
    pub fn max_containers(mut self, count: usize) -> Self {
        self.options.limits.max_containers = count;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    /// Set the identifier reported in diagnostics.
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.options.source_name = name.into();
        self
    }

    /// Build the CompileOptions.
    pub fn build(self) -> CompileOptions {
        self.options
    }
}

/// Compile a source text with default options, logging through `tracing`.
pub fn compile(text: &str) -> MmResult<Container> {
    let options = CompileOptions::default();
    let mut sink = TracingSink::new(options.source_name.clone());
    compile_with(text, &options, &mut sink)
}

/// Compile a source text with explicit options and diagnostics sink.
///
/// Scanner warnings are forwarded to `sink` as they are found; the fatal
/// failure, if any, is sent to the error channel before it is returned.
pub fn compile_with(
    text: &str,
    options: &CompileOptions,
    sink: &mut dyn DiagnosticSink,
) -> MmResult<Container> {
    let result = compile_inner(text, options, sink);
    if let Err(e) = &result {
        sink.error(&format!("An error occurred: {}", e.report()));
    }
    result
}

fn compile_inner(
    text: &str,
    options: &CompileOptions,
    sink: &mut dyn DiagnosticSink,
) -> MmResult<Container> {
    if text.len() > options.limits.max_file_size {
        return Err(MmError::security(format!(
            "source too large: exceeds limit of {} bytes",
            options.limits.max_file_size
        )));
    }

    sink.message("Starting text compression.");
    let scanned = compress(text);
    for warning in &scanned.warnings {
        sink.warning(&warning.to_string());
    }
    sink.message("Finished text compression.");

    sink.message("Started converting.");
    let lines = split_lines(&scanned.compressed);
    let root = TreeBuilder::new(&options.limits, sink).build(&lines)?;
    sink.message("Finished converting.");

    Ok(root)
}

/// Read and compile a `.mm` file.
///
/// The file size is checked against `options.limits` before reading. Every
/// failure is wrapped with the file name. When `options.source_name` is
/// still the default, the file path is used in its place.
pub fn compile_file(
    path: impl AsRef<Path>,
    options: &CompileOptions,
    sink: &mut dyn DiagnosticSink,
) -> MmResult<Container> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut options = options.clone();
    if options.source_name == CompileOptions::default().source_name {
        options.source_name = path.display().to_string();
    }

    sink.message(&format!("Importing: {}.", file_name));
    read_source(path, &options.limits)
        .and_then(|text| compile_with(&text, &options, sink))
        .map_err(|e| {
            e.wrap(format!("An error occurred while importing '{}'.", file_name))
                .with_context(path.display().to_string())
        })
}

fn read_source(path: &Path, limits: &Limits) -> MmResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| MmError::io(format!("Failed to get metadata for '{}': {}", path.display(), e)))?;

    if metadata.len() > limits.max_file_size as u64 {
        return Err(MmError::security(format!(
            "file too large: {} bytes exceeds limit of {} bytes",
            metadata.len(),
            limits.max_file_size
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| MmError::io(format!("Failed to read '{}': {}", path.display(), e)))
}
