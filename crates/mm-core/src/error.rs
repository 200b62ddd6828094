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

//! Error types for MM compilation.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during compilation.
///
/// The kind is decided where a failure originates and survives every
/// [`MmError::wrap`] layer added on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmErrorKind {
    /// Malformed attribute syntax (missing separator, name or value).
    Syntax,
    /// Brace or header structure violation.
    Structure,
    /// Attribute name declared twice in one container.
    Duplicate,
    /// A required name, attribute or default is absent.
    MissingParameter,
    /// A value that could not be converted to the requested type.
    InvalidParameter,
    /// Security limit exceeded.
    Security,
    /// I/O error (file operations).
    IO,
}

impl fmt::Display for MmErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Structure => write!(f, "StructureError"),
            Self::Duplicate => write!(f, "DuplicateError"),
            Self::MissingParameter => write!(f, "MissingParameterError"),
            Self::InvalidParameter => write!(f, "InvalidParameterError"),
            Self::Security => write!(f, "SecurityError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// An error that occurred during MM compilation.
///
/// Errors form a chain: each layer of the compiler wraps the failure it
/// received with its own message, so the outermost error reads like a
/// stack of "while doing X" statements ending in the original cause.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {}", join_chain(.message, .cause))]
pub struct MmError {
    /// The kind of the innermost failure.
    pub kind: MmErrorKind,
    /// Human-readable message for this layer.
    pub message: String,
    /// The offending source text for this layer (line, header or attribute group).
    pub context: Option<String>,
    /// The failure this layer wraps.
    #[source]
    pub cause: Option<Box<MmError>>,
}

fn join_chain(message: &str, cause: &Option<Box<MmError>>) -> String {
    let mut out = message.to_string();
    let mut next = cause.as_deref();
    while let Some(err) = next {
        out.push_str(" -> ");
        out.push_str(&err.message);
        next = err.cause.as_deref();
    }
    out
}

impl MmError {
    /// Create a new error.
    pub fn new(kind: MmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
            cause: None,
        }
    }

    /// Add the source text this error refers to.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Wrap this error in a new layer carrying `message`.
    ///
    /// The new layer keeps the kind of `self`.
    pub fn wrap(self, message: impl Into<String>) -> Self {
        Self {
            kind: self.kind,
            message: message.into(),
            context: None,
            cause: Some(Box::new(self)),
        }
    }

    /// Annotate this error with the name of the container it occurred in.
    pub fn in_container(self, container: &str) -> Self {
        self.wrap(format!(
            "An error occurred while processing container: {}!",
            container
        ))
        .with_context(container)
    }

    /// Iterate over every layer, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &MmError> {
        std::iter::successors(Some(self), |err| err.cause.as_deref())
    }

    /// The innermost error of the chain.
    pub fn root_cause(&self) -> &MmError {
        self.chain().last().unwrap_or(self)
    }

    /// Render the chain with one message per line, indenting causes.
    pub fn report(&self) -> String {
        let mut out = format!("{}", self.kind);
        for (depth, err) in self.chain().enumerate() {
            out.push('\n');
            out.push_str(&"  ".repeat(depth + 1));
            out.push_str(&err.message);
        }
        out
    }

    // Convenience constructors for each error kind
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(MmErrorKind::Syntax, message)
    }

    pub fn structure(message: impl Into<String>) -> Self {
        Self::new(MmErrorKind::Structure, message)
    }

    pub fn duplicate(name: &str) -> Self {
        Self::new(
            MmErrorKind::Duplicate,
            format!("Attribute with the name '{}' has already been added.", name),
        )
        .with_context(name)
    }

    pub fn missing_parameter(parameter: &str) -> Self {
        Self::new(
            MmErrorKind::MissingParameter,
            format!("Could not find parameter: '{}'!", parameter),
        )
        .with_context(parameter)
    }

    pub fn invalid_parameter(parameter: &str, value: &str, type_name: &str) -> Self {
        Self::new(
            MmErrorKind::InvalidParameter,
            format!(
                "Could not process parameter '{}' to {}. Value='{}'!",
                parameter, type_name, value
            ),
        )
        .with_context(parameter)
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::new(MmErrorKind::Security, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(MmErrorKind::IO, message)
    }
}

/// Result type for MM operations.
pub type MmResult<T> = Result<T, MmError>;
