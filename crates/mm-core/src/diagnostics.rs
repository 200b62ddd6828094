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

//! Diagnostic sinks for compiler progress, warnings and failures.
//!
//! The compiler never prints. It reports through a [`DiagnosticSink`] that the
//! caller injects, which keeps compilation pure with respect to its input
//! text. [`TracingSink`] is what [`crate::compile`] uses when the caller does
//! not care.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational progress message.
    Message,
    /// Recoverable problem; compilation continues.
    Warning,
    /// Fatal failure; compilation aborts.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => write!(f, "message"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Receiver for the three diagnostic channels.
///
/// Every method defaults to doing nothing, so implementors only override the
/// channels they care about.
pub trait DiagnosticSink {
    /// Informational progress message.
    fn message(&mut self, _message: &str) {}

    /// Non-fatal warning.
    fn warning(&mut self, _message: &str) {}

    /// Fatal failure, reported right before the compile returns `Err`.
    fn error(&mut self, _message: &str) {}
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {}

/// Sink that forwards to `tracing`, tagging every event with the source name.
#[derive(Debug, Clone)]
pub struct TracingSink {
    source: String,
}

impl TracingSink {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new("<memory>")
    }
}

impl DiagnosticSink for TracingSink {
    fn message(&mut self, message: &str) {
        tracing::debug!(source = %self.source, "{}", message);
    }

    fn warning(&mut self, message: &str) {
        tracing::warn!(source = %self.source, "{}", message);
    }

    fn error(&mut self, message: &str) {
        tracing::error!(source = %self.source, "{}", message);
    }
}

/// Sink that records every diagnostic in order.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of the given severity, in emission order.
    pub fn of(&self, severity: Severity) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.as_str())
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.of(Severity::Warning)
    }

    fn push(&mut self, severity: Severity, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity,
            message: message.to_string(),
        });
    }
}

impl DiagnosticSink for CollectingSink {
    fn message(&mut self, message: &str) {
        self.push(Severity::Message, message);
    }

    fn warning(&mut self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.push(Severity::Error, message);
    }
}

type Callback<'a> = Box<dyn FnMut(&str) + 'a>;

/// Sink built from up to three independent callbacks.
///
/// A channel without a callback is silent.
#[derive(Default)]
pub struct CallbackSink<'a> {
    on_message: Option<Callback<'a>>,
    on_warning: Option<Callback<'a>>,
    on_error: Option<Callback<'a>>,
}

impl<'a> CallbackSink<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_message(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.on_message = Some(Box::new(f));
        self
    }

    pub fn on_warning(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.on_warning = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for CallbackSink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink")
            .field("on_message", &self.on_message.is_some())
            .field("on_warning", &self.on_warning.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

impl DiagnosticSink for CallbackSink<'_> {
    fn message(&mut self, message: &str) {
        if let Some(f) = self.on_message.as_mut() {
            f(message);
        }
    }

    fn warning(&mut self, message: &str) {
        if let Some(f) = self.on_warning.as_mut() {
            f(message);
        }
    }

    fn error(&mut self, message: &str) {
        if let Some(f) = self.on_error.as_mut() {
            f(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order_and_severity() {
        let mut sink = CollectingSink::new();
        sink.message("one");
        sink.warning("two");
        sink.error("three");
        sink.message("four");

        assert_eq!(sink.diagnostics.len(), 4);
        assert_eq!(sink.of(Severity::Message), vec!["one", "four"]);
        assert_eq!(sink.warnings(), vec!["two"]);
        assert_eq!(sink.of(Severity::Error), vec!["three"]);
    }

    #[test]
    fn test_callback_sink_routes_channels() {
        let mut messages = Vec::new();
        let mut warnings = Vec::new();
        {
            let mut sink = CallbackSink::new()
                .on_message(|m| messages.push(m.to_string()))
                .on_warning(|m| warnings.push(m.to_string()));
            sink.message("progress");
            sink.warning("careful");
            sink.error("ignored: no error callback");
        }
        assert_eq!(messages, vec!["progress"]);
        assert_eq!(warnings, vec!["careful"]);
    }

    #[test]
    fn test_silent_sink_accepts_everything() {
        let mut sink = SilentSink;
        sink.message("a");
        sink.warning("b");
        sink.error("c");
    }

    #[test]
    fn test_severity_display_and_order() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert!(Severity::Message < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_callback_sink_debug() {
        let sink = CallbackSink::new().on_error(|_| {});
        let debug = format!("{:?}", sink);
        assert!(debug.contains("on_error: true"));
        assert!(debug.contains("on_message: false"));
    }
}
