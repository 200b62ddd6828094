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

//! Stack-based tree builder over reconstructed lines.
//!
//! The builder walks the line sequence once, keeping the open containers on
//! an explicit stack:
//!
//! - `{` reads the previous line as a header and opens a container
//! - `}` closes the innermost open container
//! - a line directly before `{` is left for that brace to consume
//! - any other line holds body attributes for the innermost container
//!
//! The first container opened at depth zero is the root itself. A second
//! depth-zero container overwrites the root's name, default and values while
//! the children already attached stay in place.

use crate::attribute::{parse_group, Attribute};
use crate::container::Container;
use crate::diagnostics::DiagnosticSink;
use crate::error::{MmError, MmResult};
use crate::limits::Limits;

/// Builds one container tree. Not reusable: [`TreeBuilder::build`] consumes it.
pub struct TreeBuilder<'a> {
    root: Container,
    /// Open containers, innermost last. Children are attached to their
    /// parent when they close.
    stack: Vec<Container>,
    limits: &'a Limits,
    sink: &'a mut dyn DiagnosticSink,
    created: usize,
    skip: bool,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(limits: &'a Limits, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            root: Container::default(),
            stack: Vec::new(),
            limits,
            sink,
            created: 0,
            skip: false,
        }
    }

    /// Consume the line sequence and return the root container.
    pub fn build(mut self, lines: &[&str]) -> MmResult<Container> {
        for (index, line) in lines.iter().enumerate() {
            self.process_line(lines, index).map_err(|e| {
                e.wrap(format!("An error occurred while processing line '{}'", line))
                    .with_context(*line)
            })?;
        }

        if let Some(open) = self.stack.last() {
            return Err(MmError::structure(format!("Unclosed container '{}'", open.name))
                .with_context(open.name.clone()));
        }

        Ok(self.root)
    }

    fn process_line(&mut self, lines: &[&str], index: usize) -> MmResult<()> {
        let line = lines[index];
        match line {
            "{" => {
                self.skip = false;
                self.start_container(lines, index)
            }
            "}" => {
                self.skip = false;
                self.end_container()
            }
            _ => match lines.get(index + 1) {
                Some(next) if *next != "{" => self.process_attributes(line),
                _ => {
                    // Header for the next brace, or a trailing line. Only one
                    // may be deferred between brace lines.
                    if self.skip {
                        self.sink.warning(&format!("Skipped line '{}'!", line));
                    }
                    self.skip = true;
                    Ok(())
                }
            },
        }
    }

    fn start_container(&mut self, lines: &[&str], index: usize) -> MmResult<()> {
        if index == 0 {
            return Err(MmError::structure("No header found for container!"));
        }

        let header = lines[index - 1];
        parse_group(header, true)
            .and_then(|attributes| self.open(attributes))
            .map_err(|e| header_error(e, header))
    }

    fn end_container(&mut self) -> MmResult<()> {
        let closed = self
            .stack
            .pop()
            .ok_or_else(|| MmError::structure("No container to close"))?;

        match self.stack.last_mut() {
            Some(parent) => parent.add_child(closed),
            None => self.root = closed,
        }
        Ok(())
    }

    /// Open a container from header attributes and push it.
    fn open(&mut self, attributes: Vec<Attribute>) -> MmResult<()> {
        let mut attributes = attributes.into_iter();
        let first = attributes
            .next()
            .ok_or_else(|| MmError::structure("Header declares no container name"))?;

        let mut container = Container::new(first.name);
        if !first.value.is_empty() {
            container.default_value = Some(first.value);
        }
        for attr in attributes {
            container.values.insert(attr.name, attr.value)?;
        }

        if self.stack.len() >= self.limits.max_nesting_depth {
            return Err(MmError::security(format!(
                "maximum nesting depth exceeded: limit is {}",
                self.limits.max_nesting_depth
            )));
        }
        self.created += 1;
        if self.created > self.limits.max_containers {
            return Err(MmError::security(format!(
                "too many containers: limit is {}",
                self.limits.max_containers
            )));
        }

        if self.stack.is_empty() {
            let mut root = std::mem::take(&mut self.root);
            root.name = container.name;
            root.default_value = container.default_value;
            root.values = container.values;
            self.stack.push(root);
        } else {
            self.stack.push(container);
        }
        Ok(())
    }

    /// Handle a body line: one or more `[...]` groups.
    fn process_attributes(&mut self, line: &str) -> MmResult<()> {
        for part in line.split('[').filter(|part| !part.is_empty()) {
            let group = format!("[{}", part);
            let mut attributes = parse_group(&group, false)?;

            if attributes.len() > 1 {
                // Implicit leaf container, as if written `[...]{}`.
                self.open(attributes).map_err(|e| header_error(e, &group))?;
                self.end_container()?;
            } else if let Some(attr) = attributes.pop() {
                let top = self.stack.last_mut().ok_or_else(|| {
                    MmError::structure("No open container for attribute").with_context(group.clone())
                })?;
                top.values.insert(attr.name, attr.value)?;
            }
        }
        Ok(())
    }
}

fn header_error(err: MmError, header: &str) -> MmError {
    err.wrap(format!(
        "An error occurred while starting a container with the header '{}'",
        header
    ))
    .with_context(header)
}
