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

//! Container tree traversal for serializers and analysis.
//!
//! Consumers implement [`ContainerVisitor`] and let [`traverse`] handle the
//! recursion. Containers are visited depth first in document order; within a
//! container, values are visited before children.
//!
//! ```text
//! use mm_core::traverse::{traverse, StatsCollector};
//!
//! let root = mm_core::compile("[Root]{[A=1]}")?;
//! let mut stats = StatsCollector::default();
//! traverse(&root, &mut stats)?;
//! assert_eq!(stats.value_count, 1);
//! ```

use crate::Container;

/// Context provided to visitors during traversal.
#[derive(Debug, Clone, Default)]
pub struct VisitorContext<'a> {
    /// Current nesting depth (0 = root).
    pub depth: usize,
    /// Names of the enclosing containers, root first, excluding the current one.
    pub path: Vec<&'a str>,
}

impl<'a> VisitorContext<'a> {
    /// Create a context for the root level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child context with incremented depth.
    pub fn child(&self, name: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(name);
        Self {
            depth: self.depth + 1,
            path,
        }
    }

    /// Get the current path as a string (for error messages).
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path.join(".")
        }
    }
}

/// Trait for visiting the containers of a tree.
///
/// All methods have default implementations that do nothing.
pub trait ContainerVisitor {
    /// Error type returned by visitor methods.
    type Error;

    /// Called before a container's values and children.
    fn begin_container(&mut self, _container: &Container, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for each value of the current container.
    fn visit_value(&mut self, _name: &str, _value: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after a container's values and children.
    fn end_container(&mut self, _container: &Container, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Traverse a container tree, calling visitor methods for each element.
pub fn traverse<V: ContainerVisitor>(root: &Container, visitor: &mut V) -> Result<(), V::Error> {
    traverse_container(root, visitor, &VisitorContext::new())
}

fn traverse_container<'a, V: ContainerVisitor>(
    container: &'a Container,
    visitor: &mut V,
    ctx: &VisitorContext<'a>,
) -> Result<(), V::Error> {
    visitor.begin_container(container, ctx)?;

    let inner = ctx.child(&container.name);
    for (name, value) in container.values.iter() {
        visitor.visit_value(name, value, &inner)?;
    }
    for child in &container.children {
        traverse_container(child, visitor, &inner)?;
    }

    visitor.end_container(container, ctx)?;
    Ok(())
}

/// Statistics collector visitor for testing and analysis.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsCollector {
    /// Number of containers visited, root included.
    pub container_count: usize,
    /// Number of values visited.
    pub value_count: usize,
    /// Number of containers with a default value.
    pub default_count: usize,
    /// Number of containers for which `is_useless` holds.
    pub useless_count: usize,
    /// Maximum container depth reached.
    pub max_depth: usize,
}

impl ContainerVisitor for StatsCollector {
    type Error = std::convert::Infallible;

    fn begin_container(&mut self, container: &Container, ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.container_count += 1;
        if container.has_default() {
            self.default_count += 1;
        }
        if container.is_useless() {
            self.useless_count += 1;
        }
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }

    fn visit_value(&mut self, _name: &str, _value: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.value_count += 1;
        Ok(())
    }
}
