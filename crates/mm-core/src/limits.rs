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

//! Security limits for MM compilation.

/// Configurable limits for compiler security.
///
/// These limits bound the resources a single compile may consume, so that a
/// hostile or corrupt `.mm` file cannot exhaust memory or blow the stack of
/// code that later walks the tree recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum source size in bytes (default: 64MB).
    pub max_file_size: usize,
    /// Maximum number of simultaneously open containers (default: 256).
    pub max_nesting_depth: usize,
    /// Maximum number of containers in one tree, implicit ones included (default: 1M).
    pub max_containers: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 64 * 1024 * 1024, // 64MB
            max_nesting_depth: 256,
            max_containers: 1_000_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_nesting_depth: usize::MAX,
            max_containers: usize::MAX,
        }
    }
}
