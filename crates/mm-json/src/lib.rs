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

//! MM JSON Conversion
//!
//! Exports a compiled container tree as JSON. Every container becomes an
//! object of the form
//!
//! ```text
//! {"name": "...", "default": "...", "values": {...}, "children": [...]}
//! ```
//!
//! where `default` is omitted when the container has none.
//!
//! # Examples
//!
//! ```rust
//! use mm_json::{container_to_json, to_json_value, ToJsonConfig};
//!
//! let root = mm_core::compile("[Tile:grass]{[Solid=false]}").unwrap();
//!
//! let value = to_json_value(&root, &ToJsonConfig::default()).unwrap();
//! assert_eq!(value["default"], "grass");
//! assert_eq!(value["values"]["Solid"], "false");
//!
//! let json = container_to_json(&root).unwrap();
//! assert!(json.contains("\"name\": \"Tile\""));
//! ```

mod to_json;

pub use to_json::{to_json, to_json_value, ToJsonConfig};

use mm_core::Container;

/// Convert a container tree to a pretty JSON string with default settings.
pub fn container_to_json(root: &Container) -> Result<String, String> {
    to_json(root, &ToJsonConfig::default())
}
