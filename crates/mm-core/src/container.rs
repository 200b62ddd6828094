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

//! Container tree produced by the compiler.

use crate::error::{MmError, MmResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Name reported when a required default value is missing.
pub const DEFAULT_VALUE_NAME: &str = "<<DEFAULT>>";

/// A named node holding raw string attributes and child containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Container {
    /// The container name (from its header).
    pub name: String,
    /// The default value declared in the header, if any.
    #[cfg_attr(feature = "serde", serde(rename = "default", skip_serializing_if = "Option::is_none"))]
    pub default_value: Option<String>,
    /// Raw attribute values.
    pub values: Values,
    /// Child containers in document order.
    pub children: Vec<Container>,
}

impl Container {
    /// Create an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a container with a default value.
    pub fn with_default(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: Some(default_value.into()),
            ..Self::default()
        }
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Whether a non-empty default value is set.
    pub fn has_default(&self) -> bool {
        self.default_value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// True when the container has no name, or neither values nor children.
    pub fn is_useless(&self) -> bool {
        self.name.trim().is_empty() || (self.values.is_empty() && self.children.is_empty())
    }

    /// Look up a raw value, ignoring case.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Remove and return a raw value, ignoring case.
    pub fn take_value(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// First child with the given name, ignoring case.
    pub fn child(&self, name: &str) -> Option<&Container> {
        self.children.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Every child with the given name, ignoring case, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Container> + 'a {
        self.children
            .iter()
            .filter(move |c| c.name.eq_ignore_ascii_case(name))
    }

    /// Append a child container.
    pub fn add_child(&mut self, child: Container) {
        self.children.push(child);
    }

    /// The container name, failing when it is blank.
    pub fn require_name(&self) -> MmResult<&str> {
        if self.name.trim().is_empty() {
            Err(MmError::missing_parameter("Container name"))
        } else {
            Ok(&self.name)
        }
    }

    /// A raw value, failing when it is absent or blank.
    pub fn require_value(&self, name: &str) -> MmResult<&str> {
        match self.value(name) {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(MmError::missing_parameter(name)),
        }
    }

    /// A value parsed with [`FromStr`], failing when absent or unparsable.
    ///
    /// ```
    /// let root = mm_core::compile("[Tile]{[Width=16]}").unwrap();
    /// let width: u32 = root.parse_value("width").unwrap();
    /// assert_eq!(width, 16);
    /// ```
    pub fn parse_value<T: FromStr>(&self, name: &str) -> MmResult<T> {
        let raw = self.require_value(name)?;
        raw.trim()
            .parse()
            .map_err(|_| MmError::invalid_parameter(name, raw, short_type_name::<T>()))
    }

    /// The default value, failing when none is set.
    pub fn require_default(&self) -> MmResult<&str> {
        match self.default_value.as_deref() {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(MmError::missing_parameter(DEFAULT_VALUE_NAME)),
        }
    }

    /// The default value parsed with [`FromStr`].
    pub fn parse_default<T: FromStr>(&self) -> MmResult<T> {
        let raw = self.require_default()?;
        raw.trim()
            .parse()
            .map_err(|_| MmError::invalid_parameter(DEFAULT_VALUE_NAME, raw, short_type_name::<T>()))
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name={}, NumValues={}, NumChilds={}",
            self.name,
            self.values.len(),
            self.children.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    value: String,
}

/// Attribute map with case-insensitive keys.
///
/// The spelling of a name is kept as first inserted. Iteration is ordered by
/// the lower-cased name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: BTreeMap<String, Entry>,
}

#[inline]
fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&fold(name))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&fold(name)).map(|e| e.value.as_str())
    }

    /// Insert a new entry, failing if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> MmResult<()> {
        let name = name.into();
        let key = fold(&name);
        if self.entries.contains_key(&key) {
            return Err(MmError::duplicate(&name));
        }
        self.entries.insert(
            key,
            Entry {
                name,
                value: value.into(),
            },
        );
        Ok(())
    }

    /// Insert or overwrite an entry, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.get_mut(&fold(&name)) {
            Some(entry) => Some(std::mem::replace(&mut entry.value, value)),
            None => {
                self.entries.insert(fold(&name), Entry { name, value });
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(&fold(name)).map(|e| e.value)
    }

    /// Iterate `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|e| (e.name.as_str(), e.value.as_str()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Values {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
