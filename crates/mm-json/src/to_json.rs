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

//! Container tree to JSON conversion

use mm_core::Container;
use serde_json::{Map, Value as JsonValue};

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Drop children for which `Container::is_useless` holds
    pub prune_useless: bool,
    /// Keep empty `values` and `children` keys (default: true)
    pub include_empty: bool,
    /// Pretty-print the string output (default: true)
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            prune_useless: false,
            include_empty: true,
            pretty: true,
        }
    }
}

/// Convert a container tree to a JSON string
pub fn to_json(root: &Container, config: &ToJsonConfig) -> Result<String, String> {
    let value = to_json_value(root, config)?;
    let out = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    out.map_err(|e| format!("JSON serialization error: {}", e))
}

/// Convert a container tree to serde_json::Value
pub fn to_json_value(root: &Container, config: &ToJsonConfig) -> Result<JsonValue, String> {
    Ok(container_to_json(root, config))
}

fn container_to_json(container: &Container, config: &ToJsonConfig) -> JsonValue {
    let mut map = Map::with_capacity(4);
    map.insert("name".to_string(), JsonValue::String(container.name.clone()));

    if let Some(default) = &container.default_value {
        map.insert("default".to_string(), JsonValue::String(default.clone()));
    }

    if config.include_empty || !container.values.is_empty() {
        map.insert("values".to_string(), values_to_json(container));
    }

    let children: Vec<JsonValue> = container
        .children
        .iter()
        .filter(|child| !(config.prune_useless && child.is_useless()))
        .map(|child| container_to_json(child, config))
        .collect();
    if config.include_empty || !children.is_empty() {
        map.insert("children".to_string(), JsonValue::Array(children));
    }

    JsonValue::Object(map)
}

fn values_to_json(container: &Container) -> JsonValue {
    let mut map = Map::with_capacity(container.values.len());
    for (name, value) in container.values.iter() {
        map.insert(name.to_string(), JsonValue::String(value.to_string()));
    }
    JsonValue::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Container {
        let mut root = Container::new("Textures");
        root.values.insert("Path", "gfx/").unwrap();
        root.add_child(Container::with_default("Texture", "grass"));
        let mut stone = Container::with_default("Texture", "stone");
        stone.values.insert("Size", "32").unwrap();
        root.add_child(stone);
        root
    }

    // ==================== ToJsonConfig tests ====================

    #[test]
    fn test_to_json_config_default() {
        let config = ToJsonConfig::default();
        assert!(!config.prune_useless);
        assert!(config.include_empty);
        assert!(config.pretty);
    }

    // ==================== container_to_json tests ====================

    #[test]
    fn test_container_to_json_minimal() {
        let value = container_to_json(&Container::new("Root"), &ToJsonConfig::default());
        assert_eq!(value, json!({"name": "Root", "values": {}, "children": []}));
    }

    #[test]
    fn test_container_to_json_default_present() {
        let value = container_to_json(&Container::with_default("Foo", "bar"), &ToJsonConfig::default());
        assert_eq!(value["default"], "bar");
    }

    #[test]
    fn test_container_to_json_nested() {
        let value = container_to_json(&sample(), &ToJsonConfig::default());
        assert_eq!(
            value,
            json!({
                "name": "Textures",
                "values": {"Path": "gfx/"},
                "children": [
                    {"name": "Texture", "default": "grass", "values": {}, "children": []},
                    {"name": "Texture", "default": "stone", "values": {"Size": "32"}, "children": []}
                ]
            })
        );
    }

    #[test]
    fn test_container_to_json_omit_empty() {
        let config = ToJsonConfig {
            include_empty: false,
            ..Default::default()
        };
        let value = container_to_json(&sample(), &config);
        assert_eq!(value["children"][0], json!({"name": "Texture", "default": "grass"}));
        assert!(value["children"][1].get("children").is_none());
        assert_eq!(value["children"][1]["values"]["Size"], "32");
    }

    #[test]
    fn test_container_to_json_prune_useless() {
        let config = ToJsonConfig {
            prune_useless: true,
            ..Default::default()
        };
        let value = container_to_json(&sample(), &config);
        let children = value["children"].as_array().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["default"], "stone");
    }

    // ==================== to_json tests ====================

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&Container::new("Root"), &ToJsonConfig::default()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"name\": \"Root\""));
    }

    #[test]
    fn test_to_json_compact() {
        let config = ToJsonConfig {
            pretty: false,
            ..Default::default()
        };
        let json = to_json(&Container::new("Root"), &config).unwrap();
        assert_eq!(json, r#"{"children":[],"name":"Root","values":{}}"#);
    }
}
