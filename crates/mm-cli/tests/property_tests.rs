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

//! Property-based tests for CLI operations using proptest.

use mm_cli::commands::{read_file, render_tree};
use mm_core::compile;
use proptest::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".mm")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn document() -> impl Strategy<Value = String> {
    let pair = ("[A-Za-z][A-Za-z0-9]{0,6}", "[A-Za-z0-9.]{1,8}");
    (
        "[A-Za-z][A-Za-z0-9]{0,6}",
        prop::collection::btree_map("[a-z]{1,6}", "[A-Za-z0-9]{1,6}", 0..5),
        prop::collection::vec(pair, 0..5),
    )
        .prop_map(|(name, values, children)| {
            let mut doc = format!("[{}]\n{{\n", name);
            for (k, v) in values {
                doc.push_str(&format!("    [{} = {}]\n", k, v));
            }
            for (child, default) in children {
                doc.push_str(&format!("    [{}:{}]\n    {{\n    }}\n", child, default));
            }
            doc.push_str("}\n");
            doc
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// read_file returns exactly what was written.
    #[test]
    fn prop_read_file_roundtrip(content in "[ -~\n]{0,256}") {
        let file = create_temp_file(&content);
        let read = read_file(file.path().to_str().unwrap()).unwrap();
        prop_assert_eq!(read, content);
    }

    /// The rendered tree has one line per container plus one per value in
    /// verbose mode.
    #[test]
    fn prop_render_tree_line_count(doc in document()) {
        let root = compile(&doc).unwrap();
        let containers = 1 + root.children.len();

        prop_assert_eq!(render_tree(&root, false).lines().count(), containers);
        prop_assert_eq!(
            render_tree(&root, true).lines().count(),
            containers + root.values.len()
        );
    }

    /// JSON export keeps every container.
    #[test]
    fn prop_json_child_count(doc in document()) {
        let root = compile(&doc).unwrap();
        let value = mm_json::to_json_value(&root, &mm_json::ToJsonConfig::default()).unwrap();
        prop_assert_eq!(value["children"].as_array().unwrap().len(), root.children.len());
    }
}
