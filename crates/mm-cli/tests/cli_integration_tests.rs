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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

const LEVEL: &str = r#"
/* First level */
[Level:one]
{
    [Music = "theme one.ogg"]
    [Spawn]
    {
        [Enemy = slime, Count = 4]
        [Enemy = bat, Hp = 2]
    }
    [Exit] { [Target = two] }
}
"#;

// Test helper to create an MM command
fn mm_cmd() -> Command {
    Command::cargo_bin("mm").expect("Failed to find mm binary")
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    mm_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MM - container markup toolkit"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    mm_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mm"));
}

#[test]
fn test_no_subcommand_fails() {
    mm_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(LEVEL, ".mm");

    mm_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Root: Level"))
        .stdout(predicate::str::contains("Containers: 5"))
        .stdout(predicate::str::contains("Values: 4"))
        .stdout(predicate::str::contains("Max depth: 2"));
}

#[test]
fn test_validate_unbalanced_braces() {
    let file = create_temp_file("[Root]{[A=1]}}", ".mm");

    mm_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Error: Compile error: StructureError"))
        .stderr(predicate::str::contains("No container to close"));
}

#[test]
fn test_validate_error_names_line() {
    let file = create_temp_file("[Root]{[Key=1][Bad'Name=2][Tail=3]}", ".mm");

    mm_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("processing line '[Key=1][Bad'Name=2]'"));
}

#[test]
fn test_validate_missing_file() {
    mm_cmd()
        .arg("validate")
        .arg("/nonexistent/level.mm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_validate_file_size_limit() {
    let file = create_temp_file(LEVEL, ".mm");

    mm_cmd()
        .env("MM_MAX_FILE_SIZE", "16")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too large"));
}

#[test]
fn test_validate_unclosed_container() {
    let file = create_temp_file("[Root]{}[Trailing=1]{", ".mm");

    mm_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unclosed container 'Trailing'"));
}

#[test]
fn test_validate_warning_logged() {
    let file = create_temp_file("[Root]{[A=1\u{7}]}", ".mm");

    mm_cmd()
        .env_remove("RUST_LOG")
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("is not valid and has been skipped!"));
}

#[test]
fn test_validate_debug_logs_progress() {
    let file = create_temp_file("[Root]{}", ".mm");

    mm_cmd()
        .env_remove("RUST_LOG")
        .arg("--debug")
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting text compression."))
        .stderr(predicate::str::contains("Finished converting."));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_tree() {
    let file = create_temp_file(LEVEL, ".mm");

    mm_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Level:one] (1 value)"))
        .stdout(predicate::str::contains("  [Spawn]"))
        .stdout(predicate::str::contains("    [Enemy:slime] (1 value)"))
        .stdout(predicate::str::contains("Music").not());
}

#[test]
fn test_inspect_verbose() {
    let file = create_temp_file(LEVEL, ".mm");

    mm_cmd()
        .arg("inspect")
        .arg(file.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Music = \"theme one.ogg\""))
        .stdout(predicate::str::contains("Target = \"two\""));
}

// ===== To-JSON Command Tests =====

#[test]
fn test_to_json_stdout() {
    let file = create_temp_file(LEVEL, ".mm");

    let output = mm_cmd()
        .arg("to-json")
        .arg(file.path())
        .output()
        .expect("Failed to run mm");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Level");
    assert_eq!(value["default"], "one");
    assert_eq!(value["values"]["Music"], "theme one.ogg");
    assert_eq!(value["children"][0]["children"][1]["default"], "bat");
    assert_eq!(value["children"][1]["values"]["Target"], "two");
}

#[test]
fn test_to_json_compact_to_file() {
    let file = create_temp_file("[Root]{}", ".mm");
    let out = NamedTempFile::new().unwrap();

    mm_cmd()
        .arg("to-json")
        .arg(file.path())
        .arg("--compact")
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let written = fs::read_to_string(out.path()).unwrap();
    assert_eq!(written, "{\"children\":[],\"name\":\"Root\",\"values\":{}}\n");
}

#[test]
fn test_to_json_prune() {
    let file = create_temp_file("[Root]{[Empty]{}[Full]{[A=1]}}", ".mm");

    let output = mm_cmd()
        .arg("to-json")
        .arg(file.path())
        .arg("--prune")
        .output()
        .expect("Failed to run mm");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let children = value["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["name"], "Full");
}

#[test]
fn test_to_json_invalid_input() {
    let file = create_temp_file("{}", ".mm");

    mm_cmd()
        .arg("to-json")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No header found for container!"));
}
