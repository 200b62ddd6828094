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

//! Tests for the CLI command layout.

use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(name = "mm")]
#[command(author, version, about = "MM CLI")]
struct TestCli {
    #[command(subcommand)]
    command: mm_cli::cli::Commands,
}

/// Every command category is flattened to the top level.
#[test]
fn test_commands_available() {
    let cmd = TestCli::command();
    let mut subcommands: Vec<_> = cmd.get_subcommands().map(|c| c.get_name()).collect();
    subcommands.sort_unstable();

    assert_eq!(
        subcommands,
        vec!["batch-validate", "inspect", "to-json", "validate"]
    );
}

/// The command definitions pass clap's own consistency checks.
#[test]
fn test_command_debug_assert() {
    TestCli::command().debug_assert();
}

#[test]
fn test_parse_to_json_flags() {
    let cli = TestCli::try_parse_from(["mm", "to-json", "a.mm", "-o", "a.json", "--compact", "--prune"]);
    assert!(cli.is_ok());
}

#[test]
fn test_batch_validate_requires_files() {
    let cli = TestCli::try_parse_from(["mm", "batch-validate"]);
    assert!(cli.is_err());
}

#[test]
fn test_unknown_command_rejected() {
    let cli = TestCli::try_parse_from(["mm", "format", "a.mm"]);
    assert!(cli.is_err());
}
