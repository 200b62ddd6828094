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

//! Example demonstrating custom limits and diagnostic sinks.
//!
//! Shows how to tighten the compiler limits for untrusted input and how to
//! collect diagnostics instead of logging them.

use mm_core::{compile_with, CollectingSink, CompileOptions, Limits, MmErrorKind};

const SPRITES: &str = r#"
[Sheet:characters]
{
    [Image = "sheets/characters.png"]
    [Sprite:hero, X = 0, Y = 0, W = 32, H = 48]
    [Sprite:slime, X = 32, Y = 0, W = 16, H = 16]
    [Animation:walk]
    {
        [Frames = 4]
        [Loop = true]
    }
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("MM Custom Limits Example\n");

    println!("1. Default limits:");
    let defaults = Limits::default();
    println!("   max_file_size: {} bytes", defaults.max_file_size);
    println!("   max_nesting_depth: {}", defaults.max_nesting_depth);
    println!("   max_containers: {}\n", defaults.max_containers);

    println!("2. Compiling with default limits:");
    let mut sink = CollectingSink::new();
    let root = compile_with(SPRITES, &CompileOptions::default(), &mut sink)?;
    println!("   {}", root);
    for sprite in root.children_named("sprite") {
        println!(
            "   sprite {} at {},{}",
            sprite.require_default()?,
            sprite.require_value("x")?,
            sprite.require_value("y")?
        );
    }
    println!("   {} diagnostics recorded\n", sink.diagnostics.len());

    println!("3. Compiling with a container budget of 2:");
    let tight = CompileOptions::builder()
        .max_containers(2)
        .source_name("sprites.mm")
        .build();
    match compile_with(SPRITES, &tight, &mut CollectingSink::new()) {
        Ok(_) => println!("   unexpectedly succeeded"),
        Err(e) if e.kind == MmErrorKind::Security => println!("   rejected: {}", e.root_cause().message),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
