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

//! Inspect command - MM container tree visualization

use super::compile_path;
use crate::error::CliError;
use colored::Colorize;
use mm_core::{traverse, Container, ContainerVisitor, VisitorContext};
use std::convert::Infallible;

/// Inspect and visualize the compiled container tree of an MM file.
///
/// # Arguments
///
/// * `file` - Path to the MM file to inspect
/// * `verbose` - If `true`, lists every attribute value under its container
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or does not compile.
///
/// # Examples
///
/// ```no_run
/// use mm_cli::commands::inspect;
///
/// # fn main() -> Result<(), mm_cli::error::CliError> {
/// inspect("level.mm", true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, verbose: bool) -> Result<(), CliError> {
    let root = compile_path(file)?;

    println!("{}", "MM Container Tree".bold().underline());
    println!();
    print!("{}", render_tree(&root, verbose));
    Ok(())
}

/// Render a container tree as indented plain text.
///
/// One line per container, `[Name:default] (n values)`, indented two spaces
/// per level. With `verbose`, each value follows its container as
/// `name = "value"`.
pub fn render_tree(root: &Container, verbose: bool) -> String {
    let mut printer = TreePrinter {
        out: String::new(),
        verbose,
    };
    traverse(root, &mut printer).unwrap_or_else(|never| match never {});
    printer.out
}

struct TreePrinter {
    out: String,
    verbose: bool,
}

impl ContainerVisitor for TreePrinter {
    type Error = Infallible;

    fn begin_container(&mut self, container: &Container, ctx: &VisitorContext) -> Result<(), Infallible> {
        self.out.push_str(&"  ".repeat(ctx.depth));
        match container.default_value() {
            Some(default) => self.out.push_str(&format!("[{}:{}]", container.name, default)),
            None => self.out.push_str(&format!("[{}]", container.name)),
        }
        match container.values.len() {
            0 => {}
            1 => self.out.push_str(" (1 value)"),
            n => self.out.push_str(&format!(" ({} values)", n)),
        }
        self.out.push('\n');
        Ok(())
    }

    fn visit_value(&mut self, name: &str, value: &str, ctx: &VisitorContext) -> Result<(), Infallible> {
        if self.verbose {
            self.out
                .push_str(&format!("{}{} = \"{}\"\n", "  ".repeat(ctx.depth), name, value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::compile;

    #[test]
    fn test_render_tree_plain() {
        let root = compile("[Level:one]{[Music=a][Spawn]{[Enemy=slime,Hp=2]}}").unwrap();
        assert_eq!(
            render_tree(&root, false),
            "[Level:one] (1 value)\n  [Spawn]\n    [Enemy:slime] (1 value)\n"
        );
    }

    #[test]
    fn test_render_tree_verbose() {
        let root = compile("[Level]{[Music=a][Exit]{[Target=two]}}").unwrap();
        assert_eq!(
            render_tree(&root, true),
            "[Level] (1 value)\n  Music = \"a\"\n  [Exit] (1 value)\n    Target = \"two\"\n"
        );
    }
}
