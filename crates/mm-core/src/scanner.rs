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

//! Character-level compression of raw MM source.
//!
//! The scanner makes a single pass over the source with one character of
//! lookahead and produces the "compressed" text the line reconstructor works
//! on:
//!
//! - characters outside printable ASCII are dropped, and all of them except
//!   `\n`, `\t` and `\r` are reported as [`ScanWarning`]s
//! - spaces are dropped unless inside a `"` quoted segment
//! - `"` toggles the quoted state and is never copied
//! - `/* ... */` block comments are removed
//!
//! The comment detection reruns the `/*` test even while already inside a
//! comment, and the quote and space rules apply inside comments too. Existing
//! `.mm` files depend on that exact behavior, so it is kept as is.

use std::fmt;

/// Result of compressing a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// The source without insignificant whitespace, comments and quotes.
    pub compressed: String,
    /// Non-fatal problems found while scanning.
    pub warnings: Vec<ScanWarning>,
}

/// A recoverable problem found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// A control or non-ASCII character that was dropped.
    InvalidCharacter {
        character: char,
        /// Low byte of the character's code point.
        code: u8,
        /// Byte offset in the source text.
        offset: usize,
    },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                character, code, ..
            } => write!(
                f,
                "Character {}({}) is not valid and has been skipped!",
                character.escape_default(),
                code
            ),
        }
    }
}

#[inline]
fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

#[inline]
fn is_allowed_control(c: char) -> bool {
    matches!(c, '\n' | '\t' | '\r')
}

/// Compress raw source text.
pub fn compress(text: &str) -> ScanOutput {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut compressed = String::with_capacity(text.len());
    let mut warnings = Vec::new();

    let mut quoted = false;
    let mut comment = false;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        if !is_printable(c) {
            if !is_allowed_control(c) {
                warnings.push(ScanWarning::InvalidCharacter {
                    character: c,
                    code: (u32::from(c) & 0xFF) as u8,
                    offset,
                });
            }
            i += 1;
            continue;
        }

        if c == ' ' && !quoted {
            i += 1;
            continue;
        }
        if c == '"' {
            quoted = !quoted;
            i += 1;
            continue;
        }

        // `/*` opens a comment; the lookahead `*` is consumed with it.
        if c == '/' && peek(&chars, i) == Some('*') {
            comment = true;
            i += 1;
        }

        if !comment {
            compressed.push(c);
        } else if c == '*' && peek(&chars, i) == Some('/') {
            comment = false;
            i += 1;
        }

        i += 1;
    }

    ScanOutput {
        compressed,
        warnings,
    }
}

#[inline]
fn peek(chars: &[(usize, char)], i: usize) -> Option<char> {
    chars.get(i + 1).map(|&(_, c)| c)
}
