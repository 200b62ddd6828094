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

//! Logical line reconstruction over compressed source.

use memchr::{memchr2_iter, memchr_iter, memrchr};

/// Split compressed text into logical lines.
///
/// `{` and `}` always form their own single-character line. Text between
/// braces becomes one body line. When a body line holds two or more `[`, the
/// part from the last `[` onward is split off as a separate header line, so
/// an attribute line may sit directly against the header of the container
/// that follows it. Text after the last brace is not terminated by anything
/// and is dropped.
pub fn split_lines(compressed: &str) -> Vec<&str> {
    let bytes = compressed.as_bytes();
    let mut lines = Vec::with_capacity(memchr2_iter(b'{', b'}', bytes).count() * 2);
    let mut start = 0;

    for pos in memchr2_iter(b'{', b'}', bytes) {
        let body = &compressed[start..pos];
        if !body.is_empty() {
            match split_header(body) {
                Some((rest, header)) => {
                    lines.push(rest);
                    lines.push(header);
                }
                None => lines.push(body),
            }
        }
        lines.push(&compressed[pos..pos + 1]);
        start = pos + 1;
    }

    lines
}

/// Split off the trailing bracket group of a line holding at least two.
fn split_header(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    if memchr_iter(b'[', bytes).nth(1).is_none() {
        return None;
    }
    let last = memrchr(b'[', bytes)?;
    Some(line.split_at(last))
}
