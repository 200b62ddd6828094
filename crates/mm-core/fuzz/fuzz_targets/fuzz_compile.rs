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

#![no_main]

//! Fuzz target for the MM compiler.
//!
//! Runs arbitrary input through the whole pipeline: compression, line
//! reconstruction, attribute parsing and tree building. The compiler must
//! return `Err` for malformed input and never panic.
//!
//! ```bash
//! cargo fuzz run fuzz_compile
//! cargo fuzz run fuzz_compile -- -max_len=100000 -max_total_time=300
//! ```

use libfuzzer_sys::fuzz_target;
use mm_core::lines::split_lines;
use mm_core::scanner::compress;
use mm_core::{compile_with, CollectingSink, CompileOptions, Severity};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let scanned = compress(&text);
    for line in split_lines(&scanned.compressed) {
        assert!(!line.is_empty());
    }

    let mut sink = CollectingSink::new();
    if compile_with(&text, &CompileOptions::default(), &mut sink).is_err() {
        assert!(!sink.of(Severity::Error).is_empty());
    }
    assert!(sink.warnings().len() >= scanned.warnings.len());
});
