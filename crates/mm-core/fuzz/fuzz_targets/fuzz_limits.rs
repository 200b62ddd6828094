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

//! Fuzz target for limit enforcement.
//!
//! Compiles arbitrary input under tight and degenerate limits. Limit
//! violations must surface as `Security` errors.
//!
//! ```bash
//! cargo fuzz run fuzz_limits -- -rss_limit_mb=512
//! ```

use libfuzzer_sys::fuzz_target;
use mm_core::{compile_with, CompileOptions, Limits, MmErrorKind, SilentSink};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let presets = [
        Limits {
            max_file_size: 1024,
            max_nesting_depth: 3,
            max_containers: 10,
        },
        Limits {
            max_file_size: 0,
            max_nesting_depth: 0,
            max_containers: 0,
        },
        Limits {
            max_file_size: 1,
            max_nesting_depth: 1,
            max_containers: 1,
        },
    ];

    for limits in presets {
        let options = CompileOptions::builder().limits(limits).build();
        if let Err(err) = compile_with(text, &options, &mut SilentSink) {
            if err.to_string().contains("limit is") {
                assert_eq!(err.kind, MmErrorKind::Security);
            }
        }
    }
});
