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

//! Compiler and container tree model for the MM container format.
//!
//! An `.mm` source describes a tree of named containers carrying raw string
//! attributes:
//!
//! ```text
//! [Textures:default, Path = "gfx/tiles"]
//! {
//!     /* one attribute per group, or several in one line */
//!     [Width = 32][Height = 32]
//!
//!     [Tile = grass, Id = 1]      /* implicit leaf container */
//!     [Animated]
//!     {
//!         [Frames = 4]
//!     }
//! }
//! ```
//!
//! Compilation runs three passes:
//!
//! - [`scanner`]: strips insignificant whitespace, quotes and comments
//! - [`lines`]: splits the compressed text into header, body and brace lines
//! - [`builder`]: builds the tree with an explicit stack of open containers,
//!   using the [`attribute`] grammar for bracketed groups
//!
//! Values are never interpreted; typed access belongs to callers.

pub mod attribute;
pub mod builder;
mod compiler;
mod container;
pub mod diagnostics;
mod error;
mod limits;
pub mod lines;
pub mod scanner;
pub mod traverse;

pub use attribute::{parse_group, Attribute};
pub use compiler::{compile, compile_file, compile_with, CompileOptions, CompileOptionsBuilder};
pub use container::{Container, Values, DEFAULT_VALUE_NAME};
pub use diagnostics::{
    CallbackSink, CollectingSink, Diagnostic, DiagnosticSink, Severity, SilentSink, TracingSink,
};
pub use error::{MmError, MmErrorKind, MmResult};
pub use limits::Limits;
pub use traverse::{traverse, ContainerVisitor, StatsCollector, VisitorContext};
