// Tablo - line-oriented tabular text format
//
// Copyright (c) 2025 The tablo project contributors.
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

//! Core parser and data model for the tablo format.
//!
//! Tablo is a line-oriented text format for small tables: an optional
//! header line of quoted labels, a version line, comma-separated data rows
//! with `~` lines marking section breaks, and an optional `*` block of
//! cell format rules:
//!
//! ```text
//! "id","name"
//! =0.1
//! 1,"ada"
//! 2,"grace"
//! ~
//! 3,"edsger"
//! *
//! A {bold}
//! B2:D20 {red,mono}
//! ```
//!
//! [`parse`] turns a document into a [`Table`]; [`TabloRenderer`] turns a
//! table back into canonical text losslessly. The grammar is built from
//! the backtracking engine in [`combinator`] over the matchers in [`lex`],
//! both public for reuse. Parsing is a pure function of the input and the
//! [`ParseOptions`] (resource [`Limits`] included), so tables and parses
//! are freely shareable across threads.

pub mod combinator;
mod error;
mod format;
pub mod lex;
mod limits;
mod parser;
mod render;
mod table;
mod value;

pub use error::{ErrorKind, Result, TabloError};
pub use format::{column_index, column_label, BoundingBox, FormatRule, FormatRuleSet};
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder, FORMAT_VERSION};
pub use render::{render, RenderStrategy, TabloRenderer};
pub use table::{Label, Row, Table};
pub use value::Element;

// Re-export the token type alongside the root API; everything else in the
// engine lives under `combinator` and `lex`.
pub use lex::Token;
