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

//! Lexical analysis for tablo documents.
//!
//! Every matcher here is an engine rule (`fn(&Source, usize) -> RuleResult`)
//! over a single terminal. Matchers consume their lexeme plus trailing
//! horizontal whitespace (never newlines), return descriptive mismatches
//! without consuming anything, and produce one of three value shapes:
//!
//! - [`Token`] markers for punctuation,
//! - [`crate::Element`] scalars for string/number/boolean/null literals,
//! - raw text for versions, style tags, and cell range selectors.

mod literals;
mod scan;
mod selector;
mod tokens;

pub use literals::{boolean, float, hexadecimal, integer, null, number, scientific, string};
pub use selector::{cell_range, tag, version, STYLE_TAGS};
pub use tokens::{close_brace, comma, equals, newline, open_brace, star, tilde, Token};
