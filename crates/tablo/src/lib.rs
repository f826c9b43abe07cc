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

//! # Tablo - line-oriented tabular text format
//!
//! Tablo is a small text format for tables: an optional header line of
//! quoted labels, a version line, comma-separated data rows with `~`
//! section breaks, and an optional block of cell format rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablo::{parse, to_text, Element};
//!
//! let doc = "\"id\", \"name\"\n=0.1\n1, \"ada\"\n2, \"grace\"\n*\nA {bold}\n";
//!
//! // Parse the document
//! let table = parse(doc).expect("failed to parse");
//! assert_eq!(table.cell(1, 1), Some(&Element::String("grace".to_string())));
//!
//! // Render back to canonical text
//! let text = to_text(&table).unwrap();
//! assert_eq!(parse(&text).unwrap(), table);
//! ```
//!
//! ## Features
//!
//! - **Typed elements**: strings, numbers (integer, float, hex,
//!   scientific), booleans, null
//! - **Section breaks**: `~` lines split rows into sections
//! - **Format rules**: spreadsheet-style selectors (`A`, `B2:D20`, `0:9`)
//!   attaching style tags to cells
//! - **Pluggable rendering**: [`RenderStrategy`] implementations for
//!   canonical text, HTML, and CSV
//! - **Resource limits**: input size, row, and rule caps for untrusted
//!   input
//!
//! ## Modules
//!
//! - [`lex`]: raw-text matchers for literals, tokens, and selectors
//! - [`combinator`]: the backtracking rule engine the grammar is built on
//!
//! ### Optional Renderers (feature-gated)
//!
//! - `html`: HTML `<table>` rendering (feature = "html")
//! - `csv`: CSV export (feature = "csv")

// Re-export core types
pub use tablo_core::{
    // Functions
    parse,
    parse_with_options,
    render,
    // Data model
    Element,
    Label,
    Row,
    Table,
    // Format rules
    column_index,
    column_label,
    BoundingBox,
    FormatRule,
    FormatRuleSet,
    // Errors
    ErrorKind,
    Result,
    TabloError,
    // Parser configuration
    Limits,
    ParseOptions,
    ParseOptionsBuilder,
    FORMAT_VERSION,
    // Rendering
    RenderStrategy,
    TabloRenderer,
};

// Re-export lexer utilities
pub mod lex {
    //! Raw-text matchers over document source
    pub use tablo_core::lex::{
        boolean, cell_range, close_brace, comma, equals, float, hexadecimal, integer, newline,
        null, number, open_brace, scientific, star, string, tag, tilde, version, Token, STYLE_TAGS,
    };
}

// Re-export the rule engine
pub mod combinator {
    //! Backtracking rule combinators
    pub use tablo_core::combinator::{
        altern, concat, repeat, Mismatch, ParseValue, Progress, Rule, RuleResult, Source,
    };
}

// Optional renderers

/// HTML rendering utilities (requires `html` feature)
#[cfg(feature = "html")]
pub mod html {
    pub use tablo_html::{table_to_html, to_html, HtmlError, HtmlRenderer, ToHtmlConfig};
}

/// CSV export utilities (requires `csv` feature)
#[cfg(feature = "csv")]
pub mod csv {
    pub use tablo_csv::{table_to_csv, to_csv, to_csv_writer, CsvError, CsvRenderer, ToCsvConfig};
}

// Convenience functions at crate root

/// Render a table to canonical document text.
///
/// The output parses back to an equal [`Table`].
///
/// # Examples
///
/// ```rust
/// use tablo::{parse, to_text};
///
/// let table = parse("=0.1\n1,2\n").unwrap();
/// assert_eq!(to_text(&table).unwrap(), "=0.1\n1, 2\n");
/// ```
#[inline]
pub fn to_text(table: &Table) -> Result<String> {
    TabloRenderer::new().render(table)
}

/// Validate a tablo string without keeping the table.
///
/// Returns `Ok(())` if valid, `Err` with details if invalid.
#[inline]
pub fn validate(input: &str) -> Result<()> {
    parse(input).map(|_| ())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
