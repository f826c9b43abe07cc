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

//! Tablo HTML Rendering
//!
//! Renders parsed tablo tables as HTML `<table>` fragments.
//!
//! # Features
//!
//! - Header labels become a `<thead>` row
//! - Each table section becomes its own `<tbody>`
//! - Format rules are resolved per cell into `class` attributes
//! - Every `<td>` carries its column letters as `data-col-index`
//! - Configurable output (pretty print, indentation, table class)
//! - Implements [`RenderStrategy`](tablo_core::RenderStrategy), so HTML
//!   can be plugged anywhere canonical text rendering is accepted
//!
//! # Examples
//!
//! ```rust
//! use tablo_core::parse;
//! use tablo_html::{to_html, ToHtmlConfig};
//!
//! let table = parse("\"id\", \"name\"\n=0.1\n1, \"ada\"\n*\nA {bold}\n").unwrap();
//! let html = to_html(&table, &ToHtmlConfig::default()).unwrap();
//!
//! assert!(html.contains("<th>id</th>"));
//! assert!(html.contains("class=\"bold\""));
//! ```

mod error;
mod to_html;

pub use error::HtmlError;
pub use to_html::{to_html, HtmlRenderer, ToHtmlConfig};

use tablo_core::Table;

/// Convert a table to HTML with the default configuration.
pub fn table_to_html(table: &Table) -> Result<String, HtmlError> {
    to_html(table, &ToHtmlConfig::default())
}
