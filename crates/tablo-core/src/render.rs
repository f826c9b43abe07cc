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

//! Rendering tables back to text.
//!
//! [`RenderStrategy`] is the seam output formats plug into; the default
//! [`TabloRenderer`] emits canonical document text whose parse
//! reconstructs the table exactly, section breaks and format rules
//! included.

use crate::error::Result;
use crate::parser::FORMAT_VERSION;
use crate::table::Table;
use crate::value::escape_string;

/// An output format for a parsed table.
pub trait RenderStrategy {
    fn render(&self, table: &Table) -> Result<String>;
}

/// Render `table` with the given strategy.
pub fn render(table: &Table, strategy: &dyn RenderStrategy) -> Result<String> {
    strategy.render(table)
}

/// The canonical document renderer.
///
/// Output layout: the header line when any labels exist (`None` as `-`,
/// `Some` quoted with escapes), the version line, each row with `", "`
/// between cells, a `~` line at every section break, and a trailing `*`
/// block when format rules exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabloRenderer;

impl TabloRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_text(&self, table: &Table) -> String {
        let mut out = String::new();

        if !table.header().is_empty() {
            let labels: Vec<String> = table
                .header()
                .iter()
                .map(|label| match label {
                    Some(text) => format!("\"{}\"", escape_string(text)),
                    None => "-".to_string(),
                })
                .collect();
            out.push_str(&labels.join(", "));
            out.push('\n');
        }

        out.push('=');
        out.push_str(FORMAT_VERSION);
        out.push('\n');

        let breaks = table.section_breaks();
        for (index, row) in table.rows().iter().enumerate() {
            if breaks.contains(&index) {
                out.push_str("~\n");
            }
            let cells: Vec<String> = row.iter().map(|element| element.to_string()).collect();
            out.push_str(&cells.join(", "));
            out.push('\n');
        }
        if breaks.contains(&table.rows().len()) {
            out.push_str("~\n");
        }

        if !table.format().is_empty() {
            out.push_str("*\n");
            for rule in table.format() {
                out.push_str(&rule.selector);
                out.push_str(" {");
                out.push_str(&rule.tags.join(","));
                out.push_str("}\n");
            }
        }

        out
    }
}

impl RenderStrategy for TabloRenderer {
    fn render(&self, table: &Table) -> Result<String> {
        Ok(self.render_text(table))
    }
}
