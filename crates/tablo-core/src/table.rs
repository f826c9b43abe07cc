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

//! The parsed document model.

use std::collections::BTreeSet;

use crate::format::FormatRuleSet;
use crate::value::Element;

/// A header entry: `Some` for a quoted label, `None` for the `-`
/// placeholder.
pub type Label = Option<String>;

/// One data row. Rows may be ragged; no width is enforced.
pub type Row = Vec<Element>;

/// A parsed document: header labels, data rows, section break positions,
/// and format rules.
///
/// `section_breaks` holds the row indices at which a `~` separator
/// occurred; a break at `i` splits the data before `rows[i]`. Breaks are
/// kept as a set, so separators that enclose no rows collapse into a
/// single break. Values are strictly increasing and never exceed
/// `rows.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub(crate) header: Vec<Label>,
    pub(crate) rows: Vec<Row>,
    pub(crate) section_breaks: BTreeSet<usize>,
    pub(crate) format: FormatRuleSet,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(header: Vec<Label>) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Append a data row after all existing rows.
    pub fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Record a section break after all rows appended so far. Appending a
    /// break twice in a row is a no-op: breaks form a set.
    pub fn append_break(&mut self) {
        self.section_breaks.insert(self.rows.len());
    }

    pub fn header(&self) -> &[Label] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn section_breaks(&self) -> &BTreeSet<usize> {
        &self.section_breaks
    }

    pub fn format(&self) -> &FormatRuleSet {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut FormatRuleSet {
        &mut self.format
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Element> {
        self.rows.get(row)?.get(col)
    }

    /// Iterate the cells of one column in row order. Rows too short to
    /// reach the column are skipped; nothing is synthesized for them.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Element> + '_ {
        self.rows.iter().filter_map(move |row| row.get(col))
    }

    /// Split `rows` at the section breaks. `n` breaks yield `n + 1`
    /// sections; sections may be empty (a break at `0` or at
    /// `rows.len()`).
    pub fn sections(&self) -> Vec<&[Row]> {
        let mut sections = Vec::with_capacity(self.section_breaks.len() + 1);
        let mut start = 0;
        for &brk in &self.section_breaks {
            sections.push(&self.rows[start..brk]);
            start = brk;
        }
        sections.push(&self.rows[start..]);
        sections
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
