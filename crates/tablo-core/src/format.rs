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

//! Cell range decoding and format rule resolution.
//!
//! A format rule pairs a selector (`A1:B2`, `A:C`, `0:9`, `D4`, a bare
//! column, or a bare row) with a list of style tags. Selectors decode into
//! inclusive bounding boxes; resolution scans all rules in declaration
//! order and concatenates the tags of every box containing the cell, so
//! overlapping rules accumulate rather than override.

/// Convert bijective base-26 column letters to a 0-based column index:
/// `A → 0`, `Z → 25`, `AA → 26`.
///
/// Returns `None` for an empty string, non-uppercase input, or an index
/// that overflows `u32`.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        value = value
            .checked_mul(26)?
            .checked_add(c as u32 - 'A' as u32 + 1)?;
    }
    Some(value - 1)
}

/// Convert a 0-based column index to its bijective base-26 letters: the
/// exact inverse of [`column_index`].
pub fn column_label(index: u32) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(index) + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// Inclusive cell rectangle addressed by 0-based row and column indices.
///
/// `u32::MAX` on a `*_max` bound means the box is open on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub row_min: u32,
    pub row_max: u32,
    pub col_min: u32,
    pub col_max: u32,
}

impl BoundingBox {
    /// Open upper bound marker.
    pub const UNBOUNDED: u32 = u32::MAX;

    pub fn new(row_min: u32, row_max: u32, col_min: u32, col_max: u32) -> Self {
        Self {
            row_min,
            row_max,
            col_min,
            col_max,
        }
    }

    /// Decode a selector into its bounding box.
    ///
    /// Columns or column ranges leave the row axis open; rows or row ranges
    /// leave the column axis open; a single cell is a 1x1 box. Returns
    /// `None` for malformed text, numeric overflow, or an inverted box
    /// (`min > max` on either axis) — such selectors are silently inert.
    pub fn decode(selector: &str) -> Option<Self> {
        let decoded = match selector.split_once(':') {
            Some((left, right)) => {
                if let (Some((lc, lr)), Some((rc, rr))) = (parse_cell(left), parse_cell(right)) {
                    Self::new(lr, rr, lc, rc)
                } else if let (Some(lc), Some(rc)) = (parse_col(left), parse_col(right)) {
                    Self::new(0, Self::UNBOUNDED, lc, rc)
                } else if let (Some(lr), Some(rr)) = (parse_row(left), parse_row(right)) {
                    Self::new(lr, rr, 0, Self::UNBOUNDED)
                } else {
                    return None;
                }
            }
            None => {
                if let Some((col, row)) = parse_cell(selector) {
                    Self::new(row, row, col, col)
                } else if let Some(col) = parse_col(selector) {
                    Self::new(0, Self::UNBOUNDED, col, col)
                } else if let Some(row) = parse_row(selector) {
                    Self::new(row, row, 0, Self::UNBOUNDED)
                } else {
                    return None;
                }
            }
        };
        if decoded.row_min <= decoded.row_max && decoded.col_min <= decoded.col_max {
            Some(decoded)
        } else {
            None
        }
    }

    /// Does the box contain the 0-based cell address?
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.row_min && row <= self.row_max && col >= self.col_min && col <= self.col_max
    }

    /// True when the box contains no cells. Never true for a box produced
    /// by [`BoundingBox::decode`], which rejects inverted selectors.
    pub fn is_empty(&self) -> bool {
        self.row_min > self.row_max || self.col_min > self.col_max
    }
}

/// `(column, row)` of a `B2`-style reference.
fn parse_cell(s: &str) -> Option<(u32, u32)> {
    let letters_end = s
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(s.len());
    if letters_end == 0 || letters_end == s.len() {
        return None;
    }
    let (letters, digits) = s.split_at(letters_end);
    Some((column_index(letters)?, parse_row(digits)?))
}

fn parse_col(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    column_index(s)
}

fn parse_row(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// One format rule: the selector as written, its decoded box, and the
/// style tags it applies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatRule {
    pub selector: String,
    pub bounds: BoundingBox,
    pub tags: Vec<String>,
}

/// Ordered collection of format rules.
///
/// Declaration order is preserved and duplicate selectors are kept as
/// separate rules; resolution is cumulative across every matching rule.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatRuleSet {
    rules: Vec<FormatRule>,
}

impl FormatRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `selector` and append a rule. Returns `false` (storing
    /// nothing) when the selector is malformed or its box is inverted.
    pub fn push(&mut self, selector: impl Into<String>, tags: Vec<String>) -> bool {
        let selector = selector.into();
        match BoundingBox::decode(&selector) {
            Some(bounds) => {
                self.rules.push(FormatRule {
                    selector,
                    bounds,
                    tags,
                });
                true
            }
            None => false,
        }
    }

    /// Collect the tags of every rule whose box contains the cell, in
    /// declaration order, duplicates retained.
    pub fn resolve(&self, row: u32, col: u32) -> Vec<String> {
        let mut tags = Vec::new();
        for rule in &self.rules {
            if rule.bounds.contains(row, col) {
                tags.extend(rule.tags.iter().cloned());
            }
        }
        tags
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormatRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a FormatRuleSet {
    type Item = &'a FormatRule;
    type IntoIter = std::slice::Iter<'a, FormatRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
