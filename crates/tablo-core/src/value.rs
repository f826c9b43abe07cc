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

//! Cell element types for tablo tables.

use std::fmt;

/// A scalar element in a table cell.
///
/// All numeric literals (integer, float, hexadecimal, scientific) collapse
/// into [`Element::Number`]; the source spelling is not retained.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// Quoted string value.
    String(String),
    /// Numeric value (integer, float, hex, scientific).
    Number(f64),
    /// Boolean value (true/false).
    Boolean(bool),
    /// Null value (-).
    Null,
}

impl Element {
    /// Returns true if this element is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the element as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the element as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the element as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Render the element as plain text for export surfaces (HTML cells,
    /// CSV fields): strings unquoted, null empty.
    pub fn to_plain_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Boolean(b) => b.to_string(),
            Self::Null => String::new(),
        }
    }
}

impl fmt::Display for Element {
    /// Renders the element in document syntax: strings quoted and escaped,
    /// null as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Null => write!(f, "-"),
        }
    }
}

/// Format a number in its minimal document form: integral values without a
/// fraction part, everything else in shortest float notation.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Escape a string body so the string lexeme can read it back: the named
/// escapes for `"`, `\`, and the control characters the format names; all
/// other characters pass through.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{0C}' => out.push_str("\\f"),
            '\u{08}' => out.push_str("\\b"),
            _ => out.push(c),
        }
    }
    out
}
