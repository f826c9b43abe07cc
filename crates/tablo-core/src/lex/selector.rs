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

//! Raw-text matchers for the header version, format style tags, and cell
//! range selectors.
//!
//! All three produce [`ParseValue::Text`]: the version is checked against
//! the accepted constant by the grammar, and selectors are decoded into
//! bounding boxes only when format rules are assembled.

use super::scan::{scan_digits, scan_uppercase, skip_inline_ws};
use crate::combinator::{Mismatch, ParseValue, Progress, RuleResult, Source};

/// The fixed style vocabulary accepted inside a format rule's braces.
pub const STYLE_TAGS: &[&str] = &[
    "plain",
    "bold",
    "italic",
    "underline",
    "strike",
    "normal",
    "mono",
    "black",
    "red",
    "orange",
    "yellow",
    "green",
    "blue",
    "violet",
    "grey",
    "white",
];

fn text(src: &Source<'_>, at: usize, end: usize) -> RuleResult {
    Ok(Progress::new(
        skip_inline_ws(src.bytes(), end),
        ParseValue::Text(src.text[at..end].to_string()),
    ))
}

/// Version number: decimal digits, `.`, decimal digits, matched as raw
/// text.
pub fn version(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    let major_end = scan_digits(bytes, at);
    if major_end == at || bytes.get(major_end).copied() != Some(b'.') {
        return Err(Mismatch::new("version number", at));
    }
    let minor_end = scan_digits(bytes, major_end + 1);
    if minor_end == major_end + 1 {
        return Err(Mismatch::new("version number", at));
    }
    text(src, at, minor_end)
}

/// Style tag: a maximal identifier run that must be one of [`STYLE_TAGS`].
pub fn tag(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    let mut end = at;
    while bytes
        .get(end)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'-')
    {
        end += 1;
    }
    if end == at || !STYLE_TAGS.contains(&&src.text[at..end]) {
        return Err(Mismatch::new("Format Property", at));
    }
    text(src, at, end)
}

/// End offset of a `letters digits` cell reference, e.g. `B2`.
fn scan_cell(bytes: &[u8], at: usize) -> Option<usize> {
    let letters_end = scan_uppercase(bytes, at);
    if letters_end == at {
        return None;
    }
    let digits_end = scan_digits(bytes, letters_end);
    if digits_end == letters_end {
        return None;
    }
    Some(digits_end)
}

/// Extend a matched left side with `:` and a right side scanned by the same
/// shape; falls back to the left side alone when the right side is
/// malformed, leaving the `:` unconsumed.
fn extend_range<F>(bytes: &[u8], left_end: usize, scan_side: F) -> usize
where
    F: Fn(&[u8], usize) -> Option<usize>,
{
    if bytes.get(left_end).copied() == Some(b':') {
        if let Some(right_end) = scan_side(bytes, left_end + 1) {
            return right_end;
        }
    }
    left_end
}

/// Cell range selector in one of the surface forms `A1:B2`, `D4`, `A:C`,
/// `AA`, `0:9`, or `7`, matched as raw text for later decoding.
pub fn cell_range(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    if let Some(cell_end) = scan_cell(bytes, at) {
        let end = extend_range(bytes, cell_end, scan_cell);
        return text(src, at, end);
    }
    let letters_end = scan_uppercase(bytes, at);
    if letters_end > at {
        let end = extend_range(bytes, letters_end, |b, p| {
            let e = scan_uppercase(b, p);
            (e > p).then_some(e)
        });
        return text(src, at, end);
    }
    let digits_end = scan_digits(bytes, at);
    if digits_end > at {
        let end = extend_range(bytes, digits_end, |b, p| {
            let e = scan_digits(b, p);
            (e > p).then_some(e)
        });
        return text(src, at, end);
    }
    Err(Mismatch::new("Range Selector", at))
}
