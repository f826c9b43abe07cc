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

//! Byte-level scanning helpers shared by the lexical matchers.
//!
//! All helpers operate on absolute byte offsets and only ever step over
//! ASCII bytes, so the returned offsets are always valid `str` boundaries.

/// Skip spaces and tabs (not newlines), returning the first offset past the
/// run.
pub(crate) fn skip_inline_ws(bytes: &[u8], mut at: usize) -> usize {
    while let Some(&b) = bytes.get(at) {
        if b == b' ' || b == b'\t' {
            at += 1;
        } else {
            break;
        }
    }
    at
}

/// Scan a run of ASCII decimal digits. Returns the end offset, which equals
/// `at` when no digit is present.
pub(crate) fn scan_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(|b| b.is_ascii_digit()) {
        at += 1;
    }
    at
}

/// Scan a run of ASCII uppercase letters. Returns the end offset, which
/// equals `at` when no letter is present.
pub(crate) fn scan_uppercase(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(|b| b.is_ascii_uppercase()) {
        at += 1;
    }
    at
}

/// Scan digits optionally grouped by single interior underscores.
///
/// The run must start and end with a digit; an underscore is only consumed
/// when a digit follows it. Returns the end offset, or `None` when no digit
/// starts the run. A trailing underscore is left unconsumed, mirroring how
/// a backtracking pattern would settle on the shorter match.
pub(crate) fn scan_grouped<F>(bytes: &[u8], at: usize, is_digit: F) -> Option<usize>
where
    F: Fn(u8) -> bool,
{
    let mut pos = at;
    let mut seen_digit = false;
    loop {
        match bytes.get(pos).copied() {
            Some(b) if is_digit(b) => {
                seen_digit = true;
                pos += 1;
            }
            Some(b'_') if seen_digit && bytes.get(pos + 1).copied().is_some_and(&is_digit) => {
                pos += 1;
            }
            _ => break,
        }
    }
    if seen_digit {
        Some(pos)
    } else {
        None
    }
}
