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

//! Element literal matchers: strings, the numeric family, booleans, null.
//!
//! All numeric spellings produce [`Element::Number`] backed by `f64`;
//! integers and hex literals of any length fold with round-to-nearest, the
//! way the format defines them.

use memchr::memchr2;

use super::scan::{scan_grouped, skip_inline_ws};
use crate::combinator::{altern, Mismatch, ParseValue, Progress, RuleResult, Source};
use crate::value::Element;

fn element(src: &Source<'_>, end: usize, value: Element) -> RuleResult {
    Ok(Progress::new(
        skip_inline_ws(src.bytes(), end),
        ParseValue::Element(value),
    ))
}

/// Quoted string literal.
///
/// The body is any run of literal characters other than `"` and `\`, or one
/// of the escape pairs `\"`, `\n`, `\t`, `\f`, `\r`, `\b`, `\\`, and
/// `\u{H…H}` (1-8 hex digits naming a Unicode scalar value). Any other
/// escape, a non-scalar codepoint, or a missing closing quote rejects the
/// whole literal.
pub fn string(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    if bytes.get(at).copied() != Some(b'"') {
        return Err(Mismatch::new("string", at));
    }
    let mut pos = at + 1;
    let mut value = String::new();
    loop {
        let Some(step) = memchr2(b'"', b'\\', &bytes[pos..]) else {
            return Err(Mismatch::new("string", at));
        };
        value.push_str(&src.text[pos..pos + step]);
        pos += step;
        if bytes[pos] == b'"' {
            pos += 1;
            break;
        }
        // escape pair
        pos += 1;
        match bytes.get(pos).copied() {
            Some(b'"') => value.push('"'),
            Some(b'n') => value.push('\n'),
            Some(b't') => value.push('\t'),
            Some(b'f') => value.push('\u{0C}'),
            Some(b'r') => value.push('\r'),
            Some(b'b') => value.push('\u{08}'),
            Some(b'\\') => value.push('\\'),
            Some(b'u') => {
                pos += 1;
                if bytes.get(pos).copied() != Some(b'{') {
                    return Err(Mismatch::new("string", at));
                }
                pos += 1;
                let start = pos;
                while pos - start < 8 && bytes.get(pos).is_some_and(|b| b.is_ascii_hexdigit()) {
                    pos += 1;
                }
                if pos == start || bytes.get(pos).copied() != Some(b'}') {
                    return Err(Mismatch::new("string", at));
                }
                let code = u32::from_str_radix(&src.text[start..pos], 16)
                    .map_err(|_| Mismatch::new("string", at))?;
                let Some(c) = char::from_u32(code) else {
                    return Err(Mismatch::new("string", at));
                };
                value.push(c);
            }
            _ => return Err(Mismatch::new("string", at)),
        }
        pos += 1;
    }
    element(src, pos, Element::String(value))
}

fn scan_sign(bytes: &[u8], at: usize) -> usize {
    if matches!(bytes.get(at).copied(), Some(b'+' | b'-')) {
        at + 1
    } else {
        at
    }
}

/// End offset of a signed, underscore-grouped decimal digit run.
fn scan_int_text(bytes: &[u8], at: usize) -> Option<usize> {
    scan_grouped(bytes, scan_sign(bytes, at), |b| b.is_ascii_digit())
}

/// End offset of a float: optional sign, optional integer digits, mandatory
/// `.`, optional fraction digits, at least one digit overall.
fn scan_float_text(bytes: &[u8], at: usize) -> Option<usize> {
    let start = scan_sign(bytes, at);
    let int_end = scan_grouped(bytes, start, |b| b.is_ascii_digit()).unwrap_or(start);
    if bytes.get(int_end).copied() != Some(b'.') {
        return None;
    }
    let frac_start = int_end + 1;
    let frac_end = scan_grouped(bytes, frac_start, |b| b.is_ascii_digit()).unwrap_or(frac_start);
    if int_end == start && frac_end == frac_start {
        return None;
    }
    Some(frac_end)
}

fn fold_decimal(src: &Source<'_>, at: usize, end: usize, expected: &str) -> Result<f64, Mismatch> {
    let cleaned: String = src.text[at..end].chars().filter(|&c| c != '_').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| Mismatch::new(expected, at))
}

/// Integer literal: optional sign, underscore-grouped digits.
pub fn integer(src: &Source<'_>, at: usize) -> RuleResult {
    let Some(end) = scan_int_text(src.bytes(), at) else {
        return Err(Mismatch::new("integer", at));
    };
    let value = fold_decimal(src, at, end, "integer")?;
    element(src, end, Element::Number(value))
}

/// Float literal with a mandatory decimal point.
pub fn float(src: &Source<'_>, at: usize) -> RuleResult {
    let Some(end) = scan_float_text(src.bytes(), at) else {
        return Err(Mismatch::new("float", at));
    };
    let value = fold_decimal(src, at, end, "float")?;
    element(src, end, Element::Number(value))
}

/// Hexadecimal literal: optional sign, `0x`, underscore-grouped hex digits.
pub fn hexadecimal(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    let sign_end = scan_sign(bytes, at);
    if bytes.get(sign_end).copied() != Some(b'0') || bytes.get(sign_end + 1).copied() != Some(b'x')
    {
        return Err(Mismatch::new("hexadecimal", at));
    }
    let Some(end) = scan_grouped(bytes, sign_end + 2, |b| b.is_ascii_hexdigit()) else {
        return Err(Mismatch::new("hexadecimal", at));
    };
    let magnitude = src.text[sign_end + 2..end]
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0f64, |acc, digit| acc * 16.0 + f64::from(digit));
    let value = if bytes[at] == b'-' { -magnitude } else { magnitude };
    element(src, end, Element::Number(value))
}

/// Scientific notation: a float or integer mantissa, `e`/`E`, signed
/// underscore-grouped exponent.
pub fn scientific(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    let Some(mantissa_end) = scan_float_text(bytes, at).or_else(|| scan_int_text(bytes, at))
    else {
        return Err(Mismatch::new("scientific", at));
    };
    if !matches!(bytes.get(mantissa_end).copied(), Some(b'e' | b'E')) {
        return Err(Mismatch::new("scientific", at));
    }
    let exp_start = scan_sign(bytes, mantissa_end + 1);
    let Some(end) = scan_grouped(bytes, exp_start, |b| b.is_ascii_digit()) else {
        return Err(Mismatch::new("scientific", at));
    };
    let value = fold_decimal(src, at, end, "scientific")?;
    element(src, end, Element::Number(value))
}

/// The numeric family in match order: scientific, hexadecimal, float,
/// integer. The longer constructs go first so a prefix never steals the
/// match.
pub fn number(src: &Source<'_>, at: usize) -> RuleResult {
    altern(src, at, &[scientific, hexadecimal, float, integer])
}

/// Boolean literal `true` / `false`.
pub fn boolean(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    if bytes[at..].starts_with(b"true") {
        element(src, at + 4, Element::Boolean(true))
    } else if bytes[at..].starts_with(b"false") {
        element(src, at + 5, Element::Boolean(false))
    } else {
        Err(Mismatch::new("boolean", at))
    }
}

/// Null literal `-`.
pub fn null(src: &Source<'_>, at: usize) -> RuleResult {
    if src.bytes().get(at).copied() == Some(b'-') {
        element(src, at + 1, Element::Null)
    } else {
        Err(Mismatch::new("null", at))
    }
}
