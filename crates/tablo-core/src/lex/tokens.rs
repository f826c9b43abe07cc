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

//! Punctuation token matchers.
//!
//! Each matcher consumes its single lexeme plus any trailing horizontal
//! whitespace. The closing brace is the one exception to single-byte
//! matching: it is line-terminating and consumes `}`, optional horizontal
//! whitespace, and the newline that ends the rule line.

use super::scan::skip_inline_ws;
use crate::combinator::{Mismatch, ParseValue, Progress, RuleResult, Source};

/// A punctuation lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Comma,
    Newline,
    Equals,
    Tilde,
    Star,
    OpenBrace,
    CloseBrace,
}

fn single(src: &Source<'_>, at: usize, byte: u8, token: Token, expected: &str) -> RuleResult {
    if src.bytes().get(at).copied() == Some(byte) {
        Ok(Progress::new(
            skip_inline_ws(src.bytes(), at + 1),
            ParseValue::Token(token),
        ))
    } else {
        Err(Mismatch::new(expected, at))
    }
}

pub fn comma(src: &Source<'_>, at: usize) -> RuleResult {
    single(src, at, b',', Token::Comma, "comma")
}

pub fn newline(src: &Source<'_>, at: usize) -> RuleResult {
    single(src, at, b'\n', Token::Newline, "newline")
}

pub fn equals(src: &Source<'_>, at: usize) -> RuleResult {
    single(src, at, b'=', Token::Equals, "header separator")
}

pub fn tilde(src: &Source<'_>, at: usize) -> RuleResult {
    single(src, at, b'~', Token::Tilde, "section separator")
}

pub fn star(src: &Source<'_>, at: usize) -> RuleResult {
    single(src, at, b'*', Token::Star, "format separator")
}

pub fn open_brace(src: &Source<'_>, at: usize) -> RuleResult {
    single(src, at, b'{', Token::OpenBrace, "\"{\"")
}

/// `}` followed by optional horizontal whitespace and a mandatory newline.
pub fn close_brace(src: &Source<'_>, at: usize) -> RuleResult {
    let bytes = src.bytes();
    if bytes.get(at).copied() != Some(b'}') {
        return Err(Mismatch::new("\"}\"", at));
    }
    let pos = skip_inline_ws(bytes, at + 1);
    if bytes.get(pos).copied() != Some(b'\n') {
        return Err(Mismatch::new("\"}\"", at));
    }
    Ok(Progress::new(
        skip_inline_ws(bytes, pos + 1),
        ParseValue::Token(Token::CloseBrace),
    ))
}
