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

//! Backtracking combinator engine.
//!
//! Rules are plain functions of `(&Source, offset)` returning either
//! [`Progress`] (new absolute offset plus the produced value) or
//! [`Mismatch`] (what was expected, anchored at the offset where the
//! enclosing construct began). There is no shared cursor and no interior
//! mutability, so any number of parses can run concurrently.
//!
//! Three combinators compose rules:
//!
//! - [`concat`]: all rules in order; sub-sequences flatten one level into
//!   the combined result; on failure the offset resets to the start.
//! - [`altern`]: ordered alternation; the first success wins, exhaustion
//!   reports every alternative's expectation.
//! - [`repeat`]: a head rule followed by a tail sequence, repeated. A
//!   failing head ends the repetition; a failing tail aborts the whole
//!   repetition (one poisoned iteration discards all of them) unless
//!   lenient repetition is enabled in the parse options.

use crate::lex::Token;
use crate::parser::ParseOptions;
use crate::value::Element;

/// A value produced by a rule.
///
/// The engine's value space is closed: every rule yields exactly one of
/// these shapes, and consumers match exhaustively so a new shape cannot
/// slip through a wildcard arm.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseValue {
    /// A cell element (string, number, boolean, null).
    Element(Element),
    /// A punctuation lexeme.
    Token(Token),
    /// Raw matched text (version numbers, selectors, style tags).
    Text(String),
    /// An ordered sequence of values from a composite rule.
    Seq(Vec<ParseValue>),
}

/// Successful rule application: the offset after the match and the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Absolute byte offset of the first unconsumed byte.
    pub at: usize,
    /// The value produced by the rule.
    pub value: ParseValue,
}

impl Progress {
    pub fn new(at: usize, value: ParseValue) -> Self {
        Self { at, value }
    }
}

/// Failed rule application.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// One-phrase description of what the rule expected.
    pub expected: String,
    /// Offset where the enclosing construct began.
    pub at: usize,
}

impl Mismatch {
    pub fn new(expected: impl Into<String>, at: usize) -> Self {
        Self {
            expected: expected.into(),
            at,
        }
    }
}

/// Outcome of applying a rule at an offset.
pub type RuleResult = std::result::Result<Progress, Mismatch>;

/// A parse rule: pure function of the source and an absolute offset.
pub type Rule = fn(&Source<'_>, usize) -> RuleResult;

/// Input text plus the options active for this parse, shared immutably by
/// every rule invocation.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    /// The document text.
    pub text: &'a str,
    /// Options for this parse.
    pub options: &'a ParseOptions,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str, options: &'a ParseOptions) -> Self {
        Self { text, options }
    }

    /// The input as bytes; all offsets index into this slice.
    pub fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Total input length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Apply every rule in order, threading the offset through.
///
/// Values accumulate into one sequence; a sub-rule that itself produced a
/// sequence is spliced in (flattened one level), scalar values are pushed.
/// The first failing rule fails the whole concatenation with that rule's
/// expectation, anchored back at the concatenation's starting offset.
/// An empty rule list succeeds with an empty sequence.
pub fn concat(src: &Source<'_>, at: usize, rules: &[Rule]) -> RuleResult {
    let mut pos = at;
    let mut values = Vec::new();
    for rule in rules {
        match rule(src, pos) {
            Ok(progress) => {
                pos = progress.at;
                push_flattened(&mut values, progress.value);
            }
            Err(mismatch) => return Err(Mismatch::new(mismatch.expected, at)),
        }
    }
    Ok(Progress::new(pos, ParseValue::Seq(values)))
}

/// Try each rule at the same offset; the first success wins and later
/// alternatives are never consulted.
///
/// When every alternative fails, the mismatch lists all of their
/// expectations: `one of {descriptions joined by ","}`.
pub fn altern(src: &Source<'_>, at: usize, rules: &[Rule]) -> RuleResult {
    let mut expected = Vec::with_capacity(rules.len());
    for rule in rules {
        match rule(src, at) {
            Ok(progress) => return Ok(progress),
            Err(mismatch) => expected.push(mismatch.expected),
        }
    }
    Err(Mismatch::new(format!("one of {}", expected.join(",")), at))
}

/// Repeat a head rule followed by a tail sequence.
///
/// Each iteration matches `rules[0]`, then `concat` of `rules[1..]`. A
/// failing head ends the loop (zero iterations is a valid match). A
/// failing tail aborts the entire repetition with the tail's expectation
/// anchored at the repetition's start — unless `lenient_repeat` is set, in
/// which case the iteration is rolled back and the values accumulated so
/// far are returned.
///
/// Accumulation mirrors the asymmetry: the head's value is pushed as a
/// single item even when it is a sequence, while the tail's sequence is
/// spliced. This is what lets a repeated composite rule (like a table row)
/// keep its internal grouping.
pub fn repeat(src: &Source<'_>, at: usize, rules: &[Rule]) -> RuleResult {
    let Some((head, tail)) = rules.split_first() else {
        return Ok(Progress::new(at, ParseValue::Seq(Vec::new())));
    };
    let mut pos = at;
    let mut values = Vec::new();
    loop {
        let head_progress = match head(src, pos) {
            Ok(progress) => progress,
            Err(_) => break,
        };
        match concat(src, head_progress.at, tail) {
            Ok(tail_progress) => {
                values.push(head_progress.value);
                push_flattened(&mut values, tail_progress.value);
                pos = tail_progress.at;
            }
            Err(mismatch) => {
                if src.options.lenient_repeat {
                    break;
                }
                return Err(Mismatch::new(mismatch.expected, at));
            }
        }
    }
    Ok(Progress::new(pos, ParseValue::Seq(values)))
}

fn push_flattened(values: &mut Vec<ParseValue>, value: ParseValue) {
    match value {
        ParseValue::Seq(items) => values.extend(items),
        scalar @ (ParseValue::Element(_) | ParseValue::Token(_) | ParseValue::Text(_)) => {
            values.push(scalar)
        }
    }
}
