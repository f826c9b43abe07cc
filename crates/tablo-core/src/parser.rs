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

//! Document grammar and the public parse entry points.
//!
//! A tablo document is line-oriented:
//!
//! ```text
//! "id","name","score"
//! =0.1
//! 1,"ada",9.5
//! 2,"grace",8.25
//! ~
//! 3,"edsger",7
//! *
//! A {bold}
//! B2:D20 {red,mono}
//! ```
//!
//! The optional first line holds quoted header labels (`-` for an unnamed
//! column), the mandatory `=` line carries the format version, data rows
//! follow with `~` lines separating sections, and an optional trailing `*`
//! block lists format rules. The grammar composes the combinators from
//! [`crate::combinator`] over the matchers in [`crate::lex`]; assembly into
//! a [`Table`] happens as each region parses, under the active [`Limits`].

use crate::combinator::{altern, concat, repeat, Mismatch, ParseValue, RuleResult, Source};
use crate::error::{Result, TabloError};
use crate::format::FormatRuleSet;
use crate::lex::{self, Token};
use crate::limits::Limits;
use crate::table::{Label, Row, Table};
use crate::value::Element;

/// The only document version this parser accepts.
pub const FORMAT_VERSION: &str = "0.1";

/// Options controlling a parse.
///
/// Fields are public for direct mutation; [`ParseOptions::builder`] offers
/// a fluent alternative.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
    /// When a repetition's iteration matches its head but fails its tail,
    /// roll the iteration back and keep what was matched so far instead of
    /// failing the whole repetition.
    pub lenient_repeat: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            lenient_repeat: false,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    lenient_repeat: bool,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            lenient_repeat: false,
        }
    }

    /// Replace the whole limit set.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum input size in bytes.
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.limits.max_input_size = size;
        self
    }

    /// Set the maximum number of data rows.
    pub fn max_rows(mut self, count: usize) -> Self {
        self.limits.max_rows = count;
        self
    }

    /// Set the maximum number of format rules.
    pub fn max_format_rules(mut self, count: usize) -> Self {
        self.limits.max_format_rules = count;
        self
    }

    /// Enable or disable lenient repetition.
    pub fn lenient_repeat(mut self, lenient: bool) -> Self {
        self.lenient_repeat = lenient;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            lenient_repeat: self.lenient_repeat,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a tablo document with default options.
pub fn parse(input: &str) -> Result<Table> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a tablo document with custom options.
///
/// The input size limit is checked up front; row and rule limits are
/// enforced while the table is assembled.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Table> {
    if input.len() > options.limits.max_input_size {
        return Err(TabloError::limit(format!(
            "input too large: exceeds limit of {} bytes",
            options.limits.max_input_size
        )));
    }
    let src = Source::new(input, options);
    parse_document(&src)
}

// ---------------------------------------------------------------------------
// Grammar rules
// ---------------------------------------------------------------------------

/// Any cell value. The alternatives are flattened so exhaustion reports
/// every terminal in one breath.
fn element(src: &Source<'_>, at: usize) -> RuleResult {
    altern(
        src,
        at,
        &[
            lex::string,
            lex::scientific,
            lex::hexadecimal,
            lex::float,
            lex::integer,
            lex::boolean,
            lex::null,
        ],
    )
}

/// A header cell: a quoted label or the `-` placeholder.
fn label(src: &Source<'_>, at: usize) -> RuleResult {
    altern(src, at, &[lex::string, lex::null])
}

fn element_tail(src: &Source<'_>, at: usize) -> RuleResult {
    repeat(src, at, &[lex::comma, element])
}

fn element_row(src: &Source<'_>, at: usize) -> RuleResult {
    concat(src, at, &[element, element_tail, lex::newline])
}

fn break_row(src: &Source<'_>, at: usize) -> RuleResult {
    concat(src, at, &[lex::tilde, lex::newline])
}

/// One data line: comma-separated elements, or a bare `~` section break.
fn row(src: &Source<'_>, at: usize) -> RuleResult {
    altern(src, at, &[element_row, break_row])
        .map_err(|mismatch| Mismatch::new("element or '~'", mismatch.at))
}

fn label_tail(src: &Source<'_>, at: usize) -> RuleResult {
    repeat(src, at, &[lex::comma, label])
}

fn label_line(src: &Source<'_>, at: usize) -> RuleResult {
    concat(src, at, &[label, label_tail, lex::newline])
}

fn tag_tail(src: &Source<'_>, at: usize) -> RuleResult {
    repeat(src, at, &[lex::comma, lex::tag])
}

/// `{tag,tag,…}` terminated by the line-ending close brace.
fn properties(src: &Source<'_>, at: usize) -> RuleResult {
    concat(src, at, &[lex::open_brace, lex::tag, tag_tail, lex::close_brace])
}

fn format_rule(src: &Source<'_>, at: usize) -> RuleResult {
    concat(src, at, &[lex::cell_range, properties])
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Unwrap a sequence value; a scalar becomes a one-item sequence.
fn seq_items(value: ParseValue) -> Vec<ParseValue> {
    match value {
        ParseValue::Seq(items) => items,
        scalar @ (ParseValue::Element(_) | ParseValue::Token(_) | ParseValue::Text(_)) => {
            vec![scalar]
        }
    }
}

fn collect_labels(items: Vec<ParseValue>) -> Vec<Label> {
    let mut labels = Vec::new();
    for item in items {
        match item {
            ParseValue::Element(Element::String(text)) => labels.push(Some(text)),
            ParseValue::Element(Element::Null) => labels.push(None),
            ParseValue::Element(Element::Number(_))
            | ParseValue::Element(Element::Boolean(_))
            | ParseValue::Token(_)
            | ParseValue::Text(_)
            | ParseValue::Seq(_) => {}
        }
    }
    labels
}

fn collect_elements(items: Vec<ParseValue>) -> Row {
    let mut row = Row::new();
    for item in items {
        match item {
            ParseValue::Element(element) => row.push(element),
            ParseValue::Token(_) | ParseValue::Text(_) | ParseValue::Seq(_) => {}
        }
    }
    row
}

/// Parse the optional label line and the mandatory version line.
///
/// A first label that fails to match means the label line is absent and
/// the version line is expected immediately. Once the first label matches,
/// the whole label line must parse. All header failures are anchored at
/// the header's starting offset.
fn parse_header(src: &Source<'_>, at: usize) -> Result<(Vec<Label>, usize)> {
    let mut labels = Vec::new();
    let mut pos = at;
    match label_line(src, at) {
        Ok(progress) => {
            pos = progress.at;
            labels = collect_labels(seq_items(progress.value));
        }
        Err(mismatch) => {
            if label(src, at).is_ok() {
                return Err(TabloError::syntax(mismatch.expected, at));
            }
        }
    }

    let line = concat(src, pos, &[lex::equals, lex::version, lex::newline])
        .map_err(|mismatch| TabloError::syntax(mismatch.expected, at))?;
    let mut version_text = String::new();
    for item in seq_items(line.value) {
        match item {
            ParseValue::Text(text) => version_text = text,
            ParseValue::Element(_) | ParseValue::Token(_) | ParseValue::Seq(_) => {}
        }
    }
    if version_text != FORMAT_VERSION {
        return Err(TabloError::version("invalid version number", at));
    }
    Ok((labels, line.at))
}

/// Parse zero or more data lines, partitioning element rows from section
/// breaks as they arrive.
fn parse_data(src: &Source<'_>, at: usize, table: &mut Table, limits: &Limits) -> Result<usize> {
    let progress =
        repeat(src, at, &[row]).map_err(|m| TabloError::syntax(m.expected, m.at))?;
    for item in seq_items(progress.value) {
        let line = seq_items(item);
        if matches!(line.first(), Some(ParseValue::Token(Token::Tilde))) {
            table.append_break();
        } else {
            if table.len() >= limits.max_rows {
                return Err(TabloError::limit(format!(
                    "too many rows: exceeds limit of {}",
                    limits.max_rows
                )));
            }
            table.append(collect_elements(line));
        }
    }
    Ok(progress.at)
}

/// Parse the `*` block: rule lines to the end of input.
fn parse_format_block(
    src: &Source<'_>,
    at: usize,
    table: &mut Table,
    limits: &Limits,
) -> Result<usize> {
    let intro = concat(src, at, &[lex::star, lex::newline])
        .map_err(|mismatch| TabloError::syntax(mismatch.expected, mismatch.at))?;
    let rules = repeat(src, intro.at, &[format_rule])
        .map_err(|mismatch| TabloError::syntax(mismatch.expected, mismatch.at))?;
    if rules.at != src.len() {
        return Err(TabloError::syntax("format rule", rules.at));
    }
    for item in seq_items(rules.value) {
        if table.format().len() >= limits.max_format_rules {
            return Err(TabloError::limit(format!(
                "too many format rules: exceeds limit of {}",
                limits.max_format_rules
            )));
        }
        assemble_rule(seq_items(item), table.format_mut());
    }
    Ok(rules.at)
}

/// Turn one parsed rule line into a stored rule. The first text item is
/// the selector, the rest are tags; undecodable selectors are dropped by
/// the rule set itself.
fn assemble_rule(items: Vec<ParseValue>, set: &mut FormatRuleSet) {
    let mut selector: Option<String> = None;
    let mut tags = Vec::new();
    for item in items {
        match item {
            ParseValue::Text(text) => {
                if selector.is_none() {
                    selector = Some(text);
                } else {
                    tags.push(text);
                }
            }
            ParseValue::Element(_) | ParseValue::Token(_) | ParseValue::Seq(_) => {}
        }
    }
    if let Some(selector) = selector {
        set.push(selector, tags);
    }
}

fn parse_document(src: &Source<'_>) -> Result<Table> {
    let limits = &src.options.limits;
    let (labels, after_header) = parse_header(src, 0)?;
    let mut table = Table::with_header(labels);
    let after_data = parse_data(src, after_header, &mut table, limits)?;
    if after_data == src.len() {
        return Ok(table);
    }
    parse_format_block(src, after_data, &mut table, limits)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn with_source<T>(input: &str, f: impl FnOnce(&Source<'_>) -> T) -> T {
        let options = ParseOptions::default();
        let src = Source::new(input, &options);
        f(&src)
    }

    fn num(n: f64) -> Element {
        Element::Number(n)
    }

    fn s(text: &str) -> Element {
        Element::String(text.to_string())
    }

    // ==================== Options tests ====================

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.limits.max_input_size, Limits::default().max_input_size);
        assert!(!options.lenient_repeat);
    }

    #[test]
    fn test_options_builder() {
        let options = ParseOptions::builder()
            .max_input_size(10)
            .max_rows(5)
            .max_format_rules(2)
            .lenient_repeat(true)
            .build();
        assert_eq!(options.limits.max_input_size, 10);
        assert_eq!(options.limits.max_rows, 5);
        assert_eq!(options.limits.max_format_rules, 2);
        assert!(options.lenient_repeat);
    }

    #[test]
    fn test_options_builder_whole_limit_set() {
        let options = ParseOptions::builder().limits(Limits::strict()).build();
        assert_eq!(options.limits.max_input_size, Limits::strict().max_input_size);
    }

    // ==================== Row rule tests ====================

    #[test]
    fn test_row_yields_elements_and_punctuation() {
        let progress = with_source("1,2\n", |src| row(src, 0)).unwrap();
        assert_eq!(progress.at, 4);
        assert_eq!(
            progress.value,
            ParseValue::Seq(vec![
                ParseValue::Element(num(1.0)),
                ParseValue::Token(Token::Comma),
                ParseValue::Element(num(2.0)),
                ParseValue::Token(Token::Newline),
            ])
        );
    }

    #[test]
    fn test_row_matches_section_break() {
        let progress = with_source("~\n", |src| row(src, 0)).unwrap();
        assert_eq!(
            progress.value,
            ParseValue::Seq(vec![
                ParseValue::Token(Token::Tilde),
                ParseValue::Token(Token::Newline),
            ])
        );
    }

    #[test]
    fn test_row_failure_names_both_alternatives() {
        let mismatch = with_source("x\n", |src| row(src, 0)).unwrap_err();
        assert_eq!(mismatch.expected, "element or '~'");
        assert_eq!(mismatch.at, 0);
    }

    #[test]
    fn test_data_partitions_rows_and_breaks() {
        let mut table = Table::new();
        let end = with_source("1\n2\n~\n3\n", |src| {
            parse_data(src, 0, &mut table, &Limits::default())
        })
        .unwrap();
        assert_eq!(end, 8);
        assert_eq!(table.rows(), &[vec![num(1.0)], vec![num(2.0)], vec![num(3.0)]]);
        assert_eq!(
            table.section_breaks().iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
    }

    // ==================== Document tests ====================

    #[test]
    fn test_version_line_only_is_an_empty_table() {
        let table = parse("=0.1\n").unwrap();
        assert_eq!(table, Table::new());
    }

    #[test]
    fn test_rows_parse_in_order() {
        let table = parse("=0.1\n1,2\n3,4\n").unwrap();
        assert_eq!(
            table.rows(),
            &[vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]]
        );
        assert!(table.header().is_empty());
    }

    #[test]
    fn test_header_labels() {
        let table = parse("\"id\",\"name\"\n=0.1\n1,\"ada\"\n").unwrap();
        assert_eq!(
            table.header(),
            &[Some("id".to_string()), Some("name".to_string())]
        );
        assert_eq!(table.rows(), &[vec![num(1.0), s("ada")]]);
    }

    #[test]
    fn test_header_null_label_is_unnamed() {
        let table = parse("\"id\",-\n=0.1\n").unwrap();
        assert_eq!(table.header(), &[Some("id".to_string()), None]);
    }

    #[test]
    fn test_section_breaks_in_document() {
        let table = parse("=0.1\n1\n2\n~\n3\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.sections().len(), 2);
        assert_eq!(table.sections()[1], &[vec![num(3.0)]][..]);
    }

    #[test]
    fn test_all_element_kinds_in_rows() {
        let table = parse("=0.1\n\"x\",0xff,1e3,2.5,-7,true,-\n").unwrap();
        assert_eq!(
            table.rows(),
            &[vec![
                s("x"),
                num(255.0),
                num(1000.0),
                num(2.5),
                num(-7.0),
                Element::Boolean(true),
                Element::Null,
            ]]
        );
    }

    #[test]
    fn test_rows_may_be_ragged() {
        let table = parse("=0.1\n1,2,3\n4\n").unwrap();
        assert_eq!(table.row(0).map(Vec::len), Some(3));
        assert_eq!(table.row(1).map(Vec::len), Some(1));
    }

    #[test]
    fn test_inline_whitespace_after_lexemes_is_ignored() {
        let table = parse("= 0.1\n1 ,\t2 \n").unwrap();
        assert_eq!(table.rows(), &[vec![num(1.0), num(2.0)]]);
    }

    #[test]
    fn test_format_block_collects_rules() {
        let table = parse("=0.1\n1,2\n*\nA {bold}\nB2:D20 {red,mono}\n").unwrap();
        assert_eq!(table.format().len(), 2);
        assert_eq!(table.format().resolve(0, 0), vec!["bold".to_string()]);
        assert_eq!(
            table.format().resolve(2, 1),
            vec!["red".to_string(), "mono".to_string()]
        );
        assert!(table.format().resolve(0, 1).is_empty());
    }

    #[test]
    fn test_undecodable_selector_is_dropped_not_fatal() {
        let table = parse("=0.1\n*\nZ:A {bold}\nB {red}\n").unwrap();
        assert_eq!(table.format().len(), 1);
        assert_eq!(table.format().resolve(0, 1), vec!["red".to_string()]);
    }

    // ==================== Error tests ====================

    #[test]
    fn test_missing_version_line() {
        let err = parse("1,2\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "header separator");
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_unsupported_version_number() {
        let err = parse("=0.2\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Version);
        assert_eq!(err.message, "invalid version number");
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_version_error_is_anchored_at_header_start() {
        let err = parse("\"a\",\"b\"\n=0.2\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Version);
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_version_line_requires_newline() {
        let err = parse("=0.1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "newline");
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_committed_label_line_must_complete() {
        let err = parse("\"a\",5\n=0.1\n").unwrap_err();
        assert_eq!(err.message, "one of string,null");
        assert_eq!(err.offset, 0);

        let err = parse("\"a\" 5\n=0.1\n").unwrap_err();
        assert_eq!(err.message, "newline");
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_dangling_row_reports_format_separator() {
        // "1," matches the element and the comma, then aborts the row;
        // the repetition rolls back to the line start, which then fails
        // to open a format block.
        let err = parse("=0.1\n1,\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "format separator");
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn test_junk_after_format_rules() {
        let err = parse("=0.1\n*\nA {bold}\njunk\n").unwrap_err();
        assert_eq!(err.message, "format rule");
        assert_eq!(err.offset, 16);
    }

    #[test]
    fn test_unterminated_rule_line() {
        let err = parse("=0.1\n*\nA {bold}").unwrap_err();
        assert_eq!(err.message, "format rule");
        assert_eq!(err.offset, 7);
    }

    #[test]
    fn test_error_display_reads_naturally() {
        let err = parse("=0.1\n1,\n").unwrap_err();
        assert_eq!(err.to_string(), "SyntaxError at offset 5: format separator");
    }

    // ==================== Limit tests ====================

    #[test]
    fn test_input_size_limit() {
        let options = ParseOptions::builder().max_input_size(4).build();
        let err = parse_with_options("=0.1\n", &options).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Limit);
        assert_eq!(err.message, "input too large: exceeds limit of 4 bytes");
    }

    #[test]
    fn test_row_limit() {
        let options = ParseOptions::builder().max_rows(2).build();
        let err = parse_with_options("=0.1\n1\n2\n3\n", &options).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Limit);
        assert_eq!(err.message, "too many rows: exceeds limit of 2");
    }

    #[test]
    fn test_section_breaks_do_not_count_against_row_limit() {
        let options = ParseOptions::builder().max_rows(2).build();
        let table = parse_with_options("=0.1\n1\n~\n2\n", &options).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_format_rule_limit() {
        let options = ParseOptions::builder().max_format_rules(1).build();
        let err = parse_with_options("=0.1\n*\nA {bold}\nB {red}\n", &options).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Limit);
        assert_eq!(err.message, "too many format rules: exceeds limit of 1");
    }
}
