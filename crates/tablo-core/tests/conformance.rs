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

//! End-to-end acceptance tests for the public parsing and rendering API.

use tablo_core::{
    column_index, column_label, parse, parse_with_options, Element, ErrorKind, ParseOptions,
    RenderStrategy, Table, TabloRenderer,
};

fn num(n: f64) -> Element {
    Element::Number(n)
}

fn s(text: &str) -> Element {
    Element::String(text.to_string())
}

// =============================================================================
// Document structure
// =============================================================================

#[test]
fn test_header_rows_and_types() {
    let table = parse("\"h1\", -\n=0.1\n1, \"x\"\ntrue, -\n").unwrap();
    assert_eq!(table.header(), &[Some("h1".to_string()), None]);
    assert_eq!(
        table.rows(),
        &[
            vec![num(1.0), s("x")],
            vec![Element::Boolean(true), Element::Null],
        ]
    );
    assert!(table.section_breaks().is_empty());
    assert!(table.format().is_empty());
}

#[test]
fn test_version_line_alone_is_empty_table() {
    let table = parse("=0.1\n").unwrap();
    assert!(table.is_empty());
    assert!(table.header().is_empty());
}

#[test]
fn test_space_after_version_separator_is_tolerated() {
    let table = parse("= 0.1\n").unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_sections_split_rows() {
    let table = parse("=0.1\n1\n2\n~\n3\n").unwrap();
    assert_eq!(
        table.rows(),
        &[vec![num(1.0)], vec![num(2.0)], vec![num(3.0)]]
    );
    assert_eq!(
        table.section_breaks().iter().copied().collect::<Vec<_>>(),
        vec![2]
    );
    let sections = table.sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].len(), 2);
    assert_eq!(sections[1].len(), 1);
}

#[test]
fn test_consecutive_separators_collapse_to_one_break() {
    let table = parse("=0.1\n1\n~\n~\n2\n").unwrap();
    assert_eq!(table.sections().len(), 2);
}

#[test]
fn test_inline_whitespace_between_lexemes() {
    let table = parse("=0.1\n1 , 2\t\n").unwrap();
    assert_eq!(table.rows(), &[vec![num(1.0), num(2.0)]]);
}

// =============================================================================
// Element literals
// =============================================================================

#[test]
fn test_numeric_spellings_fold_to_numbers() {
    let table = parse("=0.1\n0xCAFE, 1_000_000, -1_234.567_8e4, .5e1, 5.e3\n").unwrap();
    assert_eq!(
        table.rows(),
        &[vec![
            num(51966.0),
            num(1_000_000.0),
            num(-12_345_678.0),
            num(5.0),
            num(5000.0),
        ]]
    );
}

#[test]
fn test_string_escapes_and_unicode() {
    let table = parse("=0.1\n\"a\\\"b\", \"\\u{41}\", \"\\u{1F600}\"\n").unwrap();
    assert_eq!(
        table.rows(),
        &[vec![s("a\"b"), s("A"), s("\u{1F600}")]]
    );
}

#[test]
fn test_empty_string_cell() {
    let table = parse("=0.1\n\"\"\n").unwrap();
    assert_eq!(table.rows(), &[vec![s("")]]);
}

#[test]
fn test_null_cells() {
    let table = parse("=0.1\n-,-,-\n").unwrap();
    assert_eq!(table.rows(), &[vec![Element::Null; 3]]);
}

// =============================================================================
// Format rules and resolution
// =============================================================================

#[test]
fn test_column_range_rule_applies_to_all_rows() {
    let table = parse("=0.1\n1, 2\n*\nA:B {bold}\n").unwrap();
    assert_eq!(table.format().len(), 1);
    assert_eq!(table.format().resolve(0, 0), vec!["bold".to_string()]);
    assert_eq!(table.format().resolve(5, 1), vec!["bold".to_string()]);
    assert!(table.format().resolve(0, 2).is_empty());
}

#[test]
fn test_inverted_selector_parses_but_never_resolves() {
    let table = parse("=0.1\n*\nB1:A0 {red}\n").unwrap();
    assert!(table.format().is_empty());
    assert!(table.format().resolve(0, 0).is_empty());
    assert!(table.format().resolve(1, 1).is_empty());
}

#[test]
fn test_bijective_column_addressing() {
    let table = parse("=0.1\n*\nC {bold}\nD {red}\n").unwrap();
    assert_eq!(table.format().resolve(9, 2), vec!["bold".to_string()]);
    assert_eq!(table.format().resolve(9, 3), vec!["red".to_string()]);
    assert!(table.format().resolve(9, 4).is_empty());

    for (letters, index) in [
        ("A", 0),
        ("AA", 26),
        ("AZ", 51),
        ("BA", 52),
        ("ZZ", 701),
        ("AAA", 702),
    ] {
        assert_eq!(column_index(letters), Some(index));
        assert_eq!(column_label(index), letters);
    }
}

#[test]
fn test_overlapping_rules_accumulate() {
    let table = parse("=0.1\n*\n0:9 {bold}\nA {red}\nA0 {mono}\n").unwrap();
    assert_eq!(
        table.format().resolve(0, 0),
        vec!["bold".to_string(), "red".to_string(), "mono".to_string()]
    );
    assert_eq!(table.format().resolve(3, 0), vec!["bold".to_string(), "red".to_string()]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unsupported_version() {
    let err = parse("=0.2\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Version);
    assert_eq!(err.message, "invalid version number");
    assert_eq!(err.offset, 0);
}

#[test]
fn test_version_error_anchors_at_document_start_even_with_header() {
    let err = parse("\"a\", \"b\"\n=9.9\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Version);
    assert_eq!(err.offset, 0);
}

#[test]
fn test_missing_version_line() {
    let err = parse("1, 2\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "header separator");
}

#[test]
fn test_malformed_row_surfaces_as_missing_format_block() {
    // The dangling line aborts the row, the row repetition stops before
    // it, and the leftover text then fails to open a format block.
    let err = parse("=0.1\n1,\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "format separator");
    assert_eq!(err.offset, 5);
}

#[test]
fn test_unterminated_string_poisons_its_line() {
    let err = parse("=0.1\n\"abc\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "format separator");
    assert_eq!(err.offset, 5);
}

#[test]
fn test_unknown_style_tag_rejects_rule_block() {
    let err = parse("=0.1\n*\nA {shiny}\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "format rule");
    assert_eq!(err.offset, 7);
}

#[test]
fn test_text_after_format_rules_is_rejected() {
    let err = parse("=0.1\n*\nA {bold}\n1, 2\n").unwrap_err();
    assert_eq!(err.message, "format rule");
    assert_eq!(err.offset, 16);
}

// =============================================================================
// Limits
// =============================================================================

#[test]
fn test_strict_limits_reject_large_input() {
    let options = ParseOptions::builder().max_input_size(8).build();
    let err = parse_with_options("=0.1\n1, 2, 3\n", &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Limit);
}

#[test]
fn test_row_limit_is_enforced_during_assembly() {
    let options = ParseOptions::builder().max_rows(1).build();
    let err = parse_with_options("=0.1\n1\n2\n", &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Limit);
    assert_eq!(err.message, "too many rows: exceeds limit of 1");
}

// =============================================================================
// Round-trip
// =============================================================================

#[test]
fn test_canonical_round_trip_on_fixed_documents() {
    let documents = [
        "=0.1\n",
        "\"a\", \"b\"\n=0.1\n1, 2\n",
        "\"h1\", -\n=0.1\n1, \"x\"\ntrue, -\n",
        "=0.1\n~\n1\n~\n",
        "=0.1\n1, 2\n~\n3\n*\nA {bold}\nB2:D20 {red,mono}\n0:1 {green}\n",
    ];
    let renderer = TabloRenderer::new();
    for document in documents {
        let table = parse(document).unwrap();
        let text = renderer.render(&table).unwrap();
        assert_eq!(parse(&text).unwrap(), table, "document: {document:?}");
    }
}

#[test]
fn test_normalizing_round_trip_converges() {
    // Collapsed separators and numeric folding normalize on the first
    // render; a second pass must be a fixed point.
    let table = parse("=0.1\n0x10\n~\n~\n1e2\n").unwrap();
    let renderer = TabloRenderer::new();
    let once = renderer.render(&table).unwrap();
    let twice = renderer.render(&parse(&once).unwrap()).unwrap();
    assert_eq!(once, "=0.1\n16\n~\n100\n");
    assert_eq!(once, twice);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_parses_agree() {
    let input = "=0.1\n1, 2\n~\n3, 4\n*\nA {bold}\n";
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || parse(input).unwrap()))
        .collect();
    let tables: Vec<Table> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for table in &tables {
        assert_eq!(table, &tables[0]);
    }
}
