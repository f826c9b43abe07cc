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

//! End-to-end tests for the tablo binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

// Test helper to create a tablo command
fn tablo_cmd() -> Command {
    Command::cargo_bin("tablo").expect("Failed to find tablo binary")
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".tablo")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// Three rows in two sections, two columns, one format rule. Already in
// canonical form, so the tablo renderer reproduces it byte for byte.
const SAMPLE: &str =
    "\"id\", \"name\"\n=0.1\n1, \"ada\"\n2, \"grace\"\n~\n3, \"edsger\"\n*\nA {bold}\n";

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    tablo_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line-oriented tabular text toolkit"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    tablo_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tablo"));
}

#[test]
fn test_no_subcommand_fails() {
    tablo_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Rows: 3"))
        .stdout(predicate::str::contains("Columns: 2"))
        .stdout(predicate::str::contains("Sections: 2"))
        .stdout(predicate::str::contains("Format rules: 1"));
}

#[test]
fn test_validate_invalid_file() {
    let file = create_temp_file("=9.9\n1, 2\n");

    tablo_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_validate_missing_file() {
    tablo_cmd()
        .arg("validate")
        .arg("/nonexistent/file.tablo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_validate_with_strict_mode() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("validate")
        .arg(file.path())
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("strict limits"));
}

// ===== Render Command Tests =====

#[test]
fn test_render_tablo_round_trips() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("render")
        .arg(file.path())
        .arg("--to")
        .arg("tablo")
        .assert()
        .success()
        .stdout(SAMPLE);
}

#[test]
fn test_render_csv() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("render")
        .arg(file.path())
        .arg("--to")
        .arg("csv")
        .assert()
        .success()
        .stdout("id,name\n1,ada\n2,grace\n3,edsger\n");
}

#[test]
fn test_render_html() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("render")
        .arg(file.path())
        .arg("--to")
        .arg("html")
        .assert()
        .success()
        .stdout(predicate::str::contains("<table>"))
        .stdout(predicate::str::contains("<th>id</th>"))
        .stdout(predicate::str::contains("class=\"bold\""))
        .stdout(predicate::str::contains("</table>"));
}

#[test]
fn test_render_to_output_file() {
    let input_file = create_temp_file(SAMPLE);
    let output_file = NamedTempFile::new().expect("Failed to create output file");

    tablo_cmd()
        .arg("render")
        .arg(input_file.path())
        .arg("--to")
        .arg("csv")
        .arg("--output")
        .arg(output_file.path())
        .assert()
        .success();

    let written = fs::read_to_string(output_file.path()).expect("Failed to read output");
    assert_eq!(written, "id,name\n1,ada\n2,grace\n3,edsger\n");
}

#[test]
fn test_render_requires_format() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("render")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn test_render_rejects_unknown_format() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("render")
        .arg(file.path())
        .arg("--to")
        .arg("pdf")
        .assert()
        .failure();
}

// ===== Stats Command Tests =====

#[test]
fn test_stats_plain() {
    let file = create_temp_file(SAMPLE);

    tablo_cmd()
        .arg("stats")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 3"))
        .stdout(predicate::str::contains("Columns: 2"))
        .stdout(predicate::str::contains("Sections: 2"))
        .stdout(predicate::str::contains("Format rules: 1"));
}

#[test]
fn test_stats_json() {
    let file = create_temp_file(SAMPLE);

    let output = tablo_cmd()
        .arg("stats")
        .arg(file.path())
        .arg("--json")
        .output()
        .expect("Failed to run tablo");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout was not UTF-8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout was not JSON");
    assert_eq!(value["rows"], 3);
    assert_eq!(value["columns"], 2);
    assert_eq!(value["sections"], 2);
    assert_eq!(value["format_rules"], 1);
}

#[test]
fn test_stats_ragged_rows_report_widest() {
    let file = create_temp_file("=0.1\n1\n1, 2, 3\n");

    tablo_cmd()
        .arg("stats")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 2"))
        .stdout(predicate::str::contains("Columns: 3"))
        .stdout(predicate::str::contains("Sections: 1"))
        .stdout(predicate::str::contains("Format rules: 0"));
}

// ===== Strict Limits Tests =====

#[test]
fn test_strict_row_limit_rejects_large_table() {
    let mut content = String::from("=0.1\n");
    for _ in 0..100_001 {
        content.push_str("1\n");
    }
    let file = create_temp_file(&content);

    tablo_cmd()
        .arg("validate")
        .arg(file.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));
}
