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

//! Stats command - table shape summary

use super::{column_count, parse_options, read_file};
use crate::error::{CliError, Result};
use tablo_core::parse_with_options;

/// Print row, column, section, and format rule counts for a tablo file.
///
/// The column count is the widest extent of the table: the number of header
/// labels or the length of the longest data row, whichever is larger.
///
/// # Arguments
///
/// * `file` - Path to the tablo file to analyze
/// * `json` - If `true`, emits the counts as pretty-printed JSON
/// * `strict` - If `true`, applies the conservative limits for untrusted input
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, does not parse, or JSON
/// serialization fails.
pub fn stats(file: &str, json: bool, strict: bool) -> Result<()> {
    let options = parse_options(strict);
    let content = read_file(file, options.limits.max_input_size)?;

    let table =
        parse_with_options(&content, &options).map_err(|e| CliError::parse(e.to_string()))?;

    let rows = table.len();
    let columns = column_count(&table);
    let sections = table.sections().len();
    let format_rules = table.format().len();

    if json {
        let value = serde_json::json!({
            "rows": rows,
            "columns": columns,
            "sections": sections,
            "format_rules": format_rules,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Rows: {}", rows);
        println!("Columns: {}", columns);
        println!("Sections: {}", sections);
        println!("Format rules: {}", format_rules);
    }

    Ok(())
}
