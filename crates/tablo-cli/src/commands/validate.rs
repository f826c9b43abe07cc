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

//! Validate command - tablo file syntax validation

use super::{column_count, parse_options, read_file};
use crate::error::{CliError, Result};
use colored::Colorize;
use tablo_core::parse_with_options;

/// Validate a tablo file for syntactic correctness.
///
/// Parses the file and prints a summary of the table shape to stdout. With
/// `strict`, the conservative parser limits are applied.
///
/// # Arguments
///
/// * `file` - Path to the tablo file to validate
/// * `strict` - If `true`, applies the conservative limits for untrusted input
///
/// # Errors
///
/// Returns `Err` if:
/// - The file cannot be read
/// - The file exceeds the active input size limit
/// - The file contains syntax errors
///
/// # Output
///
/// Prints a summary to stdout including:
/// - File validation status (✓ or ✗)
/// - Count of rows, columns, sections, and format rules
/// - Strict mode indicator if enabled
pub fn validate(file: &str, strict: bool) -> Result<()> {
    let options = parse_options(strict);
    let content = read_file(file, options.limits.max_input_size)?;

    match parse_with_options(&content, &options) {
        Ok(table) => {
            println!("{} {}", "✓".green().bold(), file);
            println!("  Rows: {}", table.len());
            println!("  Columns: {}", column_count(&table));
            println!("  Sections: {}", table.sections().len());
            println!("  Format rules: {}", table.format().len());
            if strict {
                println!("  Mode: strict limits");
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(CliError::parse(e.to_string()))
        }
    }
}
