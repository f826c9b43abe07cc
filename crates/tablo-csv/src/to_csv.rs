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

//! Convert tablo tables to CSV.

use crate::error::{CsvError, Result};
use std::io::Write;
use tablo_core::{RenderStrategy, Table};

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include the label line as a header row (default: true)
    pub include_header: bool,
    /// Quote every field instead of only where required (default: false)
    pub always_quote: bool,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
            always_quote: false,
        }
    }
}

/// Convert a table to a CSV string.
///
/// Header labels become the first record when present (`None` labels as
/// empty fields), each data row becomes one record, and cells render in
/// their plain form: strings unquoted, `Null` empty, booleans as
/// `true`/`false`, numbers minimal. Section breaks have no CSV
/// counterpart and are skipped, as are format rules.
pub fn to_csv(table: &Table, config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_csv_size(table));
    to_csv_writer(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a table as CSV to a writer.
pub fn to_csv_writer<W: Write>(table: &Table, writer: W, config: &ToCsvConfig) -> Result<()> {
    let quote_style = if config.always_quote {
        csv::QuoteStyle::Always
    } else {
        csv::QuoteStyle::Necessary
    };
    // flexible: rows may be ragged
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(quote_style)
        .flexible(true)
        .from_writer(writer);

    if config.include_header && !table.header().is_empty() {
        let record: Vec<&str> = table
            .header()
            .iter()
            .map(|label| label.as_deref().unwrap_or(""))
            .collect();
        wtr.write_record(&record)?;
    }

    for row in table.rows() {
        let record: Vec<String> = row.iter().map(|cell| cell.to_plain_string()).collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Estimate CSV output size for pre-allocation: a conservative 16 bytes
/// per cell, at least 1KB.
fn estimate_csv_size(table: &Table) -> usize {
    let cols = table
        .header()
        .len()
        .max(table.rows().first().map_or(1, Vec::len));
    ((table.len() + 1) * cols * 16).max(1024)
}

/// [`RenderStrategy`] adapter around [`to_csv`].
#[derive(Debug, Clone, Default)]
pub struct CsvRenderer {
    config: ToCsvConfig,
}

impl CsvRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ToCsvConfig) -> Self {
        Self { config }
    }
}

impl RenderStrategy for CsvRenderer {
    fn render(&self, table: &Table) -> tablo_core::Result<String> {
        Ok(to_csv(table, &self.config)?)
    }
}
