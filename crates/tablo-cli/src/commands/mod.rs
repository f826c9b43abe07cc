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

//! CLI command implementations

mod render;
mod stats;
mod validate;

pub use render::render;
pub use stats::stats;
pub use validate::validate;

use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Write};
use tablo_core::{Limits, ParseOptions, Table};

/// Parser options for a run: conservative limits when `strict` is set,
/// defaults otherwise.
fn parse_options(strict: bool) -> ParseOptions {
    let limits = if strict {
        Limits::strict()
    } else {
        Limits::default()
    };
    ParseOptions {
        limits,
        ..ParseOptions::default()
    }
}

/// Read a file, rejecting it when its size exceeds `max_size` bytes.
///
/// The size comes from metadata, so oversized inputs are refused before
/// any allocation for their content.
fn read_file(path: &str, max_size: usize) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    if metadata.len() > max_size as u64 {
        return Err(CliError::file_too_large(
            path,
            metadata.len(),
            max_size as u64,
        ));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout when no path is given.
fn write_output(content: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("stdout", e)),
    }
}

/// Widest extent of the table: header labels or the longest data row.
fn column_count(table: &Table) -> usize {
    let widest_row = table.rows().iter().map(|row| row.len()).max().unwrap_or(0);
    table.header().len().max(widest_row)
}
