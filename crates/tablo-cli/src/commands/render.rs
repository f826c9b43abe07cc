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

//! Render command - re-emit a parsed table through a render strategy

use super::{parse_options, read_file, write_output};
use crate::cli::RenderFormat;
use crate::error::{CliError, Result};
use tablo_core::{parse_with_options, RenderStrategy, TabloRenderer};
use tablo_csv::CsvRenderer;
use tablo_html::HtmlRenderer;

/// Render a tablo file to the chosen representation.
///
/// Parses the file and hands the table to the strategy for `to`. Output
/// goes to the `output` path when given, stdout otherwise.
///
/// # Arguments
///
/// * `file` - Path to the tablo file to render
/// * `to` - Target representation
/// * `output` - Optional output file path. If `None`, writes to stdout
/// * `strict` - If `true`, applies the conservative limits for untrusted input
///
/// # Errors
///
/// Returns `Err` if:
/// - The file cannot be read
/// - The file contains syntax errors
/// - The render strategy fails
/// - Output writing fails
pub fn render(file: &str, to: RenderFormat, output: Option<&str>, strict: bool) -> Result<()> {
    let options = parse_options(strict);
    let content = read_file(file, options.limits.max_input_size)?;

    let table = parse_with_options(&content, &options).map_err(|e| CliError::parse(e.to_string()))?;

    let strategy: Box<dyn RenderStrategy> = match to {
        RenderFormat::Tablo => Box::new(TabloRenderer::new()),
        RenderFormat::Html => Box::new(HtmlRenderer::new()),
        RenderFormat::Csv => Box::new(CsvRenderer::new()),
    };
    let rendered = strategy
        .render(&table)
        .map_err(|e| CliError::render(e.to_string()))?;

    write_output(&rendered, output)
}
