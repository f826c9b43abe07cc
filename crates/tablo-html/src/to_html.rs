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

//! Table to HTML conversion.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use tablo_core::{column_label, Element, RenderStrategy, Table};

use crate::error::HtmlError;

/// Configuration for HTML output.
#[derive(Debug, Clone)]
pub struct ToHtmlConfig {
    /// Pretty-print with indentation.
    pub pretty: bool,
    /// Indentation string (e.g., "  " or "\t").
    pub indent: String,
    /// Emit a `<thead>` when the table has header labels.
    pub include_header: bool,
    /// `class` attribute for the `<table>` element.
    pub table_class: Option<String>,
}

impl Default for ToHtmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            include_header: true,
            table_class: None,
        }
    }
}

/// Convert a table to an HTML `<table>` fragment.
///
/// Each section becomes its own `<tbody>` (empty sections included). Every
/// `<td>` carries a `data-col-index` attribute with the bijective column
/// letters; cells whose position matches format rules also carry the
/// resolved style tags as a `class` attribute. Text content is escaped by
/// the markup writer.
pub fn to_html(table: &Table, config: &ToHtmlConfig) -> Result<String, HtmlError> {
    let mut writer = if config.pretty {
        // new_with_indent takes (inner, indent_char, indent_size)
        Writer::new_with_indent(Cursor::new(Vec::new()), b' ', config.indent.len())
    } else {
        Writer::new(Cursor::new(Vec::new()))
    };

    let mut root = BytesStart::new("table");
    if let Some(class) = &config.table_class {
        root.push_attribute(("class", class.as_str()));
    }
    writer
        .write_event(Event::Start(root))
        .map_err(|e| HtmlError::write("table start", e))?;

    if config.include_header && !table.header().is_empty() {
        write_header(&mut writer, table)?;
    }

    let mut row_index: u32 = 0;
    for section in table.sections() {
        writer
            .write_event(Event::Start(BytesStart::new("tbody")))
            .map_err(|e| HtmlError::write("section start", e))?;
        for row in section {
            write_row(&mut writer, table, row, row_index)?;
            row_index += 1;
        }
        writer
            .write_event(Event::End(BytesEnd::new("tbody")))
            .map_err(|e| HtmlError::write("section end", e))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("table")))
        .map_err(|e| HtmlError::write("table end", e))?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn write_header<W: std::io::Write>(
    writer: &mut Writer<W>,
    table: &Table,
) -> Result<(), HtmlError> {
    writer
        .write_event(Event::Start(BytesStart::new("thead")))
        .map_err(|e| HtmlError::write("header start", e))?;
    writer
        .write_event(Event::Start(BytesStart::new("tr")))
        .map_err(|e| HtmlError::write("header row start", e))?;
    for label in table.header() {
        writer
            .write_event(Event::Start(BytesStart::new("th")))
            .map_err(|e| HtmlError::write("header cell start", e))?;
        if let Some(text) = label {
            if !text.is_empty() {
                writer
                    .write_event(Event::Text(BytesText::new(text)))
                    .map_err(|e| HtmlError::write("header cell text", e))?;
            }
        }
        writer
            .write_event(Event::End(BytesEnd::new("th")))
            .map_err(|e| HtmlError::write("header cell end", e))?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("tr")))
        .map_err(|e| HtmlError::write("header row end", e))?;
    writer
        .write_event(Event::End(BytesEnd::new("thead")))
        .map_err(|e| HtmlError::write("header end", e))?;
    Ok(())
}

fn write_row<W: std::io::Write>(
    writer: &mut Writer<W>,
    table: &Table,
    row: &[Element],
    row_index: u32,
) -> Result<(), HtmlError> {
    writer
        .write_event(Event::Start(BytesStart::new("tr")))
        .map_err(|e| HtmlError::write("row start", e))?;
    for (col, element) in row.iter().enumerate() {
        let letters = column_label(col as u32);
        let mut cell = BytesStart::new("td");
        cell.push_attribute(("data-col-index", letters.as_str()));
        let tags = table.format().resolve(row_index, col as u32);
        if !tags.is_empty() {
            cell.push_attribute(("class", tags.join(" ").as_str()));
        }
        writer
            .write_event(Event::Start(cell))
            .map_err(|e| HtmlError::write("cell start", e))?;
        let text = element.to_plain_string();
        if !text.is_empty() {
            writer
                .write_event(Event::Text(BytesText::new(&text)))
                .map_err(|e| HtmlError::write("cell text", e))?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("td")))
            .map_err(|e| HtmlError::write("cell end", e))?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("tr")))
        .map_err(|e| HtmlError::write("row end", e))?;
    Ok(())
}

/// [`RenderStrategy`] adapter around [`to_html`].
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: ToHtmlConfig,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ToHtmlConfig) -> Self {
        Self { config }
    }
}

impl RenderStrategy for HtmlRenderer {
    fn render(&self, table: &Table) -> tablo_core::Result<String> {
        Ok(to_html(table, &self.config)?)
    }
}
