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

//! Tablo CSV Export
//!
//! Exports parsed tablo tables as CSV.
//!
//! # Features
//!
//! - Header labels become the CSV header record (`None` labels as empty
//!   fields)
//! - Cells render in plain form: `Null` empty, booleans `true`/`false`,
//!   numbers minimal, strings unquoted
//! - Quoting and escaping handled by the `csv` crate; quote-everything
//!   mode available
//! - Configurable delimiter and header inclusion
//! - Section breaks and format rules have no CSV counterpart; data rows
//!   are written contiguously
//! - Implements [`RenderStrategy`](tablo_core::RenderStrategy)
//!
//! # Examples
//!
//! ```rust
//! use tablo_core::parse;
//! use tablo_csv::{to_csv, ToCsvConfig};
//!
//! let table = parse("\"id\", \"name\"\n=0.1\n1, \"ada\"\n2, \"grace\"\n").unwrap();
//! let csv = to_csv(&table, &ToCsvConfig::default()).unwrap();
//!
//! assert_eq!(csv, "id,name\n1,ada\n2,grace\n");
//! ```

mod error;
mod to_csv;

pub use error::CsvError;
pub use to_csv::{to_csv, to_csv_writer, CsvRenderer, ToCsvConfig};

use tablo_core::Table;

/// Convert a table to CSV with the default configuration.
pub fn table_to_csv(table: &Table) -> Result<String, CsvError> {
    to_csv(table, &ToCsvConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablo_core::parse;

    #[test]
    fn test_default_conversion() {
        let table = parse("\"a\", \"b\"\n=0.1\n1, \"x\"\n~\ntrue, -\n").unwrap();
        let csv = table_to_csv(&table).unwrap();
        assert_eq!(csv, "a,b\n1,x\ntrue,\n");
    }
}
