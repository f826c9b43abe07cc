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

//! Error types for CSV export.

use thiserror::Error;

/// CSV export error types.
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O error during CSV writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Context where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl From<CsvError> for tablo_core::TabloError {
    fn from(err: CsvError) -> Self {
        tablo_core::TabloError::render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablo_core::ErrorKind;

    #[test]
    fn test_invalid_utf8_display() {
        let err = CsvError::InvalidUtf8 {
            context: "CSV output".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid UTF-8 in CSV output");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let csv_err = CsvError::from(io_err);
        assert!(csv_err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_conversion_to_core_error() {
        let err = CsvError::InvalidUtf8 {
            context: "CSV output".to_string(),
        };
        let core: tablo_core::TabloError = err.into();
        assert_eq!(core.kind, ErrorKind::Render);
        assert_eq!(core.offset, 0);
        assert!(core.message.contains("Invalid UTF-8"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CsvError>();
    }
}
