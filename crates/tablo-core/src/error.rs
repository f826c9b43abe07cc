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

//! Error types for tablo parsing and rendering.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lexical or structural violation.
    Syntax,
    /// Unsupported version number.
    Version,
    /// Security limit exceeded.
    Limit,
    /// Error while rendering a table.
    Render,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Version => write!(f, "VersionError"),
            Self::Limit => write!(f, "LimitError"),
            Self::Render => write!(f, "RenderError"),
        }
    }
}

/// An error raised while parsing or rendering a tablo document.
///
/// Offsets are absolute byte positions into the source text; errors with no
/// meaningful position (limits, rendering) carry offset 0.
#[derive(Debug, Clone, Error)]
#[error("{kind} at offset {offset}: {message}")]
pub struct TabloError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Byte offset into the source (0-based).
    pub offset: usize,
}

impl TabloError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
        }
    }

    // Convenience constructors for each error kind

    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::Syntax, message, offset)
    }

    pub fn version(message: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::Version, message, offset)
    }

    pub fn limit(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Limit, message, 0)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Render, message, 0)
    }
}

/// Result alias for tablo operations.
pub type Result<T> = std::result::Result<T, TabloError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Display tests ====================

    #[test]
    fn test_display_includes_kind_and_offset() {
        let err = TabloError::syntax("element or '~'", 12);
        assert_eq!(err.to_string(), "SyntaxError at offset 12: element or '~'");
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(ErrorKind::Syntax.to_string(), "SyntaxError");
        assert_eq!(ErrorKind::Version.to_string(), "VersionError");
        assert_eq!(ErrorKind::Limit.to_string(), "LimitError");
        assert_eq!(ErrorKind::Render.to_string(), "RenderError");
    }

    // ==================== Constructor tests ====================

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(TabloError::version("invalid version number", 0).kind, ErrorKind::Version);
        assert_eq!(TabloError::limit("too many rows").kind, ErrorKind::Limit);
        assert_eq!(TabloError::render("bad strategy").kind, ErrorKind::Render);
        assert_eq!(TabloError::limit("too many rows").offset, 0);
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<TabloError>();
    }
}
