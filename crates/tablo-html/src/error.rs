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

//! Error types for HTML rendering.

use thiserror::Error;

/// Errors raised while writing a table as HTML.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HtmlError {
    /// The markup writer failed.
    #[error("failed to write {context}: {message}")]
    Write {
        /// What was being written when the failure occurred.
        context: String,
        /// Underlying error message.
        message: String,
    },

    /// The produced byte stream was not valid UTF-8.
    #[error("HTML output is not valid UTF-8: {message}")]
    Utf8 {
        /// Underlying error message.
        message: String,
    },
}

impl HtmlError {
    pub(crate) fn write(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Write {
            context: context.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for HtmlError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Utf8 {
            message: err.to_string(),
        }
    }
}

impl From<HtmlError> for tablo_core::TabloError {
    fn from(err: HtmlError) -> Self {
        tablo_core::TabloError::render(err.to_string())
    }
}
