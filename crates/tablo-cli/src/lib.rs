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

//! Tablo CLI library for command-line parsing and execution.
//!
//! This library backs the `tablo` binary, providing the command
//! implementations for validation, rendering, and table statistics.
//!
//! # Commands
//!
//! - **validate**: Validate tablo file syntax and print a table summary
//! - **render**: Re-emit a file as canonical tablo text, HTML, or CSV
//! - **stats**: Show row, column, section, and format rule counts
//!
//! All commands accept `--strict`, which applies the conservative parser
//! limits for untrusted input.
//!
//! # Examples
//!
//! ```no_run
//! use tablo_cli::commands::validate;
//!
//! # fn main() -> Result<(), tablo_cli::error::CliError> {
//! // Validate a tablo file
//! validate("example.tablo", false)?;
//!
//! // Validate with conservative limits
//! validate("example.tablo", true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Errors carry context like
//! file paths and parse offsets; the binary prints them to stderr.

pub mod cli;
pub mod commands;
pub mod error;
