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

//! Tablo Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use tablo_cli::cli::Commands;

/// tablo - line-oriented tabular text toolkit
///
/// A command-line interface for working with tablo files, providing
/// validation, rendering to other representations, and table statistics.
///
/// # Examples
///
/// ```bash
/// # Validate a tablo file
/// tablo validate example.tablo
///
/// # Re-emit a file as canonical tablo text
/// tablo render example.tablo --to tablo
///
/// # Convert to HTML, writing to a file
/// tablo render example.tablo --to html --output table.html
///
/// # Show table statistics as JSON
/// tablo stats example.tablo --json
/// ```
#[derive(Parser)]
#[command(name = "tablo")]
#[command(author, version, about = "tablo - line-oriented tabular text toolkit", long_about = None)]
struct Cli {
    /// Apply conservative parser limits for untrusted input
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute(cli.strict) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
