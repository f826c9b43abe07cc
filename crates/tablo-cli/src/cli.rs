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

//! Command definitions and dispatch for the tablo CLI.

use clap::{Subcommand, ValueEnum};

use crate::commands;
use crate::error::CliError;

/// Output representations for the render command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Canonical tablo text
    Tablo,
    /// An HTML table fragment
    Html,
    /// RFC 4180 CSV
    Csv,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate tablo file syntax
    Validate {
        /// Path to the tablo file
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Render a tablo file to another representation
    Render {
        /// Path to the tablo file
        #[arg(value_name = "FILE")]
        file: String,

        /// Target representation
        #[arg(long, value_enum, value_name = "FORMAT")]
        to: RenderFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,
    },

    /// Show row, column, section, and format rule counts
    Stats {
        /// Path to the tablo file
        #[arg(value_name = "FILE")]
        file: String,

        /// Emit the counts as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, applying strict parser limits when `strict` is set.
    pub fn execute(self, strict: bool) -> Result<(), CliError> {
        match self {
            Commands::Validate { file } => commands::validate(&file, strict),
            Commands::Render { file, to, output } => {
                commands::render(&file, to, output.as_deref(), strict)
            }
            Commands::Stats { file, json } => commands::stats(&file, json, strict),
        }
    }
}
