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

//! Security limits for tablo parsing.

/// Configurable limits for parser security.
///
/// These limits protect against denial-of-service attacks and memory
/// exhaustion by bounding the resources consumed during parsing.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_input_size: usize,
    /// Maximum number of data rows (default: 10M).
    pub max_rows: usize,
    /// Maximum number of format rules (default: 100k).
    pub max_format_rules: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64MB
            max_rows: 10_000_000,
            max_format_rules: 100_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_rows: usize::MAX,
            max_format_rules: usize::MAX,
        }
    }

    /// Conservative limits for untrusted input.
    pub fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1MB
            max_rows: 100_000,
            max_format_rules: 1_000,
        }
    }
}
