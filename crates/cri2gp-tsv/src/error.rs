// cri2gp - Criterion report to gnuplot table converter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Error types for table rendering.

use thiserror::Error;

/// Errors raised while rendering an aggregate as TSV.
///
/// # Examples
///
/// ```
/// use cri2gp_tsv::TsvError;
///
/// let err = TsvError::MissingEntry {
///     input: "short".to_string(),
///     variant: "naive".to_string(),
/// };
/// assert_eq!(err.to_string(), "no result for variant 'naive' on input 'short'");
/// ```
#[derive(Debug, Error)]
pub enum TsvError {
    /// An input case has no result for a variant seen elsewhere.
    #[error("no result for variant '{variant}' on input '{input}'")]
    MissingEntry {
        /// Input case (row).
        input: String,
        /// Variant (column group).
        variant: String,
    },

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV writer.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Rendered output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being rendered.
        context: String,
    },
}

/// Result alias for rendering operations.
pub type Result<T> = std::result::Result<T, TsvError>;
