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

//! Structured error types for the cri2gp CLI.
//!
//! Every failure in the pipeline surfaces as a [`CliError`]; `main` prints it
//! to stderr and exits with a failure status.

use cri2gp_core::FormatError;
use cri2gp_tsv::TsvError;
use std::io;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error for '{target}': {message}")]
    Io {
        /// Stream that failed (`<stdin>` or `<stdout>`)
        target: String,
        /// The error message
        message: String,
    },

    /// Input exceeds the configured size limit.
    #[error("Input is too large (more than {max} bytes). To process larger reports, set {var} (in bytes).")]
    InputTooLarge {
        /// The limit in bytes
        max: u64,
        /// Environment variable that overrides the limit
        var: &'static str,
    },

    /// The report is malformed.
    #[error("Parse error: {0}")]
    Format(#[from] FormatError),

    /// The table could not be rendered.
    #[error("Output error: {0}")]
    Tsv(#[from] TsvError),
}

impl CliError {
    /// Create an I/O error with stream context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cri2gp_cli::error::CliError;
    /// use std::io;
    ///
    /// let err = CliError::io_error("<stdin>", io::Error::new(io::ErrorKind::Other, "closed"));
    /// assert_eq!(err.to_string(), "I/O error for '<stdin>': closed");
    /// ```
    pub fn io_error(target: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            target: target.into(),
            message: source.to_string(),
        }
    }

    /// Create an input-too-large error.
    pub fn input_too_large(max: u64) -> Self {
        Self::InputTooLarge {
            max,
            var: crate::commands::MAX_INPUT_SIZE_VAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_too_large_display() {
        let msg = CliError::input_too_large(1024).to_string();
        assert!(msg.contains("1024 bytes"));
        assert!(msg.contains("CRI2GP_MAX_INPUT_SIZE"));
    }

    #[test]
    fn test_format_error_conversion() {
        let err: CliError = FormatError::Header {
            line: 1,
            header: "a/b".to_string(),
            found: 2,
        }
        .into();
        assert!(matches!(err, CliError::Format(_)));
        assert!(err.to_string().starts_with("Parse error: line 1"));
    }

    #[test]
    fn test_tsv_error_conversion() {
        let err: CliError = TsvError::MissingEntry {
            input: "i".to_string(),
            variant: "v".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Tsv(_)));
    }
}
