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

//! Error types for report parsing.

use thiserror::Error;

/// Errors raised while parsing a criterion report.
///
/// Every variant describes malformed input except [`FormatError::Io`], which
/// wraps a failed read from the underlying stream. Line numbers are 1-based.
///
/// # Examples
///
/// ```
/// use cri2gp_core::FormatError;
///
/// let err = FormatError::UnknownUnit {
///     line: 3,
///     field: "throughput",
///     unit: "Gbps".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "line 3: unknown throughput unit 'Gbps'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum FormatError {
    /// Header line did not split into `<group>/<variant>/<input>`.
    #[error("line {line}: expected 3 fields separated by '/', got {found} in '{header}'")]
    Header {
        /// Line number of the header.
        line: usize,
        /// The offending header text.
        header: String,
        /// Number of components found.
        found: usize,
    },

    /// Statistic line did not start with the expected label.
    #[error("line {line}: expected prefix '{expected}', got '{found}'")]
    Label {
        /// Line number of the statistic.
        line: usize,
        /// Label the vocabulary requires (`time:` or `thrpt:`).
        expected: &'static str,
        /// Prefix actually present.
        found: String,
    },

    /// Bracketed value list was not closed.
    #[error("line {line}: expected closing bracket at end of '{text}' for {field}")]
    MissingBracket {
        /// Line number of the statistic.
        line: usize,
        /// Which statistic was being parsed.
        field: &'static str,
        /// The full line.
        text: String,
    },

    /// Value list did not hold exactly three value/unit pairs.
    #[error("line {line}: expected 6 space-separated tokens in {field} values, got {found}")]
    TokenCount {
        /// Line number of the statistic.
        line: usize,
        /// Which statistic was being parsed.
        field: &'static str,
        /// Number of tokens found.
        found: usize,
    },

    /// Unit token is not part of the vocabulary.
    #[error("line {line}: unknown {field} unit '{unit}'")]
    UnknownUnit {
        /// Line number of the statistic.
        line: usize,
        /// Which statistic was being parsed.
        field: &'static str,
        /// The unrecognized token.
        unit: String,
    },

    /// Value token is not a floating point literal.
    #[error("line {line}: invalid {field} value '{value}'")]
    Number {
        /// Line number of the statistic.
        line: usize,
        /// Which statistic was being parsed.
        field: &'static str,
        /// The token that failed to parse.
        value: String,
    },

    /// Reading the input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Header { line, .. }
            | Self::Label { line, .. }
            | Self::MissingBracket { line, .. }
            | Self::TokenCount { line, .. }
            | Self::UnknownUnit { line, .. }
            | Self::Number { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

/// Result alias for parsing operations.
pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_display() {
        let err = FormatError::Header {
            line: 1,
            header: "Day13_A/short".to_string(),
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 1"));
        assert!(msg.contains("Day13_A/short"));
        assert!(msg.contains("got 2"));
    }

    #[test]
    fn test_missing_bracket_names_field() {
        let err = FormatError::MissingBracket {
            line: 2,
            field: "time",
            text: "time: [1 ns 2 ns 3 ns".to_string(),
        };
        assert!(err.to_string().ends_with("for time"));
    }

    #[test]
    fn test_line_accessor() {
        let err = FormatError::Number {
            line: 7,
            field: "throughput",
            value: "abc".to_string(),
        };
        assert_eq!(err.line(), Some(7));

        let io = FormatError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.line(), None);
    }
}
