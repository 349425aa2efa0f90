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

//! CLI command implementations

mod convert;

pub use convert::convert;

use crate::error::CliError;
use std::io::{self, Read, Write};

/// Default maximum input size (1 GB)
/// Can be overridden via the CRI2GP_MAX_INPUT_SIZE environment variable
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable that overrides [`DEFAULT_MAX_INPUT_SIZE`].
pub const MAX_INPUT_SIZE_VAR: &str = "CRI2GP_MAX_INPUT_SIZE";

/// Get the maximum input size from environment or use default.
///
/// Falls back to [`DEFAULT_MAX_INPUT_SIZE`] if the variable is not set or
/// does not hold a valid byte count.
pub fn max_input_size() -> u64 {
    std::env::var(MAX_INPUT_SIZE_VAR)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_INPUT_SIZE)
}

/// Read a whole stream into memory, refusing anything over `max` bytes.
///
/// # Errors
///
/// Returns [`CliError::InputTooLarge`] when the stream holds more than `max`
/// bytes, or [`CliError::Io`] when reading fails.
///
/// # Examples
///
/// ```
/// use cri2gp_cli::commands::read_input;
///
/// let data = read_input(&b"G/v/i\n"[..], 1024).unwrap();
/// assert_eq!(data, b"G/v/i\n");
///
/// assert!(read_input(&b"G/v/i\n"[..], 3).is_err());
/// ```
pub fn read_input<R: Read>(reader: R, max: u64) -> Result<Vec<u8>, CliError> {
    let mut buffer = Vec::new();
    reader
        .take(max.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| CliError::io_error("<stdin>", e))?;

    if buffer.len() as u64 > max {
        return Err(CliError::input_too_large(max));
    }
    Ok(buffer)
}

/// Read all of stdin, bounded by [`max_input_size`].
pub fn read_stdin() -> Result<Vec<u8>, CliError> {
    let max = max_input_size();
    let input = read_input(io::stdin().lock(), max)?;
    tracing::debug!(bytes = input.len(), max, "read report from stdin");
    Ok(input)
}

/// Write the rendered table to stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing or flushing stdout fails.
pub fn write_output(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}
