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

//! Convert command - report text in, TSV table out

use crate::error::CliError;
use cri2gp_core::{parse_records, Aggregate};
use cri2gp_tsv::{to_tsv_with_config, ToTsvConfig};

/// Parse a criterion report and render it as a TSV table.
///
/// Nothing is returned unless the whole report parses and every cell
/// renders, so callers never emit partial output.
///
/// # Errors
///
/// Returns [`CliError::Format`] for a malformed report and
/// [`CliError::Tsv`] when the table cannot be rendered.
///
/// # Examples
///
/// ```
/// use cri2gp_cli::commands::convert;
/// use cri2gp_tsv::ToTsvConfig;
///
/// let report = b"G/v/i\n  time:   [1.0 ns 1.0 ns 1.0 ns]\n  thrpt:  [3.0 KiB/s 3.0 KiB/s 3.0 KiB/s]\n";
/// let table = convert(report, ToTsvConfig::default()).unwrap();
/// assert_eq!(table, "Title\tlow\tv\thigh\ni (KiB/s)\t3.0\t3.0\t3.0\n");
/// ```
pub fn convert(input: &[u8], config: ToTsvConfig) -> Result<String, CliError> {
    let aggregate = Aggregate::from_records(parse_records(input))?;
    tracing::info!(
        results = aggregate.len(),
        inputs = aggregate.inputs().len(),
        variants = aggregate.variants().len(),
        "aggregated report"
    );
    Ok(to_tsv_with_config(&aggregate, config)?)
}
