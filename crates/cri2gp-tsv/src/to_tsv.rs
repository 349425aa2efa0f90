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

//! Render an [`Aggregate`] as a tab-separated table.

use crate::error::{Result, TsvError};
use cri2gp_core::{Aggregate, Measure};
use std::io::Write;

/// What to emit for an input case that lacks a variant's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Abort with [`TsvError::MissingEntry`].
    #[default]
    Fail,
    /// Write three empty cells.
    Blank,
}

/// Configuration for TSV output.
#[derive(Debug, Clone)]
pub struct ToTsvConfig {
    /// Label of the first header cell (default: "Title")
    pub title: String,
    /// Statistic to emit (default: throughput)
    pub measure: Measure,
    /// Handling of missing cells (default: fail)
    pub missing: MissingPolicy,
}

impl Default for ToTsvConfig {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            measure: Measure::Throughput,
            missing: MissingPolicy::Fail,
        }
    }
}

/// Render an aggregate with the default configuration.
///
/// # Example
/// ```
/// use cri2gp_core::{parse_records, Aggregate};
/// use cri2gp_tsv::to_tsv;
///
/// let report = "\
/// Day13_A/baseline/short
///     time:   [10.0 ns 10.0 ns 10.0 ns]
///     thrpt:  [1.0000 GiB/s 1.0000 GiB/s 1.0000 GiB/s]
/// ";
/// let aggregate = Aggregate::from_records(parse_records(report.as_bytes())).unwrap();
/// assert_eq!(
///     to_tsv(&aggregate).unwrap(),
///     "Title\tlow\tbaseline\thigh\nshort (GiB/s)\t1.0\t1.0\t1.0\n"
/// );
/// ```
pub fn to_tsv(aggregate: &Aggregate) -> Result<String> {
    to_tsv_with_config(aggregate, ToTsvConfig::default())
}

/// Render an aggregate to a string with custom configuration.
pub fn to_tsv_with_config(aggregate: &Aggregate, config: ToTsvConfig) -> Result<String> {
    let mut buffer = Vec::new();
    to_tsv_writer_with_config(aggregate, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| TsvError::InvalidUtf8 {
        context: "TSV output".to_string(),
    })
}

/// Write an aggregate as TSV to `writer`.
///
/// Emits the header row followed by one row per input case, in encounter
/// order. Each row's values are rescaled to the smallest low-bound unit seen
/// for that input case. Cells are tab-separated and never quoted; names are
/// written exactly as they appear in the report.
///
/// # Errors
///
/// Returns [`TsvError::MissingEntry`] under [`MissingPolicy::Fail`] when an
/// input case lacks a variant, or a writer error.
pub fn to_tsv_writer_with_config<W: Write>(
    aggregate: &Aggregate,
    writer: W,
    config: ToTsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(header_record(aggregate, &config.title))?;
    for input in aggregate.inputs() {
        wtr.write_record(row_record(aggregate, input, &config)?)?;
    }
    wtr.flush()?;

    tracing::debug!(
        rows = aggregate.inputs().len(),
        variants = aggregate.variants().len(),
        measure = %config.measure,
        "rendered table"
    );
    Ok(())
}

/// Header cells: the title, then `low`, `<variant>`, `high` per variant.
pub fn header_record(aggregate: &Aggregate, title: &str) -> Vec<String> {
    let mut record = Vec::with_capacity(1 + 3 * aggregate.variants().len());
    record.push(title.to_string());
    for variant in aggregate.variants() {
        record.push("low".to_string());
        record.push(variant.clone());
        record.push("high".to_string());
    }
    record
}

fn row_record(aggregate: &Aggregate, input: &str, config: &ToTsvConfig) -> Result<Vec<String>> {
    let vocabulary = config.measure.vocabulary();
    // Every listed input holds at least one entry, so this only fails on a
    // hand-built aggregate.
    let unit = aggregate
        .min_unit(input, config.measure)
        .ok_or_else(|| TsvError::MissingEntry {
            input: input.to_string(),
            variant: String::new(),
        })?;

    let mut record = Vec::with_capacity(1 + 3 * aggregate.variants().len());
    record.push(format!("{} ({})", input, vocabulary.name(unit).unwrap_or("?")));

    for variant in aggregate.variants() {
        match aggregate.get(input, variant) {
            Some(entry) => {
                for measurement in entry.triple(config.measure).measurements() {
                    record.push(format_value(measurement.rescale(unit, vocabulary.base())));
                }
            }
            None if config.missing == MissingPolicy::Blank => {
                record.extend(std::iter::repeat(String::new()).take(3));
            }
            None => {
                return Err(TsvError::MissingEntry {
                    input: input.to_string(),
                    variant: variant.clone(),
                });
            }
        }
    }
    Ok(record)
}

/// Format a value the way the plotting scripts expect.
///
/// Uses the shortest representation that round-trips, keeping a `.0` on
/// integral values.
///
/// ```
/// use cri2gp_tsv::format_value;
///
/// assert_eq!(format_value(1.0), "1.0");
/// assert_eq!(format_value(1536.0), "1536.0");
/// assert_eq!(format_value(2.9606), "2.9606");
/// ```
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}
