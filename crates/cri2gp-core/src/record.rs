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

//! Record parsing for terse criterion reports.
//!
//! A report is read three lines at a time: the benchmark id, the `time:`
//! statistic and the `thrpt:` statistic. Parsing is lazy; [`RecordReader`]
//! yields one [`Record`] per group and stops at the first blank line or at
//! end of input.

use crate::error::{FormatError, Result};
use crate::units::{Measurement, Triple, UnitVocabulary, THROUGHPUT, TIME};
use std::io::BufRead;
use std::iter::FusedIterator;

/// One benchmark result parsed from a three-line group.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Implementation being measured (column axis).
    pub variant: String,
    /// Input the benchmark ran against (row axis).
    pub input: String,
    /// Time per iteration.
    pub time: Triple,
    /// Throughput.
    pub throughput: Triple,
}

/// Split a benchmark id into `(variant, input)`.
///
/// The id must have exactly three `/`-separated components; the leading
/// benchmark group is dropped.
///
/// # Errors
///
/// Returns [`FormatError::Header`] when the component count is not 3.
///
/// # Examples
///
/// ```
/// use cri2gp_core::parse_header;
///
/// let (variant, input) = parse_header("Day13_A/naive/right_longer", 1).unwrap();
/// assert_eq!(variant, "naive");
/// assert_eq!(input, "right_longer");
///
/// assert!(parse_header("Day13_A/naive", 1).is_err());
/// ```
pub fn parse_header(line: &str, line_no: usize) -> Result<(String, String)> {
    let parts: Vec<&str> = line.split('/').collect();
    match parts.as_slice() {
        [_group, variant, input] => Ok(((*variant).to_string(), (*input).to_string())),
        _ => Err(FormatError::Header {
            line: line_no,
            header: line.to_string(),
            found: parts.len(),
        }),
    }
}

/// Parse a statistic line such as `time:   [1.0 ns 1.1 ns 1.2 ns]`.
///
/// The prefix before the first `[` must equal the vocabulary's label, and
/// the bracketed list must hold exactly three value/unit pairs separated by
/// single spaces.
///
/// # Errors
///
/// Returns a [`FormatError`] describing the first problem found: wrong
/// label, missing `]`, wrong token count, an unparsable value or a unit that
/// is not in `vocabulary`.
///
/// # Examples
///
/// ```
/// use cri2gp_core::{parse_statistic, THROUGHPUT};
///
/// let triple = parse_statistic(
///     "thrpt:  [2.9544 GiB/s 2.9606 GiB/s 2.9664 GiB/s]",
///     3,
///     &THROUGHPUT,
/// )
/// .unwrap();
/// assert_eq!(triple.mid.value, 2.9606);
/// assert_eq!(THROUGHPUT.name(triple.mid.unit), Some("GiB/s"));
/// ```
pub fn parse_statistic(line: &str, line_no: usize, vocabulary: &UnitVocabulary) -> Result<Triple> {
    let field = vocabulary.field();
    let (prefix, values) = line.split_once('[').unwrap_or((line, ""));

    if prefix.trim() != vocabulary.label() {
        return Err(FormatError::Label {
            line: line_no,
            expected: vocabulary.label(),
            found: prefix.to_string(),
        });
    }

    let Some(values) = values.strip_suffix(']') else {
        return Err(FormatError::MissingBracket {
            line: line_no,
            field,
            text: line.to_string(),
        });
    };

    let tokens: Vec<&str> = values.split(' ').collect();
    let [low, low_unit, mid, mid_unit, high, high_unit] = tokens.as_slice() else {
        return Err(FormatError::TokenCount {
            line: line_no,
            field,
            found: tokens.len(),
        });
    };

    Ok(Triple {
        low: parse_measurement(low, low_unit, line_no, vocabulary)?,
        mid: parse_measurement(mid, mid_unit, line_no, vocabulary)?,
        high: parse_measurement(high, high_unit, line_no, vocabulary)?,
    })
}

fn parse_measurement(
    value: &str,
    unit: &str,
    line_no: usize,
    vocabulary: &UnitVocabulary,
) -> Result<Measurement> {
    let parsed = value.parse::<f64>().map_err(|_| FormatError::Number {
        line: line_no,
        field: vocabulary.field(),
        value: value.to_string(),
    })?;
    let unit = vocabulary.lookup(unit).ok_or_else(|| FormatError::UnknownUnit {
        line: line_no,
        field: vocabulary.field(),
        unit: unit.to_string(),
    })?;
    Ok(Measurement::new(parsed, unit))
}

/// Lazy iterator over the records of a report.
///
/// Each step consumes three lines. The iterator ends without error when any
/// of the three is blank or missing; after that, or after the first error,
/// it only yields `None`.
pub struct RecordReader<R> {
    reader: R,
    buf: String,
    line: usize,
    records: usize,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
            records: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    fn read_trimmed(&mut self) -> Result<String> {
        self.buf.clear();
        self.reader.read_line(&mut self.buf)?;
        self.line += 1;
        Ok(self.buf.trim().to_string())
    }

    fn read_record(&mut self) -> Result<Option<Record>> {
        let first = self.line + 1;
        let header = self.read_trimmed()?;
        let time = self.read_trimmed()?;
        let throughput = self.read_trimmed()?;

        if header.is_empty() || time.is_empty() || throughput.is_empty() {
            tracing::debug!(records = self.records, line = first, "end of report");
            return Ok(None);
        }

        let (variant, input) = parse_header(&header, first)?;
        let time = parse_statistic(&time, first + 1, &TIME)?;
        let throughput = parse_statistic(&throughput, first + 2, &THROUGHPUT)?;

        self.records += 1;
        tracing::debug!(line = first, %variant, %input, "parsed record");

        Ok(Some(Record {
            variant,
            input,
            time,
            throughput,
        }))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for RecordReader<R> {}

/// Parse a report from any buffered reader.
///
/// ```
/// use cri2gp_core::parse_records;
///
/// let report = "G/v/i\ntime: [1 ns 2 ns 3 ns]\nthrpt: [1 B/s 2 B/s 3 B/s]\n";
/// let records: Vec<_> = parse_records(report.as_bytes()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].variant, "v");
/// ```
pub fn parse_records<R: BufRead>(reader: R) -> RecordReader<R> {
    RecordReader::new(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    const SAMPLE: &str = "\
Day13_A/input_handling_baseline/right_longer
                        time:   [154.47 ns 154.77 ns 155.09 ns]
                        thrpt:  [2.9544 GiB/s 2.9606 GiB/s 2.9664 GiB/s]
Day13_A/naive/right_longer
                        time:   [1.2040 µs 1.2101 µs 1.2170 µs]
                        thrpt:  [385.55 MiB/s 387.74 MiB/s 389.71 MiB/s]
";

    fn collect(input: &str) -> Result<Vec<Record>> {
        parse_records(input.as_bytes()).collect()
    }

    #[test]
    fn test_parse_sample() {
        let records = collect(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.variant, "input_handling_baseline");
        assert_eq!(first.input, "right_longer");
        assert_eq!(first.time.low, Measurement::new(154.47, Unit::new(1)));
        assert_eq!(first.time.high, Measurement::new(155.09, Unit::new(1)));
        assert_eq!(first.throughput.mid, Measurement::new(2.9606, Unit::new(3)));

        let second = &records[1];
        assert_eq!(second.time.low.unit, TIME.lookup("µs").unwrap());
        assert_eq!(second.throughput.low.unit, THROUGHPUT.lookup("MiB/s").unwrap());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("").unwrap().is_empty());
    }

    #[test]
    fn test_blank_line_ends_report() {
        let input = format!("{SAMPLE}\nnot/a/header\ngarbage\ngarbage\n");
        assert_eq!(collect(&input).unwrap().len(), 2);
    }

    #[test]
    fn test_truncated_group_ends_report() {
        let input = "G/v/i\n  time:   [1.0 ns 1.0 ns 1.0 ns]\n";
        assert!(collect(input).unwrap().is_empty());
    }

    #[test]
    fn test_header_with_two_components() {
        let input = "Day13_A/short\ntime: [1 ns 1 ns 1 ns]\nthrpt: [1 B/s 1 B/s 1 B/s]\n";
        let err = collect(input).unwrap_err();
        assert!(matches!(err, FormatError::Header { line: 1, found: 2, .. }));
    }

    #[test]
    fn test_header_with_four_components() {
        let err = parse_header("a/b/c/d", 4).unwrap_err();
        assert!(matches!(err, FormatError::Header { line: 4, found: 4, .. }));
    }

    #[test]
    fn test_wrong_label() {
        let err = parse_statistic("thrpt: [1 ns 1 ns 1 ns]", 2, &TIME).unwrap_err();
        match err {
            FormatError::Label { expected, found, .. } => {
                assert_eq!(expected, "time:");
                assert_eq!(found.trim(), "thrpt:");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_label_without_bracket() {
        let err = parse_statistic("time: 1 ns 1 ns 1 ns", 2, &TIME).unwrap_err();
        assert!(matches!(err, FormatError::Label { .. }));
    }

    #[test]
    fn test_missing_closing_bracket() {
        let err = parse_statistic("thrpt:  [1.0 GiB/s 1.0 GiB/s 1.0 GiB/s", 3, &THROUGHPUT)
            .unwrap_err();
        match err {
            FormatError::MissingBracket { line, field, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "throughput");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_tokens_rejected() {
        let err = parse_statistic("time: [1 ns 2 ns 3 ns 4 ns]", 2, &TIME).unwrap_err();
        assert!(matches!(err, FormatError::TokenCount { found: 8, .. }));
    }

    #[test]
    fn test_double_space_rejected() {
        let err = parse_statistic("time: [1 ns  2 ns 3 ns]", 2, &TIME).unwrap_err();
        assert!(matches!(err, FormatError::TokenCount { found: 7, .. }));
    }

    #[test]
    fn test_unknown_unit() {
        let err = parse_statistic("thrpt: [1.0 Gbps 1.0 Gbps 1.0 Gbps]", 3, &THROUGHPUT)
            .unwrap_err();
        match err {
            FormatError::UnknownUnit { unit, .. } => assert_eq!(unit, "Gbps"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_statistic("time: [1.0 ns x ns 1.0 ns]", 2, &TIME).unwrap_err();
        assert!(matches!(err, FormatError::Number { ref value, .. } if value == "x"));
    }

    #[test]
    fn test_error_fuses_iterator() {
        let input = "bad\ntime: [1 ns 1 ns 1 ns]\nthrpt: [1 B/s 1 B/s 1 B/s]\nG/v/i\ntime: [1 ns 1 ns 1 ns]\nthrpt: [1 B/s 1 B/s 1 B/s]\n";
        let mut reader = parse_records(input.as_bytes());
        assert!(matches!(reader.next(), Some(Err(FormatError::Header { .. }))));
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_error_reports_statistic_line() {
        let input = format!("{SAMPLE}G/v/i\ntime: [1 ns 1 ns 1 ns]\nthrpt: [1 B/s 1 B/s 1 B/s\n");
        let err = collect(&input).unwrap_err();
        assert_eq!(err.line(), Some(9));
    }

    #[test]
    fn test_lines_read() {
        let mut reader = parse_records(SAMPLE.as_bytes());
        assert!(reader.next().is_some());
        assert_eq!(reader.lines_read(), 3);
    }
}
