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

//! Parser and data model for criterion benchmark reports.
//!
//! This crate turns the terse text report printed by
//! `cargo bench -- --format terse --quiet` into typed records, and groups
//! those records into an [`Aggregate`] keyed by input case and variant.
//!
//! # Input Shape
//!
//! A report is a sequence of three-line records:
//!
//! ```text
//! Day13_A/baseline/short
//!                         time:   [10.0 ns 10.0 ns 10.0 ns]
//!                         thrpt:  [1.0000 GiB/s 1.0000 GiB/s 1.0000 GiB/s]
//! ```
//!
//! The header line names `<group>/<variant>/<input-case>`. The two statistic
//! lines carry the low, mid and high bounds of the confidence interval.
//!
//! # Example
//!
//! ```
//! use cri2gp_core::{parse_records, Aggregate, Measure};
//!
//! let report = "\
//! Day13_A/baseline/short
//!     time:   [10.0 ns 10.0 ns 10.0 ns]
//!     thrpt:  [512.00 MiB/s 512.00 MiB/s 512.00 MiB/s]
//! Day13_A/optimized/short
//!     time:   [5.0 ns 5.0 ns 5.0 ns]
//!     thrpt:  [1.0000 GiB/s 1.0000 GiB/s 1.0000 GiB/s]
//! ";
//!
//! let aggregate = Aggregate::from_records(parse_records(report.as_bytes())).unwrap();
//! assert_eq!(aggregate.inputs(), ["short"]);
//! assert_eq!(aggregate.variants(), ["baseline", "optimized"]);
//!
//! let unit = aggregate.min_unit("short", Measure::Throughput).unwrap();
//! assert_eq!(Measure::Throughput.vocabulary().name(unit), Some("MiB/s"));
//! ```

pub mod aggregate;
mod error;
pub mod record;
pub mod units;

pub use aggregate::{Aggregate, DisplayUnits, Entry};
pub use error::{FormatError, Result};
pub use record::{parse_header, parse_records, parse_statistic, Record, RecordReader};
pub use units::{Measure, Measurement, Triple, Unit, UnitVocabulary, THROUGHPUT, TIME};
