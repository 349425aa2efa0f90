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

//! Gnuplot-ready TSV tables from aggregated criterion results.
//!
//! The table has one row per input case and three columns (low, mid, high)
//! per variant, which is the layout gnuplot's clustered histogram style
//! with error bars expects.
//!
//! # Example
//!
//! ```
//! use cri2gp_core::{parse_records, Aggregate};
//! use cri2gp_tsv::to_tsv;
//!
//! let report = "\
//! Day13_A/baseline/short
//!                         time:   [10.0 ns 10.0 ns 10.0 ns]
//!                         thrpt:  [1.0000 GiB/s 1.0000 GiB/s 1.0000 GiB/s]
//! Day13_A/optimized/short
//!                         time:   [5.0 ns 5.0 ns 5.0 ns]
//!                         thrpt:  [2.0000 GiB/s 2.0000 GiB/s 2.0000 GiB/s]
//! ";
//!
//! let aggregate = Aggregate::from_records(parse_records(report.as_bytes())).unwrap();
//! let table = to_tsv(&aggregate).unwrap();
//! assert_eq!(
//!     table,
//!     "Title\tlow\tbaseline\thigh\tlow\toptimized\thigh\n\
//!      short (GiB/s)\t1.0\t1.0\t1.0\t2.0\t2.0\t2.0\n"
//! );
//! ```
//!
//! ## Custom Configuration
//!
//! ```
//! use cri2gp_core::Measure;
//! use cri2gp_tsv::{MissingPolicy, ToTsvConfig};
//!
//! let config = ToTsvConfig {
//!     measure: Measure::Time,
//!     missing: MissingPolicy::Blank,
//!     ..Default::default()
//! };
//! assert_eq!(config.title, "Title");
//! ```

mod error;
mod to_tsv;

pub use error::{Result, TsvError};
pub use to_tsv::{
    format_value, header_record, to_tsv, to_tsv_with_config, to_tsv_writer_with_config,
    MissingPolicy, ToTsvConfig,
};
