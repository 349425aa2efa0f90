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

//! cri2gp CLI library.
//!
//! Reads the terse output of a criterion run on stdin and prints a
//! tab-separated table on stdout, one row per input case and one
//! low/mid/high triple per variant:
//!
//! ```bash
//! cargo bench --bench day13_impls -- --format terse --quiet > data.txt
//! cri2gp < data.txt > data.tsv
//! ```
//!
//! # Options
//!
//! - `--measure time|throughput`: statistic to tabulate (default: throughput)
//! - `--missing fail|blank`: handling of absent (input, variant) cells (default: fail)
//! - `--title TEXT`: first header cell (default: `Title`)
//! - `-v`, `-vv`: log more detail to stderr
//!
//! # Environment
//!
//! - `CRI2GP_MAX_INPUT_SIZE`: maximum bytes read from stdin (default 1 GB)
//! - `CRI2GP_LOG`: tracing filter, overrides `-v`
//!
//! # Error Handling
//!
//! All operations return `Result<_, CliError>`. Any error aborts the run
//! before a single byte of the table is written.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
