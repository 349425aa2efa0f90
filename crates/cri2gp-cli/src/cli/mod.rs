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

//! CLI argument definitions.
//!
//! With no flags the tool emits the throughput table and fails on any
//! missing (input, variant) cell. Flags only widen that default.

use crate::commands;
use crate::error::CliError;
use clap::{Args, ValueEnum};
use cri2gp_core::Measure;
use cri2gp_tsv::{MissingPolicy, ToTsvConfig};

/// Statistic to tabulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MeasureArg {
    /// Throughput columns (`thrpt:` line), binary prefixes
    #[default]
    Throughput,
    /// Time columns (`time:` line), decimal prefixes
    Time,
}

impl From<MeasureArg> for Measure {
    fn from(arg: MeasureArg) -> Self {
        match arg {
            MeasureArg::Throughput => Measure::Throughput,
            MeasureArg::Time => Measure::Time,
        }
    }
}

/// Handling of input cases that lack a variant's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MissingArg {
    /// Abort with an error
    #[default]
    Fail,
    /// Leave the three cells empty
    Blank,
}

impl From<MissingArg> for MissingPolicy {
    fn from(arg: MissingArg) -> Self {
        match arg {
            MissingArg::Fail => MissingPolicy::Fail,
            MissingArg::Blank => MissingPolicy::Blank,
        }
    }
}

/// Table options for the conversion.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Statistic to emit
    #[arg(short, long, value_enum, default_value_t = MeasureArg::Throughput)]
    pub measure: MeasureArg,

    /// What to do when an input case lacks a variant
    #[arg(long, value_enum, default_value_t = MissingArg::Fail)]
    pub missing: MissingArg,

    /// Label of the first header cell
    #[arg(short, long, default_value = "Title")]
    pub title: String,
}

impl ConvertArgs {
    /// Table configuration selected by these arguments.
    pub fn config(&self) -> ToTsvConfig {
        ToTsvConfig {
            title: self.title.clone(),
            measure: self.measure.into(),
            missing: self.missing.into(),
            ..Default::default()
        }
    }

    /// Read the report from stdin and write the table to stdout.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading, parsing, rendering or writing fails. Nothing
    /// is written to stdout in that case.
    pub fn execute(self) -> Result<(), CliError> {
        let input = commands::read_stdin()?;
        let table = commands::convert(&input, self.config())?;
        commands::write_output(&table)
    }
}
