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

//! cri2gp command line interface

use clap::{ArgAction, Parser};
use cri2gp_cli::cli::ConvertArgs;
use cri2gp_cli::logging;
use std::process::ExitCode;

/// cri2gp - criterion report to gnuplot table converter
///
/// Reads `cargo bench -- --format terse --quiet` output on stdin and writes
/// a tab-separated table with one row per input case and low/mid/high
/// columns per variant.
///
/// # Examples
///
/// ```bash
/// cri2gp < data.txt > throughput.tsv
/// cri2gp --measure time < data.txt > time.tsv
/// ```
#[derive(Parser)]
#[command(name = "cri2gp")]
#[command(author, version, about = "cri2gp - criterion report to gnuplot table converter", long_about = None)]
#[command(after_help = "Environment:\n  CRI2GP_MAX_INPUT_SIZE  maximum bytes read from stdin (default: 1073741824)\n  CRI2GP_LOG             log filter, overrides -v")]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    args: ConvertArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
