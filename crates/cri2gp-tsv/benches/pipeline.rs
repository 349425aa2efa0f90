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

//! Benchmarks for the parse → aggregate → render pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cri2gp_core::{parse_records, Aggregate};
use cri2gp_tsv::to_tsv;

const UNITS: [&str; 3] = ["KiB/s", "MiB/s", "GiB/s"];

fn generate_report(variants: usize, inputs: usize) -> String {
    let mut out = String::new();
    for input in 0..inputs {
        for variant in 0..variants {
            let unit = UNITS[(input + variant) % UNITS.len()];
            out.push_str(&format!(
                "Bench/variant_{variant}/input_{input}\n\
                 \x20                       time:   [154.47 ns 154.77 ns 155.09 ns]\n\
                 \x20                       thrpt:  [2.9544 {unit} 2.9606 {unit} 2.9664 {unit}]\n"
            ));
        }
    }
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for &(variants, inputs) in &[(4, 4), (16, 16), (64, 64)] {
        let report = generate_report(variants, inputs);
        group.throughput(Throughput::Bytes(report.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("parse", format!("{variants}x{inputs}")),
            &report,
            |b, report| {
                b.iter(|| {
                    Aggregate::from_records(parse_records(black_box(report.as_bytes()))).unwrap()
                })
            },
        );

        let aggregate = Aggregate::from_records(parse_records(report.as_bytes())).unwrap();
        group.bench_with_input(
            BenchmarkId::new("render", format!("{variants}x{inputs}")),
            &aggregate,
            |b, aggregate| b.iter(|| to_tsv(black_box(aggregate)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
