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

//! Property-based tests for parsing, aggregation and rescaling.

use cri2gp_core::{parse_records, Aggregate, Measure, Measurement, Unit, THROUGHPUT, TIME};
use proptest::prelude::*;

fn report(rows: &[(usize, usize, usize, f64)]) -> String {
    let mut out = String::new();
    for &(variant, input, unit, value) in rows {
        let unit = THROUGHPUT.units()[unit];
        out.push_str(&format!(
            "Group/variant{variant}/input{input}\n    time:   [{value} ns {value} ns {value} ns]\n    thrpt:  [{value} {unit} {value} {unit} {value} {unit}]\n"
        ));
    }
    out
}

fn first_seen(ids: impl Iterator<Item = usize>, prefix: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for id in ids {
        let name = format!("{prefix}{id}");
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

fn row_strategy() -> impl Strategy<Value = Vec<(usize, usize, usize, f64)>> {
    prop::collection::vec((0usize..5, 0usize..5, 0usize..5, 0.001f64..10_000.0), 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: Rescaling to the value's own unit is the identity.
    #[test]
    fn prop_rescale_same_unit_is_identity(value in -1e12f64..1e12, unit in 0usize..5) {
        let m = Measurement::new(value, Unit::new(unit));
        prop_assert_eq!(m.rescale(Unit::new(unit), THROUGHPUT.base()), value);
        prop_assert_eq!(m.rescale(Unit::new(unit), TIME.base()), value);
    }

    /// Property: A larger target unit gives a strictly smaller number.
    #[test]
    fn prop_rescale_is_monotonic(
        value in 0.001f64..1e6,
        unit in 0usize..5,
        lower in 0usize..5,
        upper in 0usize..5,
    ) {
        prop_assume!(lower < upper);
        let m = Measurement::new(value, Unit::new(unit));
        for base in [THROUGHPUT.base(), TIME.base()] {
            let small_target = m.rescale(Unit::new(lower), base);
            let large_target = m.rescale(Unit::new(upper), base);
            prop_assert!(small_target > large_target);
        }
    }

    /// Property: Rows and columns follow first-seen order.
    #[test]
    fn prop_encounter_order_preserved(rows in row_strategy()) {
        let text = report(&rows);
        let agg = Aggregate::from_records(parse_records(text.as_bytes())).unwrap();

        let inputs = first_seen(rows.iter().map(|r| r.1), "input");
        let variants = first_seen(rows.iter().map(|r| r.0), "variant");
        prop_assert_eq!(agg.inputs(), inputs.as_slice());
        prop_assert_eq!(agg.variants(), variants.as_slice());
    }

    /// Property: Parsing the same report twice gives equal aggregates.
    #[test]
    fn prop_parsing_is_idempotent(rows in row_strategy()) {
        let text = report(&rows);
        let a = Aggregate::from_records(parse_records(text.as_bytes())).unwrap();
        let b = Aggregate::from_records(parse_records(text.as_bytes())).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Property: The display unit is the minimum low-bound unit per input.
    #[test]
    fn prop_min_unit_is_minimum(rows in row_strategy()) {
        let text = report(&rows);
        let agg = Aggregate::from_records(parse_records(text.as_bytes())).unwrap();

        for input in agg.inputs() {
            let expected = agg
                .variants()
                .iter()
                .filter_map(|v| agg.get(input, v))
                .map(|e| e.throughput.low.unit)
                .min();
            prop_assert_eq!(agg.min_unit(input, Measure::Throughput), expected);
        }
    }
}
