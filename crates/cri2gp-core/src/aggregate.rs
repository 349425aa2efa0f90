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

//! Grouping of parsed records by input case and variant.

use crate::error::Result;
use crate::record::Record;
use crate::units::{Measure, Triple, Unit};
use std::collections::HashMap;

/// Statistics stored for one (input case, variant) cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Time per iteration.
    pub time: Triple,
    /// Throughput.
    pub throughput: Triple,
}

impl Entry {
    /// The triple for `measure`.
    pub const fn triple(&self, measure: Measure) -> &Triple {
        match measure {
            Measure::Time => &self.time,
            Measure::Throughput => &self.throughput,
        }
    }
}

/// Units chosen to display one input case's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUnits {
    /// Smallest low-bound time unit across variants.
    pub time: Unit,
    /// Smallest low-bound throughput unit across variants.
    pub throughput: Unit,
}

impl DisplayUnits {
    /// The unit for `measure`.
    pub const fn get(&self, measure: Measure) -> Unit {
        match measure {
            Measure::Time => self.time,
            Measure::Throughput => self.throughput,
        }
    }
}

/// Records grouped as input case → variant → [`Entry`].
///
/// The map itself is unordered; row and column order come from the two
/// encounter-order lists, which record each name the first time it is seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    inputs: Vec<String>,
    variants: Vec<String>,
    table: HashMap<String, HashMap<String, Entry>>,
}

impl Aggregate {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an aggregate from a record stream, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `records`.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        let mut aggregate = Self::new();
        for record in records {
            aggregate.insert(record?);
        }

        for (input, units) in aggregate.display_units() {
            tracing::debug!(
                input,
                time = units.time.index(),
                throughput = units.throughput.index(),
                "display units"
            );
        }

        Ok(aggregate)
    }

    /// Insert a record, returning the entry it replaced.
    ///
    /// A later record for the same (input, variant) pair overwrites the
    /// earlier one.
    pub fn insert(&mut self, record: Record) -> Option<Entry> {
        let Record {
            variant,
            input,
            time,
            throughput,
        } = record;

        if !self.inputs.contains(&input) {
            self.inputs.push(input.clone());
        }
        if !self.variants.contains(&variant) {
            self.variants.push(variant.clone());
        }

        let replaced = self
            .table
            .entry(input.clone())
            .or_default()
            .insert(variant.clone(), Entry { time, throughput });

        if replaced.is_some() {
            tracing::warn!(%input, %variant, "duplicate benchmark result, keeping the later one");
        }
        replaced
    }

    /// Input case names in first-seen order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Variant names in first-seen order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Look up one cell.
    pub fn get(&self, input: &str, variant: &str) -> Option<&Entry> {
        self.table.get(input)?.get(variant)
    }

    /// Smallest unit among the low bounds of `input`'s entries.
    ///
    /// Returns `None` for an unknown input case.
    pub fn min_unit(&self, input: &str, measure: Measure) -> Option<Unit> {
        self.table
            .get(input)?
            .values()
            .map(|entry| entry.triple(measure).low.unit)
            .min()
    }

    /// Shorthand for [`min_unit`](Self::min_unit) with [`Measure::Time`].
    pub fn min_time_unit(&self, input: &str) -> Option<Unit> {
        self.min_unit(input, Measure::Time)
    }

    /// Shorthand for [`min_unit`](Self::min_unit) with [`Measure::Throughput`].
    pub fn min_throughput_unit(&self, input: &str) -> Option<Unit> {
        self.min_unit(input, Measure::Throughput)
    }

    /// Display units for every input case, in encounter order.
    pub fn display_units(&self) -> Vec<(&str, DisplayUnits)> {
        self.inputs
            .iter()
            .filter_map(|input| {
                let units = DisplayUnits {
                    time: self.min_time_unit(input)?,
                    throughput: self.min_throughput_unit(input)?,
                };
                Some((input.as_str(), units))
            })
            .collect()
    }

    /// Number of distinct (input, variant) cells.
    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }

    /// True when no record has been inserted.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
