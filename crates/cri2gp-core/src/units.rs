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

//! Measurement kinds, unit vocabularies and rescaling.
//!
//! Criterion prints every statistic with a unit chosen per value. To plot
//! several variants on one axis the values must share a unit, so each unit
//! is kept as its position in an ascending vocabulary and values are
//! rescaled by powers of the vocabulary's base.

use std::fmt;

/// An ordered list of unit labels for one measurement kind.
///
/// Units are listed in ascending magnitude; adjacent units differ by a
/// factor of [`base`](Self::base).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitVocabulary {
    field: &'static str,
    label: &'static str,
    units: &'static [&'static str],
    base: f64,
}

/// Time units, picoseconds to seconds.
pub const TIME: UnitVocabulary = UnitVocabulary {
    field: "time",
    label: "time:",
    units: &["ps", "ns", "µs", "ms", "s"],
    base: 1000.0,
};

/// Throughput units, bytes per second to tebibytes per second.
pub const THROUGHPUT: UnitVocabulary = UnitVocabulary {
    field: "throughput",
    label: "thrpt:",
    units: &["B/s", "KiB/s", "MiB/s", "GiB/s", "TiB/s"],
    base: 1024.0,
};

impl UnitVocabulary {
    /// Human readable name of the statistic, used in error messages.
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Label that prefixes the statistic line in the report.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Unit labels in ascending order of magnitude.
    pub const fn units(&self) -> &'static [&'static str] {
        self.units
    }

    /// Ratio between two adjacent units.
    pub const fn base(&self) -> f64 {
        self.base
    }

    /// Find the unit for a label, e.g. `"MiB/s"`.
    pub fn lookup(&self, token: &str) -> Option<Unit> {
        self.units.iter().position(|u| *u == token).map(Unit)
    }

    /// Label of a unit, or `None` if the index is out of range.
    pub fn name(&self, unit: Unit) -> Option<&'static str> {
        self.units.get(unit.0).copied()
    }
}

/// The statistic a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Measure {
    /// Wall-clock time per iteration.
    Time,
    /// Bytes processed per second.
    #[default]
    Throughput,
}

impl Measure {
    /// The unit vocabulary for this measure.
    pub const fn vocabulary(self) -> &'static UnitVocabulary {
        match self {
            Self::Time => &TIME,
            Self::Throughput => &THROUGHPUT,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vocabulary().field())
    }
}

/// Position of a unit inside its vocabulary.
///
/// A smaller index is a smaller magnitude, so `Ord` compares magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit(usize);

impl Unit {
    /// Wrap a raw vocabulary index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw vocabulary index.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A magnitude paired with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Numeric value as printed in the report.
    pub value: f64,
    /// Unit the value is expressed in.
    pub unit: Unit,
}

impl Measurement {
    /// Create a measurement.
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Express the value in `target` units.
    ///
    /// Computes `value * base^(unit - target)`. Rescaling to the value's own
    /// unit returns it unchanged.
    ///
    /// ```
    /// use cri2gp_core::{Measurement, THROUGHPUT};
    ///
    /// let gib = THROUGHPUT.lookup("GiB/s").unwrap();
    /// let mib = THROUGHPUT.lookup("MiB/s").unwrap();
    /// let m = Measurement::new(1.5, gib);
    /// assert_eq!(m.rescale(mib, THROUGHPUT.base()), 1536.0);
    /// ```
    pub fn rescale(&self, target: Unit, base: f64) -> f64 {
        // Vocabularies hold five units, so the difference always fits.
        let exponent = self.unit.0 as i32 - target.0 as i32;
        self.value * base.powi(exponent)
    }
}

/// Low, mid and high bounds of one statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple {
    /// Lower confidence bound.
    pub low: Measurement,
    /// Point estimate.
    pub mid: Measurement,
    /// Upper confidence bound.
    pub high: Measurement,
}

impl Triple {
    /// The three measurements in low, mid, high order.
    pub const fn measurements(&self) -> [Measurement; 3] {
        [self.low, self.mid, self.high]
    }
}
