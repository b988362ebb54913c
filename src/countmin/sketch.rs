// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::iter::Take;

use crate::countmin::indices::BucketIndices;
use crate::countmin::matrix::CounterMatrix;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::Hash128;
use crate::hash::MurmurHash3X64128;
use crate::hash::UPDATE_SEED;

/// A Count-Min sketch over raw byte items.
///
/// The sketch keeps a `rows x columns` grid of u64 counters. Adding an
/// item increments one counter in every row; querying an item returns
/// the minimum of those counters, so an estimate can exceed the true
/// count (colliding items inflate cells) but never fall below it.
///
/// Sizing follows the standard bounds: with `rows = ceil(ln(1/delta))`
/// and `columns = ceil(e/epsilon)`, each estimate exceeds the true
/// count by at most `epsilon * total_weight` with probability at least
/// `1 - delta`. See [`suggest_rows`](Self::suggest_rows) and
/// [`suggest_columns`](Self::suggest_columns).
///
/// Both dimensions are fixed at construction. Counters wrap at u64
/// width instead of saturating or signaling; the accuracy bound
/// assumes the stream stays far from that limit.
///
/// Mutation requires `&mut self`, so cross-thread use needs external
/// exclusion (or one sketch per thread). Cloning produces a fully
/// independent copy.
///
/// # Examples
///
/// ```
/// use probstruct::countmin::CountMinSketch;
///
/// let mut sketch = CountMinSketch::new(3, 272).unwrap();
/// sketch.add(b"apple");
/// sketch.add(b"apple");
///
/// assert!(sketch.frequency_of(b"apple") >= 2);
/// assert_eq!(sketch.frequency_of(b"grape"), 0);
/// ```
#[derive(Debug, Clone)]
pub struct CountMinSketch<H = MurmurHash3X64128> {
    rows: u8,
    columns: u32,
    total_weight: u64,
    matrix: CounterMatrix,
    hasher: H,
}

impl CountMinSketch {
    /// Creates a sketch with the default MurmurHash3 x64 128 hash.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if either dimension is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstruct::countmin::CountMinSketch;
    ///
    /// let sketch = CountMinSketch::new(5, 256).unwrap();
    /// assert_eq!(sketch.rows(), 5);
    /// assert_eq!(sketch.columns(), 256);
    ///
    /// assert!(CountMinSketch::new(0, 256).is_err());
    /// ```
    pub fn new(rows: u8, columns: u32) -> Result<Self, Error> {
        Self::with_hasher(rows, columns, MurmurHash3X64128)
    }

    /// Suggests the number of rows for a target confidence `1 - delta`.
    ///
    /// Formula: `ceil(ln(1/delta))`.
    ///
    /// # Panics
    ///
    /// Panics if `confidence` is not in (0.0, 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// use probstruct::countmin::CountMinSketch;
    ///
    /// assert_eq!(CountMinSketch::suggest_rows(0.9), 3);
    /// assert_eq!(CountMinSketch::suggest_rows(0.99), 5);
    /// ```
    pub fn suggest_rows(confidence: f64) -> u8 {
        assert!(
            confidence > 0.0 && confidence < 1.0,
            "confidence must be between 0.0 and 1.0 (exclusive)"
        );

        let rows = (1.0 / (1.0 - confidence)).ln().ceil();
        (rows as u8).max(1)
    }

    /// Suggests the number of columns for a target relative error.
    ///
    /// Formula: `ceil(e/epsilon)`, where `epsilon` bounds the
    /// overcount per unit of total inserted weight.
    ///
    /// # Panics
    ///
    /// Panics if `relative_error` is not greater than 0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstruct::countmin::CountMinSketch;
    ///
    /// assert_eq!(CountMinSketch::suggest_columns(0.01), 272);
    /// ```
    pub fn suggest_columns(relative_error: f64) -> u32 {
        assert!(
            relative_error > 0.0,
            "relative_error must be greater than 0.0"
        );

        let columns = (std::f64::consts::E / relative_error).ceil();
        (columns as u32).max(1)
    }
}

impl<H: Hash128> CountMinSketch<H> {
    /// Creates a sketch with an explicit hash strategy.
    ///
    /// The strategy must satisfy the [`Hash128`] contract; the
    /// accuracy bounds inherit its quality.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if either dimension is 0.
    pub fn with_hasher(rows: u8, columns: u32, hasher: H) -> Result<Self, Error> {
        if rows == 0 {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "rows must be greater than 0",
            )
            .with_context("rows", rows)
            .with_context("columns", columns));
        }
        if columns == 0 {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "columns must be greater than 0",
            )
            .with_context("rows", rows)
            .with_context("columns", columns));
        }

        Ok(CountMinSketch {
            rows,
            columns,
            total_weight: 0,
            matrix: CounterMatrix::new(rows, columns),
            hasher,
        })
    }

    /// Adds one occurrence of `item`.
    ///
    /// Equivalent to [`add_with_weight`](Self::add_with_weight) with
    /// weight 1.
    pub fn add(&mut self, item: &[u8]) {
        self.add_with_weight(item, 1);
    }

    /// Adds `weight` occurrences of `item`.
    ///
    /// Increments exactly one counter per row. Any byte content is
    /// valid, including the empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstruct::countmin::CountMinSketch;
    ///
    /// let mut sketch = CountMinSketch::new(5, 256).unwrap();
    /// sketch.add_with_weight(b"banana", 3);
    /// assert!(sketch.frequency_of(b"banana") >= 3);
    /// ```
    pub fn add_with_weight(&mut self, item: &[u8], weight: u64) {
        for (row, column) in self.bucket_indices(item).enumerate() {
            self.matrix.increment(row, column, weight);
        }
        self.total_weight = self.total_weight.wrapping_add(weight);
    }

    /// Returns the estimated total weight added for `item`.
    ///
    /// The estimate is the minimum counter across this item's rows. It
    /// is never below the true weight added for this exact byte string
    /// since the last [`clear`](Self::clear); with the sizing formulas
    /// it exceeds the truth by more than `epsilon * total_weight` only
    /// with probability `delta`.
    pub fn frequency_of(&self, item: &[u8]) -> u64 {
        let mut estimate = u64::MAX;
        for (row, column) in self.bucket_indices(item).enumerate() {
            estimate = estimate.min(self.matrix.get(row, column));
        }
        estimate
    }

    /// Resets every counter and the stream weight to 0.
    ///
    /// Afterwards [`frequency_of`](Self::frequency_of) returns 0 for
    /// every item until the next add.
    pub fn clear(&mut self) {
        self.matrix.clear();
        self.total_weight = 0;
    }

    /// Returns the configured number of rows (hash functions).
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the configured number of columns per row.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns true if nothing has been added since construction or
    /// the last [`clear`](Self::clear).
    pub fn is_empty(&self) -> bool {
        self.total_weight == 0
    }

    /// Returns the sum of all weights added since the last
    /// [`clear`](Self::clear).
    ///
    /// This is the `total_weight` term of the accuracy bound. It wraps
    /// at u64 width like the counters.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Returns the relative error this configuration supports,
    /// `e / columns`.
    pub fn relative_error(&self) -> f64 {
        std::f64::consts::E / f64::from(self.columns)
    }

    /// One hash of `item`, expanded to one column index per row.
    fn bucket_indices(&self, item: &[u8]) -> Take<BucketIndices> {
        let hash = self.hasher.hash128(item, UPDATE_SEED);
        BucketIndices::new(hash, self.columns).take(self.rows as usize)
    }
}
