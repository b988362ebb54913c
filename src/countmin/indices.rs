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

/// Column indices derived from one 128-bit hash, one per row.
///
/// Uses the Kirsch-Mitzenmacher recurrence: the first half of the hash
/// is an accumulator advanced by the second half before each yield, so
/// row `i` observes `h0 + (i + 1) * h1` reduced modulo the column
/// count. One strong hash per item is enough for every row; the
/// derived indices approximate independent hashing rather than
/// guaranteeing it.
///
/// The iterator never ends; the sketch takes one index per row.
#[derive(Debug, Clone)]
pub(super) struct BucketIndices {
    accumulator: u64,
    step: u64,
    columns: u64,
}

impl BucketIndices {
    /// Starts the recurrence from hash halves `(h0, h1)`.
    ///
    /// `columns` must be nonzero; the sketch enforces that at
    /// construction, before any derivation happens.
    pub(super) fn new((h0, h1): (u64, u64), columns: u32) -> Self {
        BucketIndices {
            accumulator: h0,
            step: h1,
            columns: u64::from(columns),
        }
    }
}

impl Iterator for BucketIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.accumulator = self.accumulator.wrapping_add(self.step);
        Some((self.accumulator % self.columns) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_recurrence() {
        let indices: Vec<usize> = BucketIndices::new((100, 7), 10).take(4).collect();
        assert_eq!(indices, vec![7, 4, 1, 8]);
    }

    #[test]
    fn test_same_hash_same_indices() {
        let hash = (0x9e3779b97f4a7c15, 0xc2b2ae3d27d4eb4f);
        let first: Vec<usize> = BucketIndices::new(hash, 272).take(16).collect();
        let second: Vec<usize> = BucketIndices::new(hash, 272).take(16).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_indices_stay_in_range() {
        for index in BucketIndices::new((u64::MAX, u64::MAX), 60).take(255) {
            assert!(index < 60);
        }
    }

    #[test]
    fn test_single_column_always_zero() {
        let indices: Vec<usize> = BucketIndices::new((123, 456), 1).take(8).collect();
        assert!(indices.iter().all(|&index| index == 0));
    }
}
