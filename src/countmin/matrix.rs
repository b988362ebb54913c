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

/// Fixed-size grid of counters, one row per hash function.
///
/// Cells are stored row-major in a single owned buffer; cloning the
/// matrix deep-copies every cell. Counters wrap at u64 width on
/// overflow.
#[derive(Debug, Clone)]
pub(super) struct CounterMatrix {
    columns: usize,
    cells: Vec<u64>,
}

impl CounterMatrix {
    /// Allocates a `rows x columns` grid with every cell set to 0.
    ///
    /// Allocation failure aborts the process (standard `Vec` semantics);
    /// there is no partially-constructed matrix.
    pub(super) fn new(rows: u8, columns: u32) -> Self {
        let columns = columns as usize;
        CounterMatrix {
            columns,
            cells: vec![0; rows as usize * columns],
        }
    }

    /// Adds `weight` to one cell, wrapping on overflow.
    pub(super) fn increment(&mut self, row: usize, column: usize, weight: u64) {
        let cell = &mut self.cells[row * self.columns + column];
        *cell = cell.wrapping_add(weight);
    }

    /// Returns the current value of one cell.
    pub(super) fn get(&self, row: usize, column: usize) -> u64 {
        self.cells[row * self.columns + column]
    }

    /// Sets every cell back to 0.
    pub(super) fn clear(&mut self) {
        self.cells.fill(0);
    }
}
