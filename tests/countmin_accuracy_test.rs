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

mod common;

use common::XorShift64;
use googletest::assert_that;
use googletest::prelude::ge;
use probstruct::countmin::CountMinSketch;

// The epsilon/delta bound is probabilistic, so this scenario is not a
// proof; with a fixed stream it is a stable regression guard for the
// index derivation and the min-query.
#[test]
fn estimates_respect_the_epsilon_delta_bound() {
    let delta = 0.1;
    let epsilon = 0.01;

    let distinct: usize = 50_000;
    let inserts: u64 = 1_000_000;

    let rows = CountMinSketch::suggest_rows(1.0 - delta);
    let columns = CountMinSketch::suggest_columns(epsilon);
    assert_eq!((rows, columns), (3, 272));

    let mut sketch = CountMinSketch::new(rows, columns).unwrap();
    let mut true_counts = vec![0u64; distinct];
    let mut rng = XorShift64::seeded(0xd1ce5bada5500feu64);

    for _ in 0..inserts {
        let value = (rng.next_u64() % distinct as u64) as u32;
        true_counts[value as usize] += 1;
        sketch.add(&value.to_le_bytes());
    }
    assert_eq!(sketch.total_weight(), inserts);

    let error = (inserts as f64 * epsilon) as u64;
    let should_be_within_error = ((1.0 - delta) * distinct as f64) as u64;

    let mut within_error = 0u64;
    for value in 0..distinct as u32 {
        let estimate = sketch.frequency_of(&value.to_le_bytes());
        let true_count = true_counts[value as usize];

        // The lower bound holds unconditionally.
        assert!(estimate >= true_count);

        if estimate - true_count <= error {
            within_error += 1;
        }
    }

    assert_that!(within_error, ge(should_be_within_error));
}
