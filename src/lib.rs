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

//! Probabilistic data structures for approximate stream analytics.
//!
//! The crate currently provides a [Count-Min sketch](countmin), a
//! fixed-memory frequency table for data streams. It trades exactness
//! for space: estimates never undercount and overcount only by a
//! bounded amount with high probability.
//!
//! # Example
//!
//! ```rust
//! use probstruct::countmin::CountMinSketch;
//!
//! let mut sketch = CountMinSketch::new(10, 6000).unwrap();
//!
//! for i in 0..100_000u32 {
//!     sketch.add(&i.to_le_bytes());
//! }
//!
//! for i in 0..100_000u32 {
//!     assert!(sketch.frequency_of(&i.to_le_bytes()) >= 1);
//! }
//! ```

pub mod countmin;
pub mod error;
pub mod hash;
