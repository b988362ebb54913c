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

//! Count-Min sketch implementation for frequency estimation.
//!
//! The Count-Min sketch provides approximate frequency counts for streaming data
//! in fixed memory: estimates never undercount, and overcount only by a bounded
//! amount with configurable probability.
//!
//! # Usage
//!
//! ```rust
//! use probstruct::countmin::CountMinSketch;
//!
//! let mut sketch = CountMinSketch::new(5, 256).unwrap();
//!
//! sketch.add(b"apple");
//! sketch.add_with_weight(b"banana", 3);
//!
//! let banana = sketch.frequency_of(b"banana");
//! assert!(banana >= 3);
//!
//! sketch.clear();
//! assert_eq!(sketch.frequency_of(b"banana"), 0);
//! ```
//!
//! # Configuration Helpers
//!
//! ```rust
//! use probstruct::countmin::CountMinSketch;
//!
//! let columns = CountMinSketch::suggest_columns(0.01);
//! let rows = CountMinSketch::suggest_rows(0.9);
//!
//! let _sketch = CountMinSketch::new(rows, columns).unwrap();
//! ```

mod indices;
mod matrix;

mod sketch;
pub use self::sketch::CountMinSketch;
