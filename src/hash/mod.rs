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

//! Hash primitives used by the sketches.

/// Seed passed to the hash primitive on every sketch operation.
///
/// The value is fixed: two sketches built over the same item stream
/// must map each item to the same buckets, and a seed baked into the
/// sketch state would be one more piece of configuration to keep in
/// sync on copy.
pub const UPDATE_SEED: u32 = 0;

/// A 128-bit hash over raw bytes, returned as two 64-bit halves.
///
/// Implementations must be deterministic for a given `(item, seed)`
/// pair and should have strong avalanche behavior with low correlation
/// between the two output halves; the sketch accuracy bounds assume
/// both. Any function meeting that contract is substitutable.
pub trait Hash128 {
    /// Hashes `item` under `seed`, returning `(h0, h1)`.
    fn hash128(&self, item: &[u8], seed: u32) -> (u64, u64);
}

/// The default [`Hash128`] strategy: MurmurHash3 x64 128.
#[derive(Debug, Clone, Copy, Default)]
pub struct MurmurHash3X64128;

impl Hash128 for MurmurHash3X64128 {
    fn hash128(&self, item: &[u8], seed: u32) -> (u64, u64) {
        mur3::murmurhash3_x64_128(item, seed)
    }
}
