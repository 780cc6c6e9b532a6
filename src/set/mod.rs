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

//! Quadratic-probing integer hash set.
//!
//! The set keeps its keys in a flat slot array whose length is always prime,
//! probing at offsets `step * step` from the key's residue. Growth rehashes
//! into the next prime at least double the current capacity and never drops
//! keys.
//!
//! # Usage
//!
//! ```rust
//! use quadprobe::set::{InsertOutcome, QuadProbeSet};
//!
//! let mut set = QuadProbeSet::new(100, 0.5).unwrap();
//!
//! for key in [3, 1, 4, 1, 5] {
//!     set.insert(key);
//! }
//!
//! assert_eq!(set.len(), 4); // the duplicate 1 is ignored
//! assert!(set.contains(5));
//! assert!(!set.contains(9));
//! ```

mod table;

pub use self::table::InsertOutcome;
pub use self::table::QuadProbeSet;
