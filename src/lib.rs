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

//! An open-addressed integer hash set using quadratic probing.
//!
//! The set stores `i64` keys in a flat, prime-sized slot array and resolves
//! collisions by quadratic probing. When the live-key count exceeds a
//! configured fraction of the capacity, the table rehashes into the next
//! prime at least double the current size.
//!
//! # Usage
//!
//! ```rust
//! use quadprobe::set::{InsertOutcome, QuadProbeSet};
//!
//! let mut set = QuadProbeSet::new(10, 0.7).unwrap();
//! assert_eq!(set.capacity(), 17);
//!
//! assert_eq!(set.insert(42), InsertOutcome::Inserted);
//! assert_eq!(set.insert(42), InsertOutcome::AlreadyPresent);
//!
//! assert!(set.contains(42));
//! assert!(!set.contains(7));
//! assert_eq!(set.len(), 1);
//! ```
//!
//! The [`profile`] module measures average probe counts across load factors
//! using only the public insert API; see [`profile::average_probe_costs`].

pub mod common;
pub mod error;
pub mod profile;
pub mod set;
