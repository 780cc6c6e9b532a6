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

//! Probe-cost measurement across load factors.
//!
//! Drives repeated insert workloads against [`QuadProbeSet`] through its
//! public API only and reports the average number of probe steps per insert
//! at each target load factor. Useful for empirically checking how probe
//! cost degrades as tables fill up.

use std::collections::HashSet;

use crate::common::random::RandomSource;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::set::QuadProbeSet;

/// Target load factors swept by a profiling run: 0.1 through 0.9.
pub const LOAD_FACTORS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// Average probe cost observed at one target load factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeCost {
    /// The load factor the measured tables were configured with.
    pub load_factor: f64,
    /// Probe steps per insert, averaged over all trials.
    pub avg_probes: f64,
}

/// Generates `count` distinct random keys from `rng`.
///
/// Uniqueness is enforced with a set-based check, so the draw keeps going
/// until `count` distinct values have been produced.
pub fn unique_keys(count: usize, rng: &mut impl RandomSource) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key = rng.next_i64();
        if seen.insert(key) {
            keys.push(key);
        }
    }
    keys
}

/// Measures average probe counts per insert across [`LOAD_FACTORS`].
///
/// One batch of `keys_per_trial` distinct random keys is drawn from `rng` and
/// reused for every measurement. For each load factor, `trials` fresh sets
/// sized for the whole batch are filled with it via
/// [`QuadProbeSet::insert_counting`], and the probe total is averaged over
/// `trials * keys_per_trial` inserts.
///
/// # Errors
///
/// Returns [`ErrorKind::ConfigInvalid`] if `trials` or `keys_per_trial` is
/// zero.
pub fn average_probe_costs(
    trials: usize,
    keys_per_trial: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<ProbeCost>, Error> {
    if trials == 0 {
        return Err(Error::new(
            ErrorKind::ConfigInvalid,
            "trials must be positive",
        ));
    }
    if keys_per_trial == 0 {
        return Err(Error::new(
            ErrorKind::ConfigInvalid,
            "keys_per_trial must be positive",
        ));
    }

    let keys = unique_keys(keys_per_trial, rng);
    let mut costs = Vec::with_capacity(LOAD_FACTORS.len());

    for load_factor in LOAD_FACTORS {
        let mut probe_total = 0usize;
        for _ in 0..trials {
            let mut set = QuadProbeSet::new(keys_per_trial, load_factor)?;
            for &key in &keys {
                let (_, probes) = set.insert_counting(key);
                probe_total += probes;
            }
        }
        costs.push(ProbeCost {
            load_factor,
            avg_probes: probe_total as f64 / (trials * keys_per_trial) as f64,
        });
    }

    Ok(costs)
}
