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

use googletest::assert_that;
use googletest::prelude::ge;
use googletest::prelude::lt;
use quadprobe::common::random::SplitMix64;
use quadprobe::error::ErrorKind;
use quadprobe::profile::LOAD_FACTORS;
use quadprobe::profile::average_probe_costs;
use quadprobe::profile::unique_keys;

#[test]
fn test_unique_keys_deterministic_for_seed() {
    let mut a = SplitMix64::seeded(99);
    let mut b = SplitMix64::seeded(99);
    assert_eq!(unique_keys(500, &mut a), unique_keys(500, &mut b));
}

#[test]
fn test_profile_shape_and_bounds() {
    let mut rng = SplitMix64::seeded(2024);
    let costs = average_probe_costs(3, 500, &mut rng).unwrap();

    assert_eq!(costs.len(), LOAD_FACTORS.len());
    for cost in &costs {
        // Every insert examines at least one slot.
        assert_that!(cost.avg_probes, ge(1.0));
        // The average stays far below a full-table scan.
        assert_that!(cost.avg_probes, lt(500.0));
    }
}

#[test]
fn test_probe_cost_grows_with_load_factor() {
    let mut rng = SplitMix64::seeded(7);
    let costs = average_probe_costs(5, 1000, &mut rng).unwrap();

    // A sparse table probes less than a nearly full one.
    let sparse = costs.first().unwrap();
    let dense = costs.last().unwrap();
    assert_eq!(sparse.load_factor, 0.1);
    assert_eq!(dense.load_factor, 0.9);
    assert_that!(dense.avg_probes, ge(sparse.avg_probes));
}

#[test]
fn test_profile_rejects_zero_config() {
    let mut rng = SplitMix64::seeded(1);
    let err = average_probe_costs(0, 10, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

    let err = average_probe_costs(10, 0, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
