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

use crate::common::prime::next_prime;
use crate::error::Error;
use crate::error::ErrorKind;

/// State of a single table slot.
///
/// An explicit tag instead of a reserved sentinel key, so every `i64` value
/// is a legal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Empty,
    Occupied(i64),
}

/// Result of an insert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was stored in a previously empty slot.
    Inserted,
    /// The key was already in the set; nothing changed.
    AlreadyPresent,
    /// The probe sequence visited `capacity` slots without finding the key
    /// or a free slot; nothing changed.
    TableFull,
}

impl InsertOutcome {
    /// Returns true iff the insert stored a new key.
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}

/// Open-addressed `i64` hash set with quadratic probing.
///
/// Keys live in a flat slot array whose length is always prime. A lookup or
/// insert probes at offsets `step * step` from the key's residue, for
/// `step = 0, 1, 2, ...` up to the capacity. When the live-key count exceeds
/// `floor(capacity * max_load)`, the table rehashes into the next prime at
/// least double the current capacity; rehashing keeps doubling until every
/// key fits under the new threshold, so no key is ever dropped.
#[derive(Debug, Clone)]
pub struct QuadProbeSet {
    slots: Vec<Slot>,
    num_keys: usize,
    max_load: f64,
    growth_threshold: usize,
}

impl QuadProbeSet {
    /// Create a set sized to hold `max_expected_keys` keys without rehashing,
    /// under the target load factor `max_load`.
    ///
    /// The initial capacity is the smallest prime at least
    /// `ceil(max_expected_keys / max_load)`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `max_expected_keys` is zero or
    /// `max_load` is not strictly between 0 and 1.
    pub fn new(max_expected_keys: usize, max_load: f64) -> Result<Self, Error> {
        if max_expected_keys == 0 {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "max_expected_keys must be positive",
            ));
        }
        if !(max_load > 0.0 && max_load < 1.0) {
            return Err(
                Error::new(ErrorKind::ConfigInvalid, "max_load must be in (0, 1)")
                    .with_context("max_load", max_load),
            );
        }

        let capacity = next_prime((max_expected_keys as f64 / max_load).ceil() as u64) as usize;
        Ok(Self {
            slots: vec![Slot::Empty; capacity],
            num_keys: 0,
            max_load,
            growth_threshold: Self::threshold(capacity, max_load),
        })
    }

    /// Tests whether `key` is in the set.
    ///
    /// Probing stops at the first empty slot or after `capacity` steps, so a
    /// lookup is bounded by one full pass over the table.
    pub fn contains(&self, key: i64) -> bool {
        match Self::find_in_slots(&self.slots, key).0 {
            Some(index) => matches!(self.slots[index], Slot::Occupied(_)),
            None => false,
        }
    }

    /// Inserts `key`, growing the table if the load threshold is exceeded.
    ///
    /// Duplicates are reported as [`InsertOutcome::AlreadyPresent`] and leave
    /// the set unchanged.
    pub fn insert(&mut self, key: i64) -> InsertOutcome {
        self.insert_counting(key).0
    }

    /// Inserts `key` and additionally reports the number of probe steps the
    /// operation took (slots examined, at least 1).
    ///
    /// The outcome is identical to [`QuadProbeSet::insert`]; the count feeds
    /// the probe-cost profiler.
    pub fn insert_counting(&mut self, key: i64) -> (InsertOutcome, usize) {
        let (found, probes) = Self::find_in_slots(&self.slots, key);
        let Some(index) = found else {
            return (InsertOutcome::TableFull, probes);
        };
        if let Slot::Occupied(_) = self.slots[index] {
            return (InsertOutcome::AlreadyPresent, probes);
        }

        self.slots[index] = Slot::Occupied(key);
        self.num_keys += 1;
        if self.num_keys > self.growth_threshold {
            self.rehash();
        }
        (InsertOutcome::Inserted, probes)
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    /// Returns true iff the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Current slot count. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Target load factor fixed at construction.
    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    /// Current occupancy ratio, `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.num_keys as f64 / self.slots.len() as f64
    }

    /// Live-key count above which the next insert triggers a rehash.
    pub fn growth_threshold(&self) -> usize {
        self.growth_threshold
    }

    /// Iterates occupied `(index, key)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied(key) => Some((index, *key)),
                Slot::Empty => None,
            })
    }

    /// Probe for `key` in `slots`.
    ///
    /// Returns the index of the slot that either holds `key` or is empty,
    /// plus the number of probe steps taken. The index is `None` when
    /// `slots.len()` steps found neither.
    ///
    /// The probe offset for step `s` is `s * s` from the key's residue; the
    /// offsets accumulate from the same base rather than resetting, which for
    /// a prime slot count bounds the scan at one pass over the table.
    fn find_in_slots(slots: &[Slot], key: i64) -> (Option<usize>, usize) {
        let capacity = slots.len();
        let mut index = key.rem_euclid(capacity as i64) as usize;

        for step in 0..capacity {
            match slots[index] {
                Slot::Empty => return (Some(index), step + 1),
                Slot::Occupied(stored) if stored == key => return (Some(index), step + 1),
                Slot::Occupied(_) => {}
            }
            // base + (step + 1)^2 differs from base + step^2 by 2 * step + 1
            index = (index + 2 * step + 1) % capacity;
        }
        (None, capacity)
    }

    /// Rehash into a larger prime-sized table, keeping every key.
    ///
    /// The candidate capacity starts at the next prime at least double the
    /// current one and doubles again until the live count fits under the new
    /// threshold and every key finds a slot.
    fn rehash(&mut self) {
        let mut new_capacity = next_prime(2 * self.slots.len() as u64) as usize;
        loop {
            let new_threshold = Self::threshold(new_capacity, self.max_load);
            if self.num_keys <= new_threshold {
                if let Some(new_slots) = Self::replace_all(&self.slots, new_capacity) {
                    self.slots = new_slots;
                    self.growth_threshold = new_threshold;
                    return;
                }
            }
            new_capacity = next_prime(2 * new_capacity as u64) as usize;
        }
    }

    /// Re-place every occupied slot into fresh storage of `new_capacity`
    /// slots. Returns `None` if any key fails to find a free slot within the
    /// probe bound.
    fn replace_all(old_slots: &[Slot], new_capacity: usize) -> Option<Vec<Slot>> {
        let mut new_slots = vec![Slot::Empty; new_capacity];
        for slot in old_slots {
            if let Slot::Occupied(key) = *slot {
                let (index, _) = Self::find_in_slots(&new_slots, key);
                new_slots[index?] = Slot::Occupied(key);
            }
        }
        Some(new_slots)
    }

    fn threshold(capacity: usize, max_load: f64) -> usize {
        (capacity as f64 * max_load) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::prime::is_prime;

    #[test]
    fn test_new_sizes_by_load_factor() {
        let set = QuadProbeSet::new(10, 0.7).unwrap();

        // ceil(10 / 0.7) = 15, next prime is 17
        assert_eq!(set.capacity(), 17);
        assert_eq!(set.growth_threshold(), 11);
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.max_load(), 0.7);
        assert_eq!(set.load_factor(), 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(QuadProbeSet::new(0, 0.5).is_err());
        assert!(QuadProbeSet::new(10, 0.0).is_err());
        assert!(QuadProbeSet::new(10, 1.0).is_err());
        assert!(QuadProbeSet::new(10, -0.3).is_err());
        assert!(QuadProbeSet::new(10, f64::NAN).is_err());

        let err = QuadProbeSet::new(10, 1.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_contains_on_empty_table() {
        let set = QuadProbeSet::new(10, 0.7).unwrap();
        for key in [0, 1, -1, i64::MAX, i64::MIN] {
            assert!(!set.contains(key));
        }
    }

    #[test]
    fn test_insert_and_contains_round_trip() {
        let mut set = QuadProbeSet::new(10, 0.7).unwrap();

        for key in 0..10 {
            assert_eq!(set.insert(key), InsertOutcome::Inserted);
            assert!(set.contains(key));
        }
        assert_eq!(set.len(), 10);
        assert!(!set.contains(10));
    }

    #[test]
    fn test_duplicate_inserts_are_ignored() {
        let mut set = QuadProbeSet::new(10, 0.7).unwrap();

        assert_eq!(set.insert(42), InsertOutcome::Inserted);
        for _ in 0..4 {
            assert_eq!(set.insert(42), InsertOutcome::AlreadyPresent);
        }
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rehash_doubles_to_next_prime() {
        let mut set = QuadProbeSet::new(10, 0.7).unwrap();
        assert_eq!(set.capacity(), 17);

        // Threshold is 11; the 12th key pushes the count past it.
        for key in 0..11 {
            set.insert(key);
        }
        assert_eq!(set.capacity(), 17);

        set.insert(11);
        assert_eq!(set.capacity(), 37); // next_prime(34)
        assert_eq!(set.growth_threshold(), 25);
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn test_rehash_keeps_every_key() {
        let mut set = QuadProbeSet::new(4, 0.5).unwrap();

        for key in 0..500 {
            assert_eq!(set.insert(key * 7919), InsertOutcome::Inserted);
        }
        assert_eq!(set.len(), 500);
        for key in 0..500 {
            assert!(set.contains(key * 7919));
        }
    }

    #[test]
    fn test_capacity_stays_prime_across_growth() {
        let mut set = QuadProbeSet::new(2, 0.5).unwrap();
        assert!(is_prime(set.capacity() as u64));

        let mut seen = vec![set.capacity()];
        for key in 0..200 {
            set.insert(key);
            if *seen.last().unwrap() != set.capacity() {
                seen.push(set.capacity());
                assert!(is_prime(set.capacity() as u64));
            }
        }
        assert!(seen.len() > 1, "growth should have happened");
    }

    #[test]
    fn test_len_stays_under_threshold_after_insert() {
        let mut set = QuadProbeSet::new(3, 0.9).unwrap();
        for key in 0..100 {
            set.insert(key);
            assert!(set.len() <= set.growth_threshold());
            assert!(set.len() <= set.capacity());
        }
    }

    #[test]
    fn test_negative_keys() {
        let mut set = QuadProbeSet::new(10, 0.7).unwrap();

        for key in [-1, -17, -34, i64::MIN, i64::MIN + 1] {
            assert_eq!(set.insert(key), InsertOutcome::Inserted);
        }
        for key in [-1, -17, -34, i64::MIN, i64::MIN + 1] {
            assert!(set.contains(key));
        }
        assert!(!set.contains(-2));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_key_occupies_exactly_one_slot() {
        let mut set = QuadProbeSet::new(20, 0.7).unwrap();

        // 5 and 5 + capacity collide on the same base residue.
        let capacity = set.capacity() as i64;
        set.insert(5);
        set.insert(5 + capacity);
        set.insert(5 + 2 * capacity);

        for key in [5, 5 + capacity, 5 + 2 * capacity] {
            let occurrences = set.iter().filter(|&(_, k)| k == key).count();
            assert_eq!(occurrences, 1);
        }
    }

    #[test]
    fn test_iter_yields_storage_order() {
        let mut set = QuadProbeSet::new(10, 0.7).unwrap();
        for key in [30, 10, 20] {
            set.insert(key);
        }

        let pairs: Vec<(usize, i64)> = set.iter().collect();
        assert_eq!(pairs.len(), set.len());
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
        for (index, key) in pairs {
            assert_eq!(set.slots[index], Slot::Occupied(key));
        }
    }

    #[test]
    fn test_insert_counting_reports_probe_steps() {
        let mut set = QuadProbeSet::new(10, 0.7).unwrap();

        // First insert into an empty table lands on the first probe.
        let (outcome, probes) = set.insert_counting(3);
        assert_eq!(outcome, InsertOutcome::Inserted);
        assert_eq!(probes, 1);

        // A key with the same residue must probe past the occupied slot.
        let collider = 3 + set.capacity() as i64;
        let (outcome, probes) = set.insert_counting(collider);
        assert_eq!(outcome, InsertOutcome::Inserted);
        assert!(probes > 1);

        // Re-inserting finds the key on the same path it was stored by.
        let (outcome, probes) = set.insert_counting(collider);
        assert_eq!(outcome, InsertOutcome::AlreadyPresent);
        assert!(probes > 1);
    }

    #[test]
    fn test_load_factor_tracks_occupancy() {
        let mut set = QuadProbeSet::new(10, 0.7).unwrap();
        set.insert(1);
        set.insert(2);
        assert_eq!(set.load_factor(), 2.0 / 17.0);
    }
}
