//! DhHashMap: string-keyed open addressing with double hashing, tombstone
//! deletion, and prime-sized load-factor-driven resizing.

use crate::prime::next_prime;
use core::mem;

/// Initial base size; 53 is itself prime, so a fresh table has exactly 53
/// slots.
const INITIAL_BASE_SIZE: usize = 53;
/// Floor on the slot-array length. Shrink requests that would round to a
/// prime below this are ignored.
const MIN_TABLE_SIZE: usize = 53;

/// Load percentage above which insert grows the table first.
const GROW_AT_PERCENT: usize = 70;
/// Load percentage below which remove shrinks the table first.
const SHRINK_AT_PERCENT: usize = 10;

/// Base primes for the two polynomial string hashes. Distinct bases keep
/// the probe start and the probe step decorrelated.
const HASH_BASE_A: u64 = 31;
const HASH_BASE_B: u64 = 37;

#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
}

/// One slot of the table. `Empty` terminates a lookup probe. `Tombstone`
/// does not — deletion may have punched a hole in a live probe chain — but
/// it is the preferred landing slot for a later insert.
#[derive(Debug)]
enum Slot {
    Empty,
    Tombstone,
    Occupied(Entry),
}

/// Outcome of one probe walk.
enum Probe {
    /// Index of the occupied slot holding the key.
    Hit(usize),
    /// Index where an insert of this key should land: the first tombstone
    /// on the probe path, or failing that the empty slot that ended it.
    Free(usize),
}

/// Base-`base` polynomial accumulation over the key's bytes (Horner form),
/// reduced mod `modulus` at every step to stay in range.
fn polynomial_hash(key: &str, base: u64, modulus: usize) -> usize {
    let m = modulus as u64;
    let mut hash = 0u64;
    for byte in key.bytes() {
        hash = (hash * base + u64::from(byte)) % m;
    }
    hash as usize
}

/// A string-keyed hash map over a single prime-length slot array.
///
/// Collisions are resolved by double hashing: the probe sequence for a key
/// is `(hash_a + i * step) mod capacity` with `step` derived from a second
/// independent hash, so colliding keys walk different sequences instead of
/// clustering. Deleted entries leave tombstones; resizing rebuilds the
/// array at a new prime capacity and is the only point where tombstones
/// are discarded.
#[derive(Debug)]
pub struct DhHashMap {
    base_size: usize,
    count: usize,
    slots: Vec<Slot>,
}

impl DhHashMap {
    /// Creates an empty table at the minimum capacity (53 slots).
    pub fn new() -> Self {
        let size = next_prime(INITIAL_BASE_SIZE);
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || Slot::Empty);
        Self {
            base_size: INITIAL_BASE_SIZE,
            count: 0,
            slots,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current slot-array length. Always prime and at least 53.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Hit(_))
    }

    /// Inserts `key` with `value`, returning the previous value if the key
    /// was already present (overwrite in place, no new slot).
    ///
    /// Keys and values must be non-empty; this is checked in debug builds
    /// only. Grows the table before probing when the load factor exceeds
    /// 70%.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        debug_assert!(!key.is_empty(), "keys must be non-empty");
        debug_assert!(!value.is_empty(), "values must be non-empty");

        if self.load_percent() > GROW_AT_PERCENT {
            self.resize(self.base_size * 2);
        }
        match self.probe(&key) {
            Probe::Hit(i) => match &mut self.slots[i] {
                Slot::Occupied(entry) => Some(mem::replace(&mut entry.value, value)),
                // probe only reports Hit for occupied slots
                _ => unreachable!(),
            },
            Probe::Free(i) => {
                self.slots[i] = Slot::Occupied(Entry { key, value });
                self.count += 1;
                None
            }
        }
    }

    /// Looks up `key`, returning its value if present. No side effects.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.probe(key) {
            Probe::Hit(i) => match &self.slots[i] {
                Slot::Occupied(entry) => Some(entry.value.as_str()),
                _ => unreachable!(),
            },
            Probe::Free(_) => None,
        }
    }

    /// Removes `key` if present, returning its value; removing an absent
    /// key is a no-op. The slot becomes a tombstone so probe chains that
    /// ran through it still terminate correctly.
    ///
    /// Shrinks the table before probing when the load factor is below 10%
    /// (bottoming out at the minimum capacity).
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if self.load_percent() < SHRINK_AT_PERCENT {
            self.resize(self.base_size / 2);
        }
        match self.probe(key) {
            Probe::Hit(i) => {
                let old = mem::replace(&mut self.slots[i], Slot::Tombstone);
                // Only an actual removal decrements; a missed walk must
                // leave the count untouched or the load-factor policy
                // drifts from reality.
                self.count -= 1;
                match old {
                    Slot::Occupied(entry) => Some(entry.value),
                    _ => unreachable!(),
                }
            }
            Probe::Free(_) => None,
        }
    }

    /// Walks the probe sequence for `key`: start at `hash_a mod size`,
    /// advance by `step` each attempt. The capacity is prime and `step` is
    /// in `1..size`, so the walk visits every slot once before cycling.
    fn probe(&self, key: &str) -> Probe {
        let size = self.slots.len();
        let step = self.probe_step(key);
        let mut index = polynomial_hash(key, HASH_BASE_A, size);
        let mut first_free = None;
        for _ in 0..size {
            match &self.slots[index] {
                Slot::Empty => return Probe::Free(first_free.unwrap_or(index)),
                Slot::Tombstone => {
                    if first_free.is_none() {
                        first_free = Some(index);
                    }
                }
                Slot::Occupied(entry) if entry.key == key => return Probe::Hit(index),
                Slot::Occupied(_) => {}
            }
            index = (index + step) % size;
        }
        // A full cycle with no empty slot and no match. The load-factor
        // policy keeps occupancy strictly below capacity, so the cycle
        // passed at least one tombstone.
        Probe::Free(first_free.expect("full probe cycle must pass a free slot"))
    }

    /// Probe step for `key`, always in `1..size`. `hash_b + 1` would be
    /// congruent to 0 mod size exactly when `hash_b == size - 1`; that
    /// case wraps to a step of 1 so the walk still advances.
    fn probe_step(&self, key: &str) -> usize {
        let size = self.slots.len();
        match (polynomial_hash(key, HASH_BASE_B, size) + 1) % size {
            0 => 1,
            step => step,
        }
    }

    fn load_percent(&self) -> usize {
        self.count * 100 / self.slots.len()
    }

    /// Rebuilds the table at `next_prime(new_base)` slots, re-placing
    /// every live entry and discarding tombstones (resize is the only
    /// compaction point). Requests that would round below the minimum
    /// capacity are ignored.
    fn resize(&mut self, new_base: usize) {
        let new_size = next_prime(new_base);
        if new_size < MIN_TABLE_SIZE {
            return;
        }
        let mut fresh = Vec::with_capacity(new_size);
        fresh.resize_with(new_size, || Slot::Empty);
        let old_slots = mem::replace(&mut self.slots, fresh);
        self.base_size = new_base;
        self.count = 0;
        for slot in old_slots {
            if let Slot::Occupied(entry) = slot {
                self.place(entry);
            }
        }
    }

    // Insert path shared with resize: same probe walk, no load-factor
    // check, no value handed back.
    fn place(&mut self, entry: Entry) {
        match self.probe(&entry.key) {
            Probe::Free(i) => {
                self.slots[i] = Slot::Occupied(entry);
                self.count += 1;
            }
            Probe::Hit(i) => {
                self.slots[i] = Slot::Occupied(entry);
            }
        }
    }
}

impl Default for DhHashMap {
    fn default() -> Self {
        Self::new()
    }
}

// Inspection hooks for the in-crate property tests; not part of the API.
#[cfg(test)]
impl DhHashMap {
    pub(crate) fn base_size(&self) -> usize {
        self.base_size
    }

    pub(crate) fn occupied_slots(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Occupied(_)))
            .count()
    }

    pub(crate) fn tombstone_slots(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Tombstone))
            .count()
    }

    pub(crate) fn occupied_keys_are_unique(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.slots.iter().all(|s| match s {
            Slot::Occupied(entry) => seen.insert(entry.key.as_str()),
            _ => true,
        })
    }
}
