//! dh-hashmap: A single-threaded, string-keyed hash map built on open
//! addressing with double hashing and prime-sized slot arrays.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the whole container in one contiguous slot array so every
//!   operation is a single bounded probe walk with no per-entry pointer
//!   chasing.
//! - Layers:
//!   - prime: leaf primality helpers that pick valid table capacities.
//!     The capacity is always prime so the double-hash step is coprime
//!     with it and a probe walk visits every slot before repeating.
//!   - DhHashMap: the table itself — slot array, probing, tombstone
//!     deletion, and load-factor-driven resizing.
//!
//! Constraints
//! - Single-threaded: exclusive access is `&mut self`; no internal
//!   locking or atomics.
//! - Keys and values are owned `String`s; each `Occupied` slot exclusively
//!   owns its entry and releases it on overwrite, removal, or drop.
//! - Deletion marks a `Tombstone` rather than emptying the slot, so probe
//!   chains that ran through the slot still terminate correctly. Resize is
//!   the only mechanism that discards tombstones.
//! - Load factor is held between 10% and 70% (up to a one-operation
//!   transient) by doubling or halving the base size and re-rounding to
//!   the next prime; the capacity never drops below the initial 53 slots.
//!
//! Failure surface
//! - Lookup misses are `None` and removal of an absent key is a no-op;
//!   there is no error enum because absence is the only caller-visible
//!   outcome.
//!
//! Notes and non-goals
//! - No iteration or ordering guarantees.
//! - The hash functions are simple polynomial accumulators; they are not
//!   collision-resistant against adversarial keys.
//! - Resize briefly holds the old and new slot arrays at once, so callers
//!   should expect a transient ~2x peak in table memory.

mod dh_hash_map;
mod dh_hash_map_proptest;
mod prime;

// Public surface
pub use dh_hash_map::DhHashMap;
