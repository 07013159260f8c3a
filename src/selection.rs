use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::sorted::SortedVec;
use crate::types::Element;

/// Fixture key type: dense integers `0..size`.
pub type Key = i64;

/// Fixture value type.
pub type Value = String;

/// Produces the random key sets and fixtures fed to the batch operations.
///
/// Owns its RNG, so a seeded generator replays the same selections and a
/// failing test can be reproduced from its seed.
///
/// Guarantees on every selection: keys are distinct and drawn from
/// `0..size`, which is exactly the key space of `create_vector(size)`.
pub struct SelectionGenerator {
    rng: StdRng,
}

impl SelectionGenerator {
    /// Deterministic generator.
    pub fn new(seed: u64) -> Self {
        SelectionGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        SelectionGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Keys `0..size` in random order.
    pub fn shuffled_keys(&mut self, size: usize) -> Vec<Key> {
        let mut keys: Vec<Key> = (0..size as Key).collect();
        keys.shuffle(&mut self.rng);
        keys
    }

    /// `select_size` distinct keys out of `0..size`.
    ///
    /// # Errors
    /// `SelectionTooLarge` unless `select_size < size`.
    pub fn random_selection(&mut self, size: usize, select_size: usize) -> Result<Vec<Key>> {
        if select_size >= size {
            return Err(Error::SelectionTooLarge {
                requested: select_size,
                available: size,
            });
        }
        let mut keys = self.shuffled_keys(size);
        keys.truncate(select_size);
        Ok(keys)
    }

    /// Sorted vector with keys `0..size` and values `key % 100`.
    ///
    /// Built from a shuffled insertion order so it pays the same sort a
    /// real caller would.
    pub fn create_vector(&mut self, size: usize) -> SortedVec<Key, Value> {
        self.shuffled_keys(size)
            .into_iter()
            .map(|k| Element::new(k, (k % 100).to_string()))
            .collect()
    }

    /// The tree-map baseline with the same contents as `create_vector`.
    pub fn create_map(&mut self, size: usize) -> BTreeMap<Key, Value> {
        self.shuffled_keys(size)
            .into_iter()
            .map(|k| (k, (k % 100).to_string()))
            .collect()
    }
}

/// Insert selection for `keys`, valued with the key's decimal form.
pub fn elements_for(keys: &[Key]) -> Vec<Element<Key, Value>> {
    keys.iter().map(|&k| Element::new(k, k.to_string())).collect()
}
