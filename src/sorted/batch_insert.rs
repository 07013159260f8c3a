use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::mem;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::options::InsertStrategy;
use crate::sorted::SortedVec;
use crate::types::Element;

impl<K: Ord + Debug, V> SortedVec<K, V> {
    /// Add `elements` and restore key order.
    ///
    /// Both strategies yield the same sequence when the new keys are
    /// disjoint from the existing ones. An empty selection is a no-op.
    ///
    /// # Errors
    /// `DuplicateKey` when the options reject duplicate inserts and a key is
    /// already present or repeated within `elements`. Nothing is inserted
    /// in that case.
    pub fn batch_insert(&mut self, elements: Vec<Element<K, V>>, strategy: InsertStrategy) -> Result<()> {
        if elements.is_empty() {
            return Ok(());
        }
        if self.options.reject_duplicate_inserts {
            if let Err(e) = self.check_new_keys(&elements) {
                warn!(?strategy, error = %e, "batch insert rejected");
                return Err(e);
            }
        }

        let added = elements.len();
        self.entries.extend(elements);
        match strategy {
            InsertStrategy::Sort => self.entries.sort(),
            InsertStrategy::HeapThenSort => {
                // Heapify in place (BinaryHeap::from reuses the allocation), then sort.
                let heap = BinaryHeap::from(mem::take(&mut self.entries));
                self.entries = heap.into_vec();
                self.entries.sort();
            }
        }

        debug!(?strategy, added, after = self.entries.len(), "batch insert");
        Ok(())
    }

    fn check_new_keys(&self, elements: &[Element<K, V>]) -> Result<()> {
        let mut keys: Vec<&K> = elements.iter().map(|e| &e.key).collect();
        keys.sort_unstable();
        if let Some(w) = keys.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::DuplicateKey(format!("{:?}", w[0])));
        }
        match keys.into_iter().find(|key| self.lookup(key).is_some()) {
            Some(key) => Err(Error::DuplicateKey(format!("{key:?}"))),
            None => Ok(()),
        }
    }
}
