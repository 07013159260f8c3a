use std::fmt::Debug;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::options::DeleteStrategy;
use crate::sorted::{lower_bound, SortedVec};

impl<K: Ord + Debug, V> SortedVec<K, V> {
    /// Remove every element whose key is in `keys`, using the strategy from
    /// this sequence's options.
    ///
    /// Precondition: every key is present. The selection is sorted and
    /// deduplicated first, so each distinct key removes one element.
    ///
    /// # Errors
    /// `EmptySelection` if `keys` is empty, `KeyNotFound` if a key is missing.
    pub fn batch_delete(&mut self, keys: Vec<K>) -> Result<()> {
        self.batch_delete_with(keys, self.options.delete_strategy)
    }

    /// Like `batch_delete`, with an explicit strategy.
    pub fn batch_delete_with(&mut self, mut keys: Vec<K>, strategy: DeleteStrategy) -> Result<()> {
        if keys.is_empty() {
            warn!(?strategy, "batch delete rejected: empty selection");
            return Err(Error::EmptySelection);
        }
        keys.sort_unstable();
        keys.dedup();

        let before = self.entries.len();
        let result = match strategy {
            DeleteStrategy::SwapAndResort => self.swap_and_resort(&keys),
            DeleteStrategy::Compact => self
                .locate(&keys)
                .and_then(|positions| self.batch_erase(&positions)),
        };

        match &result {
            Ok(()) => debug!(
                ?strategy,
                selected = keys.len(),
                before,
                after = self.entries.len(),
                "batch delete"
            ),
            Err(e) => warn!(?strategy, error = %e, "batch delete rejected"),
        }
        result
    }

    /// Positions of `keys` (sorted, distinct), in ascending order.
    ///
    /// Each search starts just past the previous match, so the searched
    /// range only ever shrinks. Nothing is mutated.
    fn locate(&self, keys: &[K]) -> Result<Vec<usize>> {
        let mut positions = Vec::with_capacity(keys.len());
        let mut start = 0;
        for key in keys {
            let pos = start + lower_bound(&self.entries[start..], key);
            match self.entries.get(pos) {
                Some(e) if e.key == *key => {}
                _ => return Err(Error::KeyNotFound(format!("{key:?}"))),
            }
            positions.push(pos);
            start = pos + 1;
        }
        Ok(positions)
    }

    /// Swap-to-back deletion over a shrinking active window, then re-sort.
    ///
    /// ```text
    ///   keys: [1, 10, 98, 99]          window = [start, end)
    ///
    ///   [0 1 2 .. 97 98 99]   back (99) is the largest key left: consume it
    ///   [0 1 2 .. 97 98]|99   back (98) likewise
    ///   [0 1 2 .. 97]|98 99   search 1, swap with back (97), start = 2
    ///   [0 97|2 .. 96]|1 98 99
    /// ```
    ///
    /// Every displaced back element lands at the match position, which is
    /// left of the new `start`, so the window itself stays sorted. If the
    /// back is itself a selected key it must be consumed before swapping,
    /// otherwise it would be moved out of the window and never found.
    ///
    /// On a missing key the whole buffer is re-sorted before returning, so
    /// the sequence still holds all of its original elements.
    fn swap_and_resort(&mut self, keys: &[K]) -> Result<()> {
        let len = self.entries.len();
        let (mut lo, mut hi) = (0, keys.len());
        let (mut start, mut end) = (0, len);
        let mut missing = None;

        while lo < hi {
            if end > start && self.entries[end - 1].key == keys[hi - 1] {
                end -= 1;
                hi -= 1;
                continue;
            }

            let key = &keys[lo];
            let pos = start + lower_bound(&self.entries[start..end], key);
            if pos == end || self.entries[pos].key != *key {
                missing = Some(key);
                break;
            }
            self.entries.swap(pos, end - 1);
            end -= 1;
            start = (pos + 1).min(end);
            lo += 1;
        }

        if let Some(key) = missing {
            self.entries.sort();
            return Err(Error::KeyNotFound(format!("{key:?}")));
        }

        debug_assert_eq!(end, len - keys.len());
        self.entries.truncate(end);
        self.entries.sort();
        Ok(())
    }
}

impl<K: Ord, V> SortedVec<K, V> {
    /// Remove the elements at `positions` in a single left-to-right pass.
    ///
    /// `positions` must be strictly ascending and in range. Survivors keep
    /// their relative order:
    ///
    /// ```text
    ///   positions: [0, 2, 4]
    ///
    ///   [a b c d e]    write = 0, read = 1
    ///   [b a c d e]    copy b down, read skips 2
    ///   [b d c a e]    copy d down, read skips 4, read hits the end
    ///   [b d]          truncate by 3
    /// ```
    ///
    /// Elements are moved with swaps, so the removed ones collect behind the
    /// write cursor and are dropped by the final truncate.
    pub fn batch_erase(&mut self, positions: &[usize]) -> Result<()> {
        let Some(&first) = positions.first() else {
            return Err(Error::EmptySelection);
        };
        let len = self.entries.len();
        validate_positions(positions, len)?;

        let mut write = first;
        let mut read = first + 1;
        let mut next_skip = 1;
        loop {
            while next_skip < positions.len() && positions[next_skip] == read {
                next_skip += 1;
                read += 1;
            }
            if read >= len {
                break;
            }
            self.entries.swap(write, read);
            write += 1;
            read += 1;
        }

        self.entries.truncate(len - positions.len());
        Ok(())
    }
}

fn validate_positions(positions: &[usize], len: usize) -> Result<()> {
    if let Some(w) = positions.windows(2).find(|w| w[0] >= w[1]) {
        return Err(Error::InvalidPositions(format!(
            "{} does not come after {}",
            w[1], w[0]
        )));
    }
    match positions.last() {
        Some(&last) if last >= len => Err(Error::InvalidPositions(format!(
            "{last} is past length {len}"
        ))),
        _ => Ok(()),
    }
}
