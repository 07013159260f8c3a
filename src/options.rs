/// How a batch delete restores order after removing the selected keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStrategy {
    /// Swap each match to the back of a shrinking window, truncate, then
    /// re-sort everything. Kept as a comparison baseline: the swaps scramble
    /// the survivors, so the final O(n log n) sort is mandatory.
    SwapAndResort,
    /// Locate all positions, then close the gaps in one left-to-right pass.
    /// Survivors keep their relative order and no sort is needed.
    #[default]
    Compact,
}

/// How a batch insert restores order after appending the new elements.
///
/// Both produce the same sequence; they exist to be measured against
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertStrategy {
    /// Append, then sort.
    #[default]
    Sort,
    /// Append, heapify the whole buffer, then sort.
    HeapThenSort,
}

/// Per-sequence configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Strategy used by `SortedVec::batch_delete`.
    pub delete_strategy: DeleteStrategy,
    /// Reject batch inserts whose keys are already present or repeated.
    /// Off by default: the check costs a binary search per inserted key.
    pub reject_duplicate_inserts: bool,
}

impl Options {
    pub fn delete_strategy(mut self, strategy: DeleteStrategy) -> Self {
        self.delete_strategy = strategy;
        self
    }

    pub fn reject_duplicate_inserts(mut self, reject: bool) -> Self {
        self.reject_duplicate_inserts = reject;
        self
    }
}
