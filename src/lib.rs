//! # Sorted-vector batch engine
//!
//! A sorted contiguous sequence of key/value pairs with single and batched
//! insert/delete, built to be measured against `BTreeMap`.
//!
//! ## Core idea
//! A single delete from a sorted vector shifts the whole tail, so deleting
//! k keys one at a time costs O(k * n). Doing them as one batch (locate
//! every position first, then close all the gaps in one pass) costs
//! O(k log n + n). Batch insert appends and sorts once instead of shifting
//! per element.
//!
//! ```
//! use sorted_batch::{InsertStrategy, SelectionGenerator, elements_for};
//!
//! let mut generator = SelectionGenerator::new(42);
//! let mut seq = generator.create_vector(100);
//! let selection = generator.random_selection(100, 10).unwrap();
//!
//! seq.batch_delete(selection.clone()).unwrap();
//! assert_eq!(seq.len(), 90);
//!
//! seq.batch_insert(elements_for(&selection), InsertStrategy::Sort).unwrap();
//! assert_eq!(seq.len(), 100);
//! assert!(seq.is_sorted());
//! ```

pub mod error;
pub mod options;
pub mod selection;
pub mod sorted;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use options::{DeleteStrategy, InsertStrategy, Options};
pub use selection::{elements_for, SelectionGenerator};
pub use sorted::SortedVec;
pub use types::Element;
