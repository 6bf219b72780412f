//! Word-set containers and the harness that compares them.
//!
//! Three hand-rolled containers answer "is this word in the dictionary?":
//!
//! - [`SortedArraySet`]: sorted `Vec` + binary search.
//! - [`CharTrie`]: one node per distinct prefix.
//! - [`ChainedHashTable`]: fixed bucket count with chaining, instrumented for
//!   collision and load figures.
//!
//! All of them, plus the std and `rustc-hash` sets in [`baseline`], implement
//! [`WordSet`], which is all the [`harness`] needs.
//!
//! ```rust
//! use words::{harness, CharTrie, SortedArraySet};
//!
//! let dictionary = ["cat", "car", "dog"];
//! let sorted = SortedArraySet::new(dictionary);
//! let (trie, _skipped) = CharTrie::from_words(dictionary);
//!
//! let queries = ["cat", "dog", "bird"];
//! let report = harness::time_lookup(&queries, &sorted);
//! assert_eq!(report.found, 2);
//! assert!(!trie.contains("ca"));
//! ```

use std::borrow::Cow;

pub use chained::ChainedHashTable;
pub use error::{Error, Result};
pub use rng::Rand;
pub use sorted::SortedArraySet;
pub use trie::CharTrie;

pub mod baseline;
mod chained;
pub mod corpus;
mod error;
pub mod harness;
pub mod hash;
pub mod rng;
pub mod sorted;
pub mod trie;

#[cfg(test)]
mod proptests;

/// Read-only membership interface shared by every container under test.
///
/// Built containers are never mutated through this trait, so a `&dyn WordSet`
/// can be read from several threads at once.
pub trait WordSet {
    fn contains(&self, word: &str) -> bool;

    /// Number of stored words. Whether duplicates count depends on the container.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward iteration over the stored words.
    fn words(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_>;

    /// Short name used in reports.
    fn kind(&self) -> &'static str;
}
