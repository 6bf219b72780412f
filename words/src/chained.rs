//! Hash table with a fixed number of buckets and chaining.
//!
//! The bucket count is chosen once and never changes, so collision and load
//! figures taken from two tables of the same capacity can be compared directly.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use crate::hash::polynomial_hash;
use crate::WordSet;

#[derive(Clone, Debug)]
pub struct ChainedHashTable {
    buckets: Vec<Vec<String>>,
    len: usize,
}

impl ChainedHashTable {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            buckets: vec![Vec::new(); capacity.get()],
            len: 0,
        }
    }

    /// Builds a table of `capacity` buckets holding every distinct word of `words`.
    pub fn from_words<I, S>(capacity: NonZeroUsize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new(capacity);
        for word in words {
            table.add(word.as_ref());
        }
        table
    }

    #[inline]
    fn bucket(&self, word: &str) -> usize {
        (polynomial_hash(word) % self.buckets.len() as u64) as usize
    }

    /// Adds `word` unless already present. Returns whether it was added.
    pub fn add(&mut self, word: &str) -> bool {
        let index = self.bucket(word);
        let chain = &mut self.buckets[index];
        if chain.iter().any(|w| w == word) {
            return false;
        }
        chain.push(word.to_owned());
        self.len += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.buckets[self.bucket(word)].iter().any(|w| w == word)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Items stored beyond the first of each occupied bucket.
    pub fn count_collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|chain| chain.len().saturating_sub(1))
            .sum()
    }

    pub fn count_used_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| !chain.is_empty()).count()
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Words in bucket order, then insertion order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().flatten().map(String::as_str)
    }
}

impl WordSet for ChainedHashTable {
    fn contains(&self, word: &str) -> bool {
        ChainedHashTable::contains(self, word)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn words(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.iter().map(Cow::Borrowed))
    }

    fn kind(&self) -> &'static str {
        "ChainedHashTable"
    }
}
