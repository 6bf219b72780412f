//! A read-only word set backed by a sorted `Vec`.
//!
//! Makes the most sense for a dictionary that never changes after it is built.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::slice;

use crate::WordSet;

#[derive(Clone, Debug, Default)]
pub struct SortedArraySet {
    data: Vec<String>,
}

impl SortedArraySet {
    /// Copies `words` and sorts them. Duplicates are kept.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data: Vec<String> = words.into_iter().map(Into::into).collect();
        data.sort_unstable();
        Self { data }
    }

    pub fn contains(&self, query: &str) -> bool {
        self.binary_search(query).is_some()
    }

    /// Searches the closed interval `[start, end]`, returning the index of a match.
    fn binary_search(&self, query: &str) -> Option<usize> {
        if self.data.is_empty() {
            return None;
        }
        let mut start = 0;
        let mut end = self.data.len() - 1;

        while start <= end {
            let mid = start + (end - start) / 2;
            match self.data[mid].as_str().cmp(query) {
                Ordering::Less => start = mid + 1,
                Ordering::Greater => {
                    // `end` is inclusive, stepping below index 0 empties the interval.
                    if mid == 0 {
                        return None;
                    }
                    end = mid - 1;
                }
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Words in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.data.iter())
    }
}

pub struct Iter<'a>(slice::Iter<'a, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SortedArraySet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl WordSet for SortedArraySet {
    fn contains(&self, word: &str) -> bool {
        SortedArraySet::contains(self, word)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn words(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.iter().map(Cow::Borrowed))
    }

    fn kind(&self) -> &'static str {
        "SortedArraySet"
    }
}
