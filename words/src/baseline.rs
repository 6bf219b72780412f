//! [`WordSet`] for the library containers the custom ones are measured against.

use std::borrow::Cow;
use std::collections::hash_map::RandomState;
use std::collections::{BTreeSet, HashSet};

use rustc_hash::FxHashSet;

use crate::hash::WordHashBuilder;
use crate::WordSet;

macro_rules! impl_word_set {
    ($ty:ty, $kind:literal) => {
        impl WordSet for $ty {
            fn contains(&self, word: &str) -> bool {
                <$ty>::contains(self, word)
            }

            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn words(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
                Box::new(self.iter().map(|w| Cow::Borrowed(w.as_str())))
            }

            fn kind(&self) -> &'static str {
                $kind
            }
        }
    };
}

impl_word_set!(BTreeSet<String>, "BTreeSet");
impl_word_set!(HashSet<String, RandomState>, "HashSet");
impl_word_set!(FxHashSet<String>, "FxHashSet");
impl_word_set!(HashSet<String, WordHashBuilder>, "PolyHashSet");

/// Linear scan over an unsorted list. Only practical with small query samples.
impl WordSet for Vec<String> {
    fn contains(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn words(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.iter().map(|w| Cow::Borrowed(w.as_str())))
    }

    fn kind(&self) -> &'static str {
        "LinearScan"
    }
}
