use std::hash::{BuildHasher, Hasher};

const BASE: u64 = 31;

/// Polynomial rolling hash over the UTF-8 bytes of `word`.
///
/// `h = h * 31 + byte`, wrapping. Stable across runs and platforms, which keeps
/// the collision figures of a [`ChainedHashTable`](crate::ChainedHashTable)
/// reproducible.
pub fn polynomial_hash(word: &str) -> u64 {
    fold(0, word.as_bytes())
}

#[inline]
fn fold(hash: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(hash, |h, &b| h.wrapping_mul(BASE).wrapping_add(b as u64))
}

/// [`Hasher`] running [`polynomial_hash`], so std collections can be measured
/// with the same hash function as the chained table.
#[derive(Default)]
pub struct WordHasher(u64);

#[derive(Clone, Copy, Debug, Default)]
pub struct WordHashBuilder;

impl Hasher for WordHasher {
    fn finish(&self) -> u64 {
        // short words leave the top bits empty, and swiss tables use the top 7 bits
        // as control bytes. spread before handing the hash over.
        self.0.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    fn write(&mut self, bytes: &[u8]) {
        // `str` also writes a 0xff terminator through here. it is folded in like
        // any other byte.
        self.0 = fold(self.0, bytes);
    }
}

impl BuildHasher for WordHashBuilder {
    type Hasher = WordHasher;

    fn build_hasher(&self) -> Self::Hasher {
        WordHasher::default()
    }
}
