//! Timed lookup batches over any [`WordSet`].
//!
//! Nothing in here prints. Callers get plain records back and decide how to
//! present them.

use std::time::{Duration, Instant};

use crate::{ChainedHashTable, WordSet};

/// Appended to a word to make it a guaranteed miss.
pub const CORRUPTION_SUFFIX: &str = "xyzzz";

/// Outcome of one [`time_lookup`] batch.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupReport {
    pub kind: &'static str,
    pub queries: usize,
    pub found: usize,
    pub elapsed: Duration,
}

impl LookupReport {
    pub fn missed(&self) -> usize {
        self.queries - self.found
    }

    /// `found / queries`, or 0 for an empty batch.
    pub fn fraction_found(&self) -> f64 {
        ratio(self.found, self.queries)
    }

    /// `missed / queries`, or 0 for an empty batch.
    pub fn misspelled_ratio(&self) -> f64 {
        ratio(self.missed(), self.queries)
    }

    pub fn nanos_per_lookup(&self) -> f64 {
        if self.queries == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.queries as f64
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Looks up every query in `set` and times the whole batch.
pub fn time_lookup<S, Q>(queries: &[Q], set: &S) -> LookupReport
where
    S: WordSet + ?Sized,
    Q: AsRef<str>,
{
    let start = Instant::now();
    let mut found = 0;
    for query in queries {
        if set.contains(query.as_ref()) {
            found += 1;
        }
    }
    let elapsed = start.elapsed();

    LookupReport {
        kind: set.kind(),
        queries: queries.len(),
        found,
        elapsed,
    }
}

/// Queries that `set` does not contain, in query order.
pub fn find_misspelled<'q, S, Q>(queries: &'q [Q], set: &S) -> Vec<&'q str>
where
    S: WordSet + ?Sized,
    Q: AsRef<str>,
{
    queries
        .iter()
        .map(|query| query.as_ref())
        .filter(|query| !set.contains(query))
        .collect()
}

/// Copies `source`, corrupting its leading `floor(num_samples * fraction_yes)`
/// words with [`CORRUPTION_SUFFIX`].
///
/// The output always has `source.len()` entries; `num_samples` only sizes the
/// corrupted prefix.
pub fn create_mixed_dataset<S: AsRef<str>>(
    source: &[S],
    num_samples: usize,
    fraction_yes: f64,
) -> Vec<String> {
    let num_fake = (num_samples as f64 * fraction_yes).floor();
    source
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let word = word.as_ref();
            if (i as f64) < num_fake {
                format!("{word}{CORRUPTION_SUFFIX}")
            } else {
                word.to_owned()
            }
        })
        .collect()
}

/// Runs `build` and reports how long it took.
pub fn build_timed<T>(build: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let built = build();
    (built, start.elapsed())
}

/// Efficiency figures of a [`ChainedHashTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableStats {
    pub items: usize,
    pub capacity: usize,
    pub collisions: usize,
    pub used_buckets: usize,
    pub longest_chain: usize,
}

impl TableStats {
    pub fn of(table: &ChainedHashTable) -> Self {
        Self {
            items: table.len(),
            capacity: table.capacity(),
            collisions: table.count_collisions(),
            used_buckets: table.count_used_buckets(),
            longest_chain: table.longest_chain(),
        }
    }

    /// Items per bucket.
    pub fn load_factor(&self) -> f64 {
        ratio(self.items, self.capacity)
    }

    /// Share of buckets holding at least one item.
    pub fn bucket_utilization(&self) -> f64 {
        ratio(self.used_buckets, self.capacity)
    }
}
