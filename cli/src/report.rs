use std::fmt;

use words::harness::{LookupReport, TableStats};

/// Width of a full fraction-found bar.
const SCALE: f64 = 30.0;

/// One line per lookup batch: kind, fraction found, time per lookup, and a bar.
pub struct LookupLine<'a>(pub &'a LookupReport);

impl fmt::Display for LookupLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write!(
            f,
            "{:<16} found={:.4} time={:>8.1} ns/item misspelled={:.4} | ",
            report.kind,
            report.fraction_found(),
            report.nanos_per_lookup(),
            report.misspelled_ratio(),
        )?;
        let columns = report.fraction_found() * SCALE;
        for _ in 0..columns as usize {
            write!(f, "\u{1fb0e}")?;
        }
        Ok(())
    }
}

/// Closing figures for a trie and a chained table built from the same words.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub trie_nodes: usize,
    pub trie_skipped: usize,
    pub table: TableStats,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = &self.table;
        let buckets = table.capacity;
        writeln!(f, "Count-Nodes: {}", self.trie_nodes)?;
        writeln!(f, "Skipped-Words: {}", self.trie_skipped)?;
        writeln!(f, "Count-Items: {}", table.items)?;
        writeln!(f, "Count-Collisions[{buckets}]: {}", table.collisions)?;
        writeln!(f, "Count-Used-Buckets[{buckets}]: {}", table.used_buckets)?;
        writeln!(f, "Longest-Chain[{buckets}]: {}", table.longest_chain)?;
        writeln!(f, "Load-Factor[{buckets}]: {:.4}", table.load_factor())?;
        write!(f, "Bucket-Utilization[{buckets}]: {:.4}", table.bucket_utilization())
    }
}
