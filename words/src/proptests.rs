use super::*;

use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::thread;

use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // small alphabet so prefixes, extensions and shared buckets come up often
    "[a-d]{0,6}"
}

fn trie_word_strategy() -> impl Strategy<Value = String> + Clone {
    // U+03B1 is outside what the trie accepts
    "[ab\u{e9}\u{3b1}]{0,5}"
}

fn capacity_strategy() -> impl Strategy<Value = NonZeroUsize> {
    (1usize..64).prop_map(|n| NonZeroUsize::new(n).unwrap())
}

fn validate_table(table: &ChainedHashTable) {
    assert_eq!(
        table.count_used_buckets() + table.count_collisions(),
        table.len(),
        "every item is either first in its bucket or a collision"
    );
    assert_eq!(table.iter().count(), table.len());
    assert!(table.longest_chain() <= table.len());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(
        inserted in prop::collection::vec(word_strategy(), 0..200),
        queries in prop::collection::vec(word_strategy(), 0..200),
        capacity in capacity_strategy(),
    ) {
        let reference: BTreeSet<String> = inserted.iter().cloned().collect();
        let sorted = SortedArraySet::new(inserted.iter().cloned());
        let (trie, skipped) = CharTrie::from_words(&inserted);
        let table = ChainedHashTable::from_words(capacity, &inserted);

        prop_assert_eq!(skipped, 0);
        prop_assert_eq!(sorted.len(), inserted.len());
        prop_assert_eq!(trie.len(), reference.len());
        prop_assert_eq!(table.len(), reference.len());

        for query in queries.iter().chain(&inserted) {
            let expected = reference.contains(query);
            prop_assert_eq!(sorted.contains(query), expected, "sorted, {:?}", query);
            prop_assert_eq!(trie.contains(query), expected, "trie, {:?}", query);
            prop_assert_eq!(table.contains(query), expected, "table, {:?}", query);
        }

        let got: Vec<String> = trie.iter().collect();
        let expected: Vec<String> = reference.iter().cloned().collect();
        prop_assert_eq!(got, expected);
        validate_table(&table);
    }

    #[test]
    fn prop_inserted_words_stay_contained(
        inserted in prop::collection::vec(word_strategy(), 0..100),
        capacity in capacity_strategy(),
    ) {
        let mut trie = CharTrie::new();
        let mut table = ChainedHashTable::new(capacity);
        let mut collisions = 0;

        for (i, word) in inserted.iter().enumerate() {
            let new = trie.insert(word).unwrap();
            prop_assert_eq!(new, !inserted[..i].contains(word));
            prop_assert_eq!(table.add(word), new);

            for earlier in &inserted[..=i] {
                prop_assert!(trie.contains(earlier));
                prop_assert!(table.contains(earlier));
            }

            prop_assert!(table.count_collisions() >= collisions);
            prop_assert!(table.count_used_buckets() <= table.len());
            prop_assert_eq!(table.capacity(), capacity.get());
            collisions = table.count_collisions();
        }
    }

    #[test]
    fn prop_trie_prefixes_and_extensions(inserted in prop::collection::vec(word_strategy(), 1..50)) {
        let (trie, _) = CharTrie::from_words(&inserted);

        for word in &inserted {
            for end in 0..word.len() {
                let prefix = &word[..end];
                prop_assert_eq!(trie.contains(prefix), inserted.iter().any(|w| w == prefix));
            }
            let extended = format!("{word}z");
            prop_assert!(!trie.contains(&extended));
        }
    }

    #[test]
    fn prop_trie_skips_unsupported(inserted in prop::collection::vec(trie_word_strategy(), 0..100)) {
        let (trie, skipped) = CharTrie::from_words(&inserted);

        let supported: BTreeSet<&String> = inserted
            .iter()
            .filter(|w| w.chars().all(|c| (c as u32) <= 0xFF))
            .collect();
        let rejected = inserted.iter().filter(|w| w.contains('\u{3b1}')).count();

        prop_assert_eq!(skipped, rejected);
        prop_assert_eq!(trie.len(), supported.len());
        for word in &inserted {
            prop_assert_eq!(trie.contains(word), supported.contains(word));
        }
    }

    #[test]
    fn prop_mixed_dataset_length(
        source in prop::collection::vec(word_strategy(), 0..100),
        num_samples in 0usize..200,
        fraction_yes in 0.0f64..=1.0,
    ) {
        let mixed = harness::create_mixed_dataset(&source, num_samples, fraction_yes);
        prop_assert_eq!(mixed.len(), source.len());

        let corrupted = ((num_samples as f64 * fraction_yes).floor() as usize).min(source.len());
        for (i, (got, original)) in mixed.iter().zip(&source).enumerate() {
            if i < corrupted {
                prop_assert_eq!(got, &format!("{original}{}", harness::CORRUPTION_SUFFIX));
            } else {
                prop_assert_eq!(got, original);
            }
        }
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let words = ["a", "b", "ab", "abc", "ba", ""];

    for_each_permutation(&words, |perm| {
        let (trie, _) = CharTrie::from_words(&perm);
        // root, a, b, ab, abc, ba
        assert_eq!(trie.count_nodes(), 6);
        assert_eq!(trie.iter().collect::<Vec<_>>(), ["", "a", "ab", "abc", "b", "ba"]);

        let table = ChainedHashTable::from_words(NonZeroUsize::new(3).unwrap(), &perm);
        assert_eq!(table.len(), 6);
        validate_table(&table);

        let sorted = SortedArraySet::new(perm.iter().copied());
        assert_eq!(sorted.iter().collect::<Vec<_>>(), ["", "a", "ab", "abc", "b", "ba"]);
    });
}

#[test]
fn concurrent_reads_after_build() {
    let dictionary: Vec<String> = (0..2000).map(|i| format!("word{i}")).collect();
    let sorted = SortedArraySet::new(dictionary.iter().cloned());
    let (trie, _) = CharTrie::from_words(&dictionary);
    let table = ChainedHashTable::from_words(NonZeroUsize::new(257).unwrap(), &dictionary);
    let sets: [&(dyn WordSet + Sync); 3] = [&sorted, &trie, &table];

    thread::scope(|s| {
        for chunk in dictionary.chunks(500) {
            s.spawn(move || {
                for set in sets {
                    let report = harness::time_lookup(chunk, set);
                    assert_eq!(report.found, chunk.len(), "{}", report.kind);
                    let mixed = harness::create_mixed_dataset(chunk, chunk.len(), 1.0);
                    assert_eq!(harness::time_lookup(&mixed, set).found, 0);
                }
            });
        }
    });
}
