use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use rustc_hash::FxHashSet;
use words::harness::{self, TableStats};
use words::hash::WordHashBuilder;
use words::{corpus, rng, CharTrie, ChainedHashTable, Rand, SortedArraySet, WordSet};

use report::{LookupLine, Summary};

mod report;

/// How many misspelled book words to show at debug level.
const MISSPELLED_PREVIEW: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "wordbench")]
#[command(about = "Compare word-set containers on dictionary and free-text lookups")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long, default_value = "data/words")]
    dictionary: PathBuf,

    /// Free text to spell check against the dictionary
    #[arg(short, long)]
    book: Option<PathBuf>,

    /// Bucket count of the chained hash tables
    #[arg(long, default_value = "100000")]
    buckets: NonZeroUsize,

    /// Passes over the mixed hit/miss datasets
    #[arg(long, default_value_t = 2)]
    trials: usize,

    /// Fraction steps per pass, from 0.0 to 1.0 inclusive
    #[arg(long, default_value = "10")]
    steps: NonZeroUsize,

    /// Size of the random query sample for the linear scan
    #[arg(long, default_value_t = 1000)]
    sample: usize,

    /// Seed for the query sample, defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
}

/// Every container under test, built from one word list.
struct Containers {
    btree: BTreeSet<String>,
    hash: HashSet<String>,
    fx: FxHashSet<String>,
    poly: HashSet<String, WordHashBuilder>,
    sorted: SortedArraySet,
    trie: CharTrie,
    trie_skipped: usize,
    table: ChainedHashTable,
}

impl Containers {
    fn build(words: &[String], buckets: NonZeroUsize) -> Self {
        let (btree, elapsed): (BTreeSet<String>, _) =
            harness::build_timed(|| words.iter().cloned().collect());
        info!("Creation time: {:.3}s (BTreeSet)", elapsed.as_secs_f64());
        let hash: HashSet<String> = words.iter().cloned().collect();
        let fx: FxHashSet<String> = words.iter().cloned().collect();
        let poly: HashSet<String, WordHashBuilder> = words.iter().cloned().collect();

        let (sorted, elapsed) = harness::build_timed(|| SortedArraySet::new(words.iter().cloned()));
        info!("Creation time: {:.3}s (SortedArraySet)", elapsed.as_secs_f64());

        let ((trie, trie_skipped), elapsed) = harness::build_timed(|| CharTrie::from_words(words));
        info!("Creation time: {:.3}s (CharTrie)", elapsed.as_secs_f64());
        if trie_skipped > 0 {
            info!("CharTrie skipped {trie_skipped} words with unsupported characters");
        }

        let (table, elapsed) =
            harness::build_timed(|| ChainedHashTable::from_words(buckets, words));
        info!("Creation time: {:.3}s (ChainedHashTable)", elapsed.as_secs_f64());

        Self {
            btree,
            hash,
            fx,
            poly,
            sorted,
            trie,
            trie_skipped,
            table,
        }
    }

    fn all(&self) -> [&dyn WordSet; 7] {
        [
            &self.btree,
            &self.hash,
            &self.fx,
            &self.poly,
            &self.sorted,
            &self.trie,
            &self.table,
        ]
    }

    fn summary(&self) -> Summary {
        Summary {
            trie_nodes: self.trie.count_nodes(),
            trie_skipped: self.trie_skipped,
            table: TableStats::of(&self.table),
        }
    }
}

fn lookup_all<Q: AsRef<str>>(queries: &[Q], containers: &Containers) {
    for set in containers.all() {
        let report = harness::time_lookup(queries, set);
        println!("{}", LookupLine(&report));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    debug!("{args:?}");

    let dictionary = corpus::load_dictionary(&args.dictionary)?;
    let book = args.book.as_deref().map(|path| corpus::load_book(path)).transpose()?;

    let containers = Containers::build(&dictionary, args.buckets);

    println!("\nEvery dictionary word:");
    lookup_all(&dictionary, &containers);

    let steps = args.steps.get();
    for trial in 0..args.trials {
        println!("\nWarm-up, trial={trial}");
        for step in 0..=steps {
            let fraction = step as f64 / steps as f64;
            let mixed = harness::create_mixed_dataset(&dictionary, dictionary.len(), fraction);
            println!("-- fraction={fraction:.1}");
            lookup_all(&mixed, &containers);
        }
    }

    let book_containers = match &book {
        Some(book) => {
            println!("\nLooking at book data now");
            let book_containers = Containers::build(book, args.buckets);
            lookup_all(book, &book_containers);

            println!("\nRatio of misspelled words in book:");
            let report = harness::time_lookup(book, &containers.btree);
            println!("{}", LookupLine(&report));
            for word in harness::find_misspelled(book, &containers.hash)
                .into_iter()
                .take(MISSPELLED_PREVIEW)
            {
                debug!("misspelled: {word}");
            }
            Some(book_containers)
        }
        None => None,
    };

    // a linear scan is far too slow for the whole dictionary, so only samples are timed
    let head = dictionary.len().min(args.sample);
    let tail = dictionary.len().min(args.sample / 10);
    println!("\nStart of list:");
    println!("{}", LookupLine(&harness::time_lookup(&dictionary[..head], &dictionary)));
    println!("End of list:");
    println!(
        "{}",
        LookupLine(&harness::time_lookup(&dictionary[dictionary.len() - tail..], &dictionary))
    );
    let mut rand = args.seed.map(Rand::new).unwrap_or_default();
    let sample = rng::sample_words(&dictionary, args.sample, &mut rand);
    println!("Random sample:");
    println!("{}", LookupLine(&harness::time_lookup(&sample, &dictionary)));

    println!("\nDictionary structures:");
    println!("{}", containers.summary());
    if let Some(book_containers) = &book_containers {
        println!("\nBook structures:");
        println!("{}", book_containers.summary());
    }

    println!("\nDone!");
    Ok(())
}
