//! Character trie with one node per distinct prefix.
//!
//! Nodes live in a single arena `Vec`; edges are sorted `(byte, index)` pairs so
//! lookups binary search the children of each node. Only characters in
//! `U+0000..=U+00FF` can label an edge.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::WordSet;

const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    /// Sorted by edge byte.
    children: Vec<(u8, usize)>,
    terminal: bool,
}

impl Node {
    fn child(&self, byte: u8) -> Option<usize> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.children[i].1)
    }
}

#[derive(Clone, Debug)]
pub struct CharTrie {
    nodes: Vec<Node>,
    len: usize,
}

impl CharTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    /// Builds a trie from `words`, skipping any word with an unsupported character.
    ///
    /// Returns the trie and the number of skipped words.
    pub fn from_words<I, S>(words: I) -> (Self, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        let mut skipped = 0;
        for word in words {
            if let Err(err) = trie.insert(word.as_ref()) {
                log::debug!("skipping word: {err}");
                skipped += 1;
            }
        }
        (trie, skipped)
    }

    /// Inserts `word`, returning whether it was new.
    ///
    /// Nodes created for the characters before an unsupported one are kept.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let mut node = ROOT;
        for (position, c) in word.chars().enumerate() {
            let byte = u8::try_from(c).map_err(|_| Error::invalid_character(word, c, position))?;
            node = match self.nodes[node]
                .children
                .binary_search_by_key(&byte, |&(b, _)| b)
            {
                Ok(i) => self.nodes[node].children[i].1,
                Err(i) => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(i, (byte, child));
                    child
                }
            };
        }

        let last = &mut self.nodes[node];
        if last.terminal {
            return Ok(false);
        }
        last.terminal = true;
        self.len += 1;
        Ok(true)
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node = ROOT;
        for c in word.chars() {
            let Ok(byte) = u8::try_from(c) else {
                return false;
            };
            match self.nodes[node].child(byte) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.nodes[node].terminal
    }

    /// Total number of nodes, root included.
    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Words in code point order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            trie: self,
            stack: vec![(ROOT, 0)],
            path: String::new(),
            root_pending: self.nodes[ROOT].terminal,
        }
    }
}

impl Default for CharTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first walk yielding each terminal path.
pub struct Iter<'a> {
    trie: &'a CharTrie,
    /// `(node, next child to visit)`
    stack: Vec<(usize, usize)>,
    path: String,
    root_pending: bool,
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.root_pending {
            self.root_pending = false;
            return Some(String::new());
        }

        loop {
            let top = self.stack.len().checked_sub(1)?;
            let (node, cursor) = self.stack[top];
            let children = &self.trie.nodes[node].children;

            if let Some(&(byte, child)) = children.get(cursor) {
                self.stack[top].1 += 1;
                self.path.push(byte as char);
                self.stack.push((child, 0));
                if self.trie.nodes[child].terminal {
                    return Some(self.path.clone());
                }
            } else {
                self.stack.pop();
                if node != ROOT {
                    self.path.pop();
                }
            }
        }
    }
}

impl WordSet for CharTrie {
    fn contains(&self, word: &str) -> bool {
        CharTrie::contains(self, word)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn words(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(self.iter().map(Cow::Owned))
    }

    fn kind(&self) -> &'static str {
        "CharTrie"
    }
}
