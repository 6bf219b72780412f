use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A trie edge was requested for a character outside `U+0000..=U+00FF`.
    #[error("unsupported character {character:?} at position {position} in {word:?}")]
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },

    #[error("couldn't read {}: {source}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn invalid_character(word: &str, character: char, position: usize) -> Self {
        Self::InvalidCharacter {
            word: word.to_owned(),
            character,
            position,
        }
    }

    pub fn resource_not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceNotFound {
            path: path.into(),
            source,
        }
    }
}
