use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use thiserror::Error;

/// Upper bound on how many words a single test can be built from, so a huge
/// `--words` request cannot balloon memory.
pub const MAX_WORDS: usize = 65536;

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} contains no words", .0.display())]
    Empty(PathBuf),
}

fn read_words(path: &Path) -> Result<Vec<String>, WordSourceError> {
    let data = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = data.split_whitespace().map(str::to_owned).collect();
    if words.is_empty() {
        return Err(WordSourceError::Empty(path.to_path_buf()));
    }
    Ok(words)
}

/// Load a test text verbatim: whitespace-delimited tokens, order preserved.
pub fn load_text(path: &Path) -> Result<Vec<String>, WordSourceError> {
    read_words(path)
}

/// A dictionary to sample test words from.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn load(path: &Path) -> Result<Self, WordSourceError> {
        Ok(Self {
            words: read_words(path)?,
        })
    }

    /// Number of distinct words available to sample from. Never zero;
    /// loading rejects empty sources.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Sample `count` words uniformly at random with replacement, capped at
    /// [`MAX_WORDS`].
    pub fn sample(&self, count: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();
        let count = count.min(MAX_WORDS);
        (0..count)
            .filter_map(|_| self.words.choose(&mut rng).cloned())
            .collect()
    }
}
