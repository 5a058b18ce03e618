use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::ops::Deref;
use std::path::Path;

use anyhow::Result;
use lazy_static::lazy_static;
use log::warn;

lazy_static! {
    /// Process-wide English stopword set, loaded once and shared read-only.
    ///
    /// If the bundled corpus cannot be read, scoring degrades to the empty
    /// set (no filtering) instead of failing.
    pub(crate) static ref ENGLISH_STOPWORDS: StopWords =
        StopWords::english().unwrap_or_else(|err| {
            warn!(
                "failed to read bundled stopword corpus, word scoring runs unfiltered: {}",
                err
            );
            StopWords::empty()
        });
}

/// A set of words that carry no weight during frequency scoring.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Deref for StopWords {
    type Target = HashSet<String>;

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl StopWords {
    /// Read the bundled English stopword corpus.
    pub fn english() -> Result<Self> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("resources/stopwords")
            .join("stopwords-en.txt");
        Self::from_file(path)
    }

    /// Read a stopword set from a file with one word per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = fs::File::open(path)?;
        let file = BufReader::new(&f);
        let words = file
            .lines()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        Ok(Self { words })
    }

    /// The empty set, the degraded no-filtering fallback.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_stopwords() {
        let stopwords = StopWords::english().unwrap();
        assert!(!stopwords.is_empty());
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("was"));
        assert!(!stopwords.contains("economy"));
    }

    #[test]
    fn empty_stopwords() {
        assert!(StopWords::empty().is_empty());
    }

    #[test]
    fn lazy_stopwords() {
        assert!(ENGLISH_STOPWORDS.contains("the"));
    }
}
