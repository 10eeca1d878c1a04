use anyhow::{Context, Result};
use fnv::FnvHashSet;
use lazy_static::lazy_static;
use std::fs;
use std::io::{BufRead, BufReader};
use std::ops::Deref;
use std::path::Path;

lazy_static! {
    /// The bundled english stopwords.
    pub static ref ENGLISH_STOPWORDS: StopWords = StopWords::from_lines(include_str!(
        "../resources/stopwords/stopwords-en.txt"
    ));
}

/// A set of lowercase words to exclude from keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: FnvHashSet<String>,
}

impl Deref for StopWords {
    type Target = FnvHashSet<String>;

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl StopWords {
    /// One word per line, surrounding whitespace is trimmed and blank lines
    /// are skipped.
    pub fn from_lines(content: &str) -> Self {
        content.lines().collect()
    }

    /// Read the `StopWords` from a file with one word per line.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = fs::File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        let lines: std::io::Result<Vec<String>> = BufReader::new(f).lines().collect();
        let lines = lines.with_context(|| format!("Failed to read {:?}", path))?;
        Ok(lines.iter().map(String::as_str).collect())
    }

    /// Reads the common words file, an unreadable file yields no words.
    pub fn read_common_words<P: AsRef<Path>>(path: P) -> Self {
        match Self::read_file(path) {
            Ok(words) => words,
            Err(err) => {
                log::warn!("Error reading common words file: {:#}", err);
                Self::default()
            }
        }
    }

    /// Adds all words of `other` to this set.
    pub fn extend_from(&mut self, other: &StopWords) {
        self.words.extend(other.words.iter().cloned());
    }

    pub fn insert<T: Into<String>>(&mut self, word: T) -> bool {
        self.words.insert(word.into())
    }
}

impl<'a> std::iter::FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }
}
