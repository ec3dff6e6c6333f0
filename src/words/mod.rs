//! Word supplies backing the word-pick generators
//!
//! Three curated lists (adjectives, nouns, verbs) ship embedded in the
//! binary and are parsed once on first use. Callers can build their own
//! [`WordList`] from memory or from a file in the same line-oriented
//! format.

use std::io;
use std::path::Path;
use std::sync::LazyLock;

use rand::Rng;

static ADJECTIVES: LazyLock<WordList> =
    LazyLock::new(|| WordList::parse(include_str!("adjectives.txt")));
static NOUNS: LazyLock<WordList> = LazyLock::new(|| WordList::parse(include_str!("nouns.txt")));
static VERBS: LazyLock<WordList> = LazyLock::new(|| WordList::parse(include_str!("verbs.txt")));

/// The embedded adjective list.
pub fn adjectives() -> &'static WordList {
    &ADJECTIVES
}

/// The embedded noun list.
pub fn nouns() -> &'static WordList {
    &NOUNS
}

/// The embedded verb list.
pub fn verbs() -> &'static WordList {
    &VERBS
}

/// An ordered, immutable list of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a list from line-oriented text.
    ///
    /// Each line holds one word. Surrounding whitespace is trimmed, and
    /// blank lines and comment lines starting with `#` are skipped. The
    /// order of the remaining lines is preserved.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        Self { words }
    }

    /// Build a list from words already in memory, in the given order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Read and parse a list from a file.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Whether `word` appears in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|candidate| candidate == word)
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Draw one word uniformly at random, or `None` if the list is empty.
    pub fn choose<R>(&self, rng: &mut R) -> Option<&str>
    where
        R: Rng + ?Sized,
    {
        if self.words.is_empty() {
            return None;
        }
        self.get(rng.random_range(0..self.words.len()))
    }
}
