//! Candidate words.

use std::{
    collections::{BTreeMap, BTreeSet, btree_set},
    str::FromStr,
};

use crate::VocabularyError;

/// A candidate word: a non-empty string of uppercase ASCII letters.
///
/// Words compare lexicographically, which gives every ordered container of
/// words (domains, vocabularies) a reproducible iteration order.
///
/// # Examples
///
/// ```
/// use crossfill_core::Word;
///
/// let word = Word::new("Cat").unwrap();
/// assert_eq!(word.as_str(), "CAT");
/// assert_eq!(word.len(), 3);
/// assert_eq!(word.letter(1), b'A');
///
/// assert!(Word::new("it's").is_none());
/// assert!(Word::new("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct Word(Box<str>);

impl Word {
    /// Creates a word, upper-casing ASCII letters.
    ///
    /// Returns `None` if `s` is empty or contains anything other than ASCII letters.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self(s.to_ascii_uppercase().into_boxed_str()))
    }

    /// Returns the word as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; words are never empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the letter at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    #[inline]
    pub fn letter(&self, index: usize) -> u8 {
        self.0.as_bytes()[index]
    }

    /// Returns the letter at `index`, or `None` past the end.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.as_bytes().get(index).copied()
    }

    /// Returns an iterator over the letters.
    #[inline]
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// An ordered, de-duplicated set of candidate words.
///
/// # Text format
///
/// One word per line. Surrounding whitespace is trimmed, blank lines are
/// skipped, and words are upper-cased before de-duplication.
///
/// # Examples
///
/// ```
/// use crossfill_core::Vocabulary;
///
/// let vocabulary: Vocabulary = "dog\n  cat \n\nDOG\n".parse()?;
/// let words: Vec<_> = vocabulary.iter().map(|w| w.as_str()).collect();
/// assert_eq!(words, ["CAT", "DOG"]);
/// # Ok::<(), crossfill_core::VocabularyError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeSet<Word>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    /// Returns the number of distinct words.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the vocabulary has no words.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the vocabulary.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Returns the words in lexicographic order.
    #[inline]
    pub fn iter(&self) -> btree_set::Iter<'_, Word> {
        self.words.iter()
    }

    /// Returns the number of words of each length.
    #[must_use]
    pub fn lengths(&self) -> BTreeMap<usize, usize> {
        let mut lengths = BTreeMap::new();
        for word in &self.words {
            *lengths.entry(word.len()).or_insert(0) += 1;
        }
        lengths
    }

    /// Returns `true` if at least one word has exactly `length` letters.
    #[must_use]
    pub fn contains_length(&self, length: usize) -> bool {
        self.words.iter().any(|word| word.len() == length)
    }
}

impl FromStr for Vocabulary {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut vocabulary = Self::new();
        for (i, line) in s.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            let word = Word::new(entry).ok_or_else(|| VocabularyError::InvalidWord {
                line: i + 1,
                word: entry.to_owned(),
            })?;
            vocabulary.insert(word);
        }
        Ok(vocabulary)
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
