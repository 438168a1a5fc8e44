//! Word-given-tag frequencies.

use hashbrown::HashMap;

/// Oracle answering how often a word appears under a tag.
pub trait WordGivenTag {
    /// Gets the relative frequency of `word` among all words seen with `tag`.
    ///
    /// Returns a value in `[0, 1]`; `0.0` when either the tag or the word is unknown.
    fn probability(&self, tag: &str, word: &str) -> f64;
}

impl<T> WordGivenTag for &T
where
    T: WordGivenTag + ?Sized,
{
    fn probability(&self, tag: &str, word: &str) -> f64 {
        (**self).probability(tag, word)
    }
}

/// Frequency distribution of words observed with one tag.
#[derive(Debug, Clone, Default)]
pub struct FreqDist {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FreqDist {
    /// Creates an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` observations of `word`.
    pub fn add_count<S>(&mut self, word: S, count: u64)
    where
        S: Into<String>,
    {
        *self.counts.entry(word.into()).or_insert(0) += count;
        self.total += count;
    }

    /// Gets the number of observations of `word`.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Gets the number of all observations.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Gets the relative frequency of `word`, or `0.0` for an empty distribution.
    pub fn freq(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total as f64
    }
}

/// Conditional frequency table of words given tags.
///
/// # Examples
///
/// ```
/// use guesstag::{LexicalFrequencyTable, WordGivenTag};
///
/// let table: LexicalFrequencyTable =
///     [("NN", "box"), ("NN", "dog"), ("VB", "box")].into_iter().collect();
/// assert_eq!(0.5, table.probability("NN", "box"));
/// assert_eq!(1.0, table.probability("VB", "box"));
/// assert_eq!(0.0, table.probability("JJ", "box"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexicalFrequencyTable {
    dists: HashMap<String, FreqDist>,
}

impl LexicalFrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation of `word` with `tag`.
    pub fn increment<T, S>(&mut self, tag: T, word: S)
    where
        T: Into<String>,
        S: Into<String>,
    {
        self.add_count(tag, word, 1);
    }

    /// Adds `count` observations of `word` with `tag`.
    pub fn add_count<T, S>(&mut self, tag: T, word: S, count: u64)
    where
        T: Into<String>,
        S: Into<String>,
    {
        self.dists
            .entry(tag.into())
            .or_insert_with(FreqDist::new)
            .add_count(word, count);
    }

    /// Gets the distribution of the given tag.
    pub fn get(&self, tag: &str) -> Option<&FreqDist> {
        self.dists.get(tag)
    }

    /// Iterates over the tags having a distribution.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.dists.keys().map(String::as_str)
    }
}

impl WordGivenTag for LexicalFrequencyTable {
    fn probability(&self, tag: &str, word: &str) -> f64 {
        self.dists.get(tag).map_or(0.0, |dist| dist.freq(word))
    }
}

impl<T, S> FromIterator<(T, S)> for LexicalFrequencyTable
where
    T: Into<String>,
    S: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, S)>,
    {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<T, S> Extend<(T, S)> for LexicalFrequencyTable
where
    T: Into<String>,
    S: Into<String>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, S)>,
    {
        for (tag, word) in iter {
            self.increment(tag, word);
        }
    }
}
