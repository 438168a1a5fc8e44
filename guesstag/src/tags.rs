//! Tag labels and the configured tag vocabulary.

use hashbrown::HashMap;

use crate::errors::{GuesstagError, Result};
use crate::lexicon::PUNCTUATION_TABLE;

/// Cardinal number.
pub const CD: &str = "CD";
/// Determiner.
pub const DT: &str = "DT";
/// Preposition or subordinating conjunction.
pub const IN: &str = "IN";
/// Adjective.
pub const JJ: &str = "JJ";
/// Comparative adjective.
pub const JJR: &str = "JJR";
/// Singular common noun.
pub const NN: &str = "NN";
/// Plural common noun.
pub const NNS: &str = "NNS";
/// Singular proper noun.
pub const NNP: &str = "NNP";
/// Plural proper noun.
pub const NNPS: &str = "NNPS";
/// Possessive ending.
pub const POS: &str = "POS";
/// Adverb.
pub const RB: &str = "RB";
/// Comparative adverb.
pub const RBR: &str = "RBR";
/// Placeholder for a tag the upstream tagger could not decide.
pub const UNK: &str = "UNK";
/// Base form verb.
pub const VB: &str = "VB";
/// Gerund or present participle.
pub const VBG: &str = "VBG";
/// Past participle.
pub const VBN: &str = "VBN";
/// 3rd person singular present verb.
pub const VBZ: &str = "VBZ";
/// Comma.
pub const COMMA: &str = ",";

// Tags the guesser emits without consulting the vocabulary.
const EMITTED_TAGS: &[&str] = &[CD, JJ, JJR, NN, NNS, NNP, NNPS, RB, VB, VBG, VBN, VBZ];

/// Ordered tag vocabulary.
///
/// The position of a tag in the set is the index used by context probability vectors.
#[derive(Debug, Clone)]
pub struct TagSet {
    tags: Vec<String>,
    ids: HashMap<String, usize>,
}

impl TagSet {
    /// Creates a new tag set.
    ///
    /// # Arguments
    ///
    /// * `tags` - Tag labels in the order used by context probability vectors.
    ///
    /// # Returns
    ///
    /// A new tag set.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * `tags` is empty.
    /// * `tags` contains the same label twice.
    /// * `tags` lacks a label the guesser can return on its own, i.e. one of the fixed
    ///   cascade outputs or a punctuation tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use guesstag::TagSet;
    ///
    /// let s = TagSet::new(["NN", "VB"]);
    /// assert!(s.is_err());
    ///
    /// let s = TagSet::new(guesstag::tags::PENN_TREEBANK.iter().copied());
    /// assert!(s.is_ok());
    /// ```
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return Err(GuesstagError::invalid_tag_set("tag set is empty"));
        }
        let mut ids = HashMap::with_capacity(tags.len());
        for (i, tag) in tags.iter().enumerate() {
            if ids.insert(tag.clone(), i).is_some() {
                return Err(GuesstagError::invalid_tag_set(format!(
                    "duplicated tag `{}`",
                    tag
                )));
            }
        }
        let required = EMITTED_TAGS
            .iter()
            .chain(PUNCTUATION_TABLE.iter().map(|(tag, _)| tag));
        for &tag in required {
            if !ids.contains_key(tag) {
                return Err(GuesstagError::invalid_tag_set(format!(
                    "missing required tag `{}`",
                    tag
                )));
            }
        }
        Ok(Self { tags, ids })
    }

    /// Gets the number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always returns `false`; an empty tag set cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Gets the tag at the given index.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.tags.get(idx).map(String::as_str)
    }

    /// Gets the index of the given tag.
    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.ids.get(tag).copied()
    }

    /// Checks whether the tag is a member of this set.
    pub fn contains(&self, tag: &str) -> bool {
        self.ids.contains_key(tag)
    }

    /// Iterates over the tags in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

/// The Penn Treebank tag set, including its punctuation classes.
pub const PENN_TREEBANK: &[&str] = &[
    "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS", "NNP",
    "NNPS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB",
    "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB", "$", "#", "``", "''", "(",
    ")", ",", "--", ".", ":",
];
