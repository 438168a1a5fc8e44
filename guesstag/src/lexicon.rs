//! Closed word classes and punctuation used while guessing.

use hashbrown::HashMap;

/// Determiners.
pub const DETERMINERS: &[&str] = &[
    "a", "both", "all", "no", "this", "that", "some", "an", "these", "every", "either", "another",
    "each", "the", "any", "those",
];

/// Prepositions and subordinating conjunctions.
pub const PREPOSITIONS: &[&str] = &[
    "among", "because", "besides", "into", "within", "near", "down", "as", "via", "through", "at",
    "in", "beyond", "between", "if", "throughout", "from", "for", "since", "except", "per", "by",
    "below", "behind", "above", "under", "before", "until", "outside", "over", "alongside",
    "unless", "around", "that", "atop", "after", "upon", "but", "next", "although", "despite",
    "during", "along", "with", "than", "on", "about", "off", "like", "unlike", "whether", "of",
    "up", "against", "across", "while", "without", "so", "though", "amid", "toward", "out",
    "once",
];

/// Wh-determiners.
pub const WH_DETERMINERS: &[&str] = &["what", "whatever", "which", "that"];

/// Punctuation tokens grouped by their tag.
pub const PUNCTUATION_TABLE: &[(&str, &[&str])] = &[
    ("``", &["`", "``"]),
    ("''", &["'", "\""]),
    ("(", &["(", "{", "["]),
    (")", &[")", "}", "]"]),
    (",", &[","]),
    ("--", &["--"]),
    (".", &[".", "!", "?"]),
    (":", &[":", ";", "..."]),
];

fn contains_lowercase(list: &[&str], word: &str) -> bool {
    let word = word.to_lowercase();
    list.contains(&word.as_str())
}

/// Checks whether the word is a determiner, ignoring case.
pub fn is_determiner(word: &str) -> bool {
    contains_lowercase(DETERMINERS, word)
}

/// Checks whether the word is a preposition, ignoring case.
pub fn is_preposition(word: &str) -> bool {
    contains_lowercase(PREPOSITIONS, word)
}

/// Checks whether the word is a wh-determiner, ignoring case.
pub fn is_wh_determiner(word: &str) -> bool {
    contains_lowercase(WH_DETERMINERS, word)
}

/// Lookup table from a punctuation token to its tag.
#[derive(Debug, Clone)]
pub struct PunctuationMap {
    map: HashMap<&'static str, &'static str>,
}

impl PunctuationMap {
    /// Inverts a table of tags and their tokens.
    ///
    /// When a token is listed under several tags, the last one is kept.
    ///
    /// # Arguments
    ///
    /// * `table` - Pairs of a tag and the tokens carrying it.
    ///
    /// # Returns
    ///
    /// A new map.
    pub fn new(table: &[(&'static str, &[&'static str])]) -> Self {
        let mut map = HashMap::new();
        for &(tag, tokens) in table {
            for &token in tokens {
                map.insert(token, tag);
            }
        }
        Self { map }
    }

    /// Gets the tag of the given token.
    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.map.get(token).copied()
    }

    /// Gets the number of tokens.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether the map has no tokens.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for PunctuationMap {
    fn default() -> Self {
        Self::new(PUNCTUATION_TABLE)
    }
}
