use crate::errors::{GuesstagError, Result};

/// Sentence with a tag and a guessed flag on every word.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TaggedSentence {
    pub(crate) words: Vec<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) guessed: Vec<bool>,
}

/// Reference to a tagged word.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Token<'a> {
    surface: &'a str,
    tag: &'a str,
    guessed: bool,
}

impl<'a> Token<'a> {
    /// Gets the surface string of the word.
    pub const fn surface(&self) -> &'a str {
        self.surface
    }

    /// Gets the tag of the word.
    pub const fn tag(&self) -> &'a str {
        self.tag
    }

    /// Checks whether the tag was guessed rather than read from the lexicon.
    pub const fn is_guessed(&self) -> bool {
        self.guessed
    }
}

impl TaggedSentence {
    /// Creates an empty sentence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a word.
    ///
    /// # Arguments
    ///
    /// * `word` - Surface string.
    /// * `tag` - Current tag of the word.
    /// * `guessed` - `true` if the tag came from [`Guesser`](crate::Guesser) rather than the
    ///               lexicon.
    ///
    /// # Panics
    ///
    /// Panics if `word` is empty.
    pub fn push<W, T>(&mut self, word: W, tag: T, guessed: bool)
    where
        W: Into<String>,
        T: Into<String>,
    {
        let word = word.into();
        assert!(!word.is_empty(), "`word` is empty");
        self.words.push(word);
        self.tags.push(tag.into());
        self.guessed.push(guessed);
    }

    /// Creates a new [`TaggedSentence`] from a string of `word/TAG` pairs.
    ///
    /// Pairs are separated by single whitespaces, and the tag follows the last slash of each
    /// pair. No word is marked as guessed.
    ///
    /// # Arguments
    ///
    /// * `tagged_text` - A tagged string.
    ///
    /// # Returns
    ///
    /// A new [`TaggedSentence`].
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * `tagged_text` is empty.
    /// * `tagged_text` starts/ends with a whitespace.
    /// * `tagged_text` contains consecutive whitespaces.
    /// * A pair lacks the slash, the word, or the tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use guesstag::TaggedSentence;
    ///
    /// let s = TaggedSentence::from_tagged("The/DT quick/JJ fox/NN");
    /// assert!(s.is_ok());
    ///
    /// let s = TaggedSentence::from_tagged("The/DT quick fox/NN");
    /// assert!(s.is_err());
    /// ```
    pub fn from_tagged<S>(tagged_text: S) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let tagged_text = tagged_text.as_ref();

        if tagged_text.is_empty() {
            return Err(GuesstagError::invalid_argument("tagged_text", "is empty"));
        }
        if tagged_text.starts_with(' ') {
            return Err(GuesstagError::invalid_argument(
                "tagged_text",
                "starts with a whitespace",
            ));
        }
        if tagged_text.ends_with(' ') {
            return Err(GuesstagError::invalid_argument(
                "tagged_text",
                "ends with a whitespace",
            ));
        }

        let mut sentence = Self::new();
        for pair in tagged_text.split(' ') {
            if pair.is_empty() {
                return Err(GuesstagError::invalid_argument(
                    "tagged_text",
                    "contains consecutive whitespaces",
                ));
            }
            let (word, tag) = pair.rsplit_once('/').ok_or_else(|| {
                GuesstagError::invalid_argument(
                    "tagged_text",
                    format!("`{}` has no tag", pair),
                )
            })?;
            if word.is_empty() || tag.is_empty() {
                return Err(GuesstagError::invalid_argument(
                    "tagged_text",
                    format!("`{}` has an empty word or tag", pair),
                ));
            }
            sentence.push(word, tag, false);
        }
        Ok(sentence)
    }

    /// Generates a string of `word/TAG` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use guesstag::TaggedSentence;
    ///
    /// let mut s = TaggedSentence::new();
    /// s.push("and/or", "CC", false);
    /// s.push("Apple", "NNP", true);
    /// assert_eq!("and/or/CC Apple/NNP", s.to_tagged_string());
    /// ```
    pub fn to_tagged_string(&self) -> String {
        let mut result = String::new();
        for token in self.iter_tokens() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(token.surface());
            result.push('/');
            result.push_str(token.tag());
        }
        result
    }

    /// Gets the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks whether the sentence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Gets a reference to the words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Gets a reference to the tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Gets a mutable reference to the tags.
    pub fn tags_mut(&mut self) -> &mut [String] {
        &mut self.tags
    }

    /// Gets a reference to the guessed flags.
    pub fn guessed(&self) -> &[bool] {
        &self.guessed
    }

    /// Gets a mutable reference to the guessed flags.
    pub fn guessed_mut(&mut self) -> &mut [bool] {
        &mut self.guessed
    }

    /// Gets the guessed flags and a mutable reference to the tags at the same time.
    pub fn guessed_and_tags_mut(&mut self) -> (&[bool], &mut [String]) {
        (self.guessed.as_slice(), self.tags.as_mut_slice())
    }

    /// Iterates over the tagged words.
    pub fn iter_tokens(&self) -> impl Iterator<Item = Token<'_>> {
        self.words
            .iter()
            .zip(&self.tags)
            .zip(&self.guessed)
            .map(|((surface, tag), &guessed)| Token {
                surface,
                tag,
                guessed,
            })
    }
}
