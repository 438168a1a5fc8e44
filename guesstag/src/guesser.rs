use log::{debug, trace};

use crate::frequency::{LexicalFrequencyTable, WordGivenTag};
use crate::lexicon::{self, PunctuationMap, PUNCTUATION_TABLE};
use crate::tags::{TagSet, CD, DT, IN, JJ, JJR, NN, NNP, NNPS, NNS, RB, RBR, VB, VBG, VBN, VBZ};

// (tag to look the stem up with, tag to return when it wins)
const NOUN_OR_VERB: &[(&str, &str)] = &[(NN, NNS), (VB, VBZ)];
const PAST_STEM: &[(&str, &str)] = &[(NN, NN), (JJ, JJ), (VB, VBN)];
const PAST_VERB_STEM: &[(&str, &str)] = &[(VB, VBN)];

/// Spelling cues of a single word.
struct SurfaceFeatures {
    starts_upper: bool,
    ends_in_s: bool,
    ends_in_ly: bool,
    ends_in_ing: bool,
    ends_in_er: bool,
    ends_in_ed: bool,
    ends_in_ize: bool,
    has_hyphen: bool,
    has_digit: bool,
}

impl SurfaceFeatures {
    fn new(word: &str) -> Self {
        Self {
            starts_upper: word.chars().next().map_or(false, |c| c.is_ascii_uppercase()),
            ends_in_s: word.ends_with('s'),
            ends_in_ly: word.ends_with("ly"),
            ends_in_ing: word.ends_with("ing"),
            ends_in_er: word.ends_with("er"),
            ends_in_ed: word.ends_with("ed"),
            ends_in_ize: word.ends_with("ize"),
            has_hyphen: word.contains('-'),
            has_digit: word.bytes().any(|b| b.is_ascii_digit()),
        }
    }
}

/// Removes the last `n` characters. Returns an empty string if `word` is shorter.
fn drop_last_chars(word: &str, n: usize) -> &str {
    debug_assert!(n > 0);
    let end = word.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
    &word[..end]
}

/// Part-of-speech guesser for words missing from the tagger's lexicon.
///
/// # Examples
///
/// ```
/// use guesstag::{Guesser, LexicalFrequencyTable, TagSet};
///
/// let tag_set = TagSet::new(guesstag::tags::PENN_TREEBANK.iter().copied()).unwrap();
/// let table: LexicalFrequencyTable = [("VB", "box"), ("NN", "box"), ("NN", "fox")]
///     .into_iter()
///     .collect();
/// let guesser = Guesser::new(tag_set, table);
///
/// let no_context = vec![0.0; guesser.tag_set().len()];
/// assert_eq!(Some("NNP"), guesser.guess("Apple", &no_context));
/// assert_eq!(Some("VBG"), guesser.guess("running", &no_context));
/// assert_eq!(Some("CD"), guesser.guess("5G", &no_context));
/// assert_eq!(Some("VBZ"), guesser.guess("boxes", &no_context));
/// assert_eq!(None, guesser.guess("blorp", &no_context));
/// ```
pub struct Guesser<F = LexicalFrequencyTable> {
    tag_set: TagSet,
    words_given_tag: F,
    punctuation: PunctuationMap,
}

impl<F> Guesser<F>
where
    F: WordGivenTag,
{
    /// Creates a new guesser.
    ///
    /// # Arguments
    ///
    /// * `tag_set` - Tag vocabulary. Context vectors passed to [`Guesser::guess()`] follow its
    ///               order.
    /// * `words_given_tag` - Trained frequencies of words given tags.
    ///
    /// # Returns
    ///
    /// A new guesser.
    pub fn new(tag_set: TagSet, words_given_tag: F) -> Self {
        let punctuation = PunctuationMap::new(PUNCTUATION_TABLE);
        debug!(
            "guesser ready: {} tags, {} punctuation tokens",
            tag_set.len(),
            punctuation.len()
        );
        Self {
            tag_set,
            words_given_tag,
            punctuation,
        }
    }

    /// Gets a reference to the tag vocabulary.
    pub fn tag_set(&self) -> &TagSet {
        &self.tag_set
    }

    /// Gets a reference to the frequency oracle.
    pub fn words_given_tag(&self) -> &F {
        &self.words_given_tag
    }

    /// Guesses the tag of a word the tagger could not resolve.
    ///
    /// Spelling cues are checked in a fixed order and the first match decides. Only a
    /// lowercase word without any cue falls back to `context`.
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    /// * `context` - Score of each tag given the preceding tags only, in tag set order.
    ///
    /// # Returns
    ///
    /// The guessed tag, or `None` if the word has no cue and every context score is zero.
    ///
    /// # Panics
    ///
    /// Panics if `word` is empty or `context` does not have one score per tag.
    pub fn guess(&self, word: &str, context: &[f64]) -> Option<&str> {
        assert!(!word.is_empty(), "`word` is empty");
        assert_eq!(
            self.tag_set.len(),
            context.len(),
            "`context` must have one score per tag"
        );
        let (rule, tag) = self.apply_rules(word, context);
        trace!("guess {:?}: {:?} by {}", word, tag, rule);
        tag
    }

    fn apply_rules(&self, word: &str, context: &[f64]) -> (&'static str, Option<&str>) {
        if let Some(tag) = self.punctuation.get(word) {
            return ("punctuation", Some(tag));
        }
        let f = SurfaceFeatures::new(word);
        if f.has_digit {
            return ("digit", Some(CD));
        }
        if f.starts_upper {
            return if f.ends_in_s {
                ("capitalized -s", Some(self.guess_plural_form(word, NNPS)))
            } else if f.ends_in_ed {
                ("capitalized -ed", Some(self.guess_past_form(word, VBN)))
            } else {
                ("capitalized", Some(NNP))
            };
        }
        if f.ends_in_s {
            ("-s", Some(self.guess_plural_form(word, NNS)))
        } else if f.ends_in_ize {
            ("-ize", Some(VB))
        } else if f.ends_in_ed {
            ("-ed", Some(self.guess_past_form(word, VBN)))
        } else if f.ends_in_ly {
            ("-ly", Some(RB))
        } else if f.ends_in_ing {
            ("-ing", Some(VBG))
        } else if f.has_hyphen {
            ("hyphen", Some(JJ))
        } else {
            ("context", self.guess_from_context(word, f.ends_in_er, context))
        }
    }

    fn guess_from_context(&self, word: &str, ends_in_er: bool, context: &[f64]) -> Option<&str> {
        let mut max = 0.0;
        let mut best = None;
        for (i, &score) in context.iter().enumerate() {
            if score > max {
                max = score;
                best = Some(i);
            }
        }
        let tag = self.tag_set.get(best?)?;

        // The word is lowercase, and closed classes are only kept for their members.
        let tag = match tag {
            NNP => NN,
            DT if !lexicon::is_determiner(word) => NN,
            IN if !lexicon::is_preposition(word) => NN,
            RBR if ends_in_er => JJR,
            tag => tag,
        };
        Some(tag)
    }

    /// Picks the candidate under which `stem` is most frequent.
    ///
    /// # Arguments
    ///
    /// * `stem` - A word to look up.
    /// * `candidates` - Pairs of a tag to look `stem` up with and the tag returned when that
    ///                  pair wins.
    ///
    /// # Returns
    ///
    /// The returned tag of the first candidate with the highest positive probability, or
    /// `None` if `stem` has zero probability under every candidate.
    pub fn best_tag(
        &self,
        stem: &str,
        candidates: &[(&str, &'static str)],
    ) -> Option<&'static str> {
        let mut max = 0.0;
        let mut best = None;
        for &(lookup_tag, result_tag) in candidates {
            let prob = self.words_given_tag.probability(lookup_tag, stem);
            if prob > max {
                max = prob;
                best = Some(result_tag);
            }
        }
        best
    }

    /// Guesses the tag of a word ending in `s` from the frequency of its stem.
    ///
    /// The stem is looked up as a singular noun (giving a plural noun) and as a base verb
    /// (giving a 3rd person singular verb). Stems are tried in this order, and the first
    /// one with a winner decides:
    ///
    /// 1. `-ies` replaced by `-y` (`flies` → `fly`), for words ending in `ies`;
    /// 2. `-es` removed (`boxes` → `box`), for words ending in `es`;
    /// 3. the last character removed (`dogs` → `dog`).
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    /// * `default` - Tag returned when no stem is known.
    ///
    /// # Returns
    ///
    /// The guessed tag.
    pub fn guess_plural_form<'a>(&self, word: &str, default: &'a str) -> &'a str {
        let mut tag = None;
        if let Some(base) = word.strip_suffix("ies") {
            tag = self.best_tag(&format!("{}y", base), NOUN_OR_VERB);
        }
        if tag.is_none() {
            if let Some(stem) = word.strip_suffix("es") {
                tag = self.best_tag(stem, NOUN_OR_VERB);
            }
        }
        if tag.is_none() {
            tag = self.best_tag(drop_last_chars(word, 1), NOUN_OR_VERB);
        }
        tag.unwrap_or(default)
    }

    /// Guesses the tag of a word ending in `ed` from the frequency of its stem.
    ///
    /// The word without `-ed` is looked up as a noun, an adjective, and a base verb (giving
    /// a past participle). If none is known, the word without its last character is looked
    /// up as a base verb (`chided` → `chide`).
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    /// * `default` - Tag returned when no stem is known.
    ///
    /// # Returns
    ///
    /// The guessed tag.
    pub fn guess_past_form<'a>(&self, word: &str, default: &'a str) -> &'a str {
        self.best_tag(drop_last_chars(word, 2), PAST_STEM)
            .or_else(|| self.best_tag(drop_last_chars(word, 1), PAST_VERB_STEM))
            .unwrap_or(default)
    }
}
