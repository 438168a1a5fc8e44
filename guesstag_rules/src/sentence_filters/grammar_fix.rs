use guesstag::TaggedSentence;

use crate::fix_tags::fix_tags;
use crate::SentenceFilter;

/// Grammar based corrector of guessed tags. See [`fix_tags()`](crate::fix_tags) for the rules.
#[derive(Clone, Default)]
pub struct GrammarFixFilter;

impl SentenceFilter for GrammarFixFilter {
    fn filter(&self, sentence: &mut TaggedSentence) {
        let (guessed, tags) = sentence.guessed_and_tags_mut();
        fix_tags(guessed, tags);
    }
}
