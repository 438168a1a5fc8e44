//! Rule base filters for Guesstag.
//!
//! ## Examples
//!
//! ```
//! use guesstag::TaggedSentence;
//! use guesstag_rules::{sentence_filters::GrammarFixFilter, SentenceFilter};
//!
//! let mut s = TaggedSentence::from_tagged("a/DT blorpy/NN cat/NN").unwrap();
//! s.guessed_mut()[1] = true;
//!
//! GrammarFixFilter.filter(&mut s);
//! assert_eq!("a/DT blorpy/JJ cat/NN", s.to_tagged_string());
//! ```

pub mod sentence_filters;

mod fix_tags;

pub use fix_tags::fix_tags;

use guesstag::TaggedSentence;

/// Filter trait for tagged sentences.
pub trait SentenceFilter: Send + Sync {
    /// Filter a specified sentence in place.
    ///
    /// # Arguments:
    ///
    /// * `sentence` - Input sentence.
    fn filter(&self, sentence: &mut TaggedSentence);
}
