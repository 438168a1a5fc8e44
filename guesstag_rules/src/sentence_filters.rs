//! Filters for [`guesstag::TaggedSentence`].

mod grammar_fix;

pub use grammar_fix::GrammarFixFilter;
