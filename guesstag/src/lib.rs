#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Guesstag
//!
//! Guesstag guesses part-of-speech tags of words a statistical tagger could not find in its
//! lexicon.
//!
//! A [`Guesser`] looks at spelling cues first (punctuation, digits, capitalization,
//! suffixes, hyphens). Plural and past forms are stemmed and looked up in a
//! [`LexicalFrequencyTable`]. Words without any cue fall back to the scores the tagger
//! computed from the preceding tags.
//!
//! Sentence-level corrections of guessed tags live in the `guesstag_rules` crate.
//!
//! ## Examples
//!
//! ```
//! use guesstag::{Guesser, LexicalFrequencyTable, TagSet};
//!
//! let tag_set = TagSet::new(guesstag::tags::PENN_TREEBANK.iter().copied()).unwrap();
//! let mut table = LexicalFrequencyTable::new();
//! table.increment("NN", "fly");
//! table.increment("NN", "dog");
//! table.add_count("VB", "fly", 3);
//! let guesser = Guesser::new(tag_set, table);
//!
//! let mut context = vec![0.0; guesser.tag_set().len()];
//! assert_eq!(Some("VBZ"), guesser.guess("flies", &context));
//! assert_eq!(None, guesser.guess("blorp", &context));
//!
//! context[guesser.tag_set().index_of("NNP").unwrap()] = 0.4;
//! assert_eq!(Some("NN"), guesser.guess("blorp", &context));
//! ```

pub mod errors;
pub mod lexicon;
pub mod tags;

mod frequency;
mod guesser;
mod sentence;

pub use frequency::{FreqDist, LexicalFrequencyTable, WordGivenTag};
pub use guesser::Guesser;
pub use sentence::{TaggedSentence, Token};
pub use tags::TagSet;
