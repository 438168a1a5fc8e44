use log::trace;

use guesstag::tags::{COMMA, DT, IN, JJ, JJR, NN, NNP, NNPS, NNS, POS, RB, RBR, UNK, VBN};

fn retag<T>(tags: &mut [T], j: usize, tag: &'static str, rule: &str)
where
    T: AsRef<str> + From<&'static str>,
{
    trace!("fix_tags: {}: {} -> {} by {}", j, tags[j].as_ref(), tag, rule);
    tags[j] = T::from(tag);
}

/// Corrects guessed tags using the tags around them.
///
/// Positions are visited from left to right and corrected in place, so a correction is
/// visible to the following positions. For each guessed position after the first:
///
/// * If a next position exists: a word between a determiner or adjective and a noun, an
///   adjective, a possessive ending, or a guessed preposition becomes an adjective.
///   Otherwise, a preposition after a guessed word and before a comma becomes a noun.
/// * A noun after an adverb becomes an adjective. Otherwise, a past participle after a
///   comparative becomes an adjective.
///
/// Finally, every `UNK` tag becomes a noun, guessed or not.
///
/// # Arguments
///
/// * `was_guessed` - Whether each tag came from the guesser rather than the lexicon.
/// * `tags` - Tags of a sentence, modified in place.
///
/// # Panics
///
/// Panics if `was_guessed` and `tags` have different lengths.
///
/// # Examples
///
/// ```
/// use guesstag_rules::fix_tags;
///
/// let mut tags = vec!["DT", "UNK", "NN", "UNK"];
/// fix_tags(&[false, true, false, false], &mut tags);
/// assert_eq!(vec!["DT", "JJ", "NN", "NN"], tags);
/// ```
pub fn fix_tags<T>(was_guessed: &[bool], tags: &mut [T])
where
    T: AsRef<str> + From<&'static str>,
{
    assert_eq!(
        was_guessed.len(),
        tags.len(),
        "`was_guessed` and `tags` must have the same length"
    );
    for j in 0..tags.len() {
        if was_guessed[j] && j > 0 {
            if j + 1 < tags.len() {
                let prev = tags[j - 1].as_ref();
                let next = tags[j + 1].as_ref();
                if matches!(prev, DT | JJ)
                    && (matches!(next, NNP | NNPS | NN | NNS | JJ | POS)
                        || (was_guessed[j + 1] && next == IN))
                {
                    retag(tags, j, JJ, "modifier before a nominal");
                } else if was_guessed[j - 1] && tags[j].as_ref() == IN && next == COMMA {
                    retag(tags, j, NN, "preposition before a comma");
                }
            }

            let prev = tags[j - 1].as_ref();
            let cur = tags[j].as_ref();
            if matches!(cur, NN | NNS) && prev == RB {
                retag(tags, j, JJ, "noun after an adverb");
            } else if matches!(prev, RBR | JJR) && cur == VBN {
                retag(tags, j, JJ, "participle after a comparative");
            }
        }

        if tags[j].as_ref() == UNK {
            retag(tags, j, NN, "unknown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::borrow::Cow;

    fn fixed(was_guessed: &[bool], tags: &[&'static str]) -> Vec<&'static str> {
        let mut tags = tags.to_vec();
        fix_tags(was_guessed, &mut tags);
        tags
    }

    #[test]
    fn test_fix_tags_empty() {
        assert_eq!(Vec::<&str>::new(), fixed(&[], &[]));
    }

    #[test]
    fn test_fix_tags_determiner_unknown_noun() {
        // The adjective rule runs before the UNK check, which sees the corrected tag.
        assert_eq!(
            vec!["DT", "JJ", "NN"],
            fixed(&[false, true, false], &["DT", "UNK", "NN"])
        );
    }

    #[test]
    fn test_fix_tags_unknown_to_noun() {
        assert_eq!(
            vec!["NN", "VBZ", "NN"],
            fixed(&[true, false, false], &["UNK", "VBZ", "UNK"])
        );
        assert_eq!(vec!["RB", "NN"], fixed(&[false, true], &["RB", "UNK"]));
    }

    #[test]
    fn test_fix_tags_first_position_only_unknown() {
        assert_eq!(
            vec!["NN", "NN", "NN"],
            fixed(&[true, false, false], &["NN", "NN", "NN"])
        );
        assert_eq!(vec!["VBN"], fixed(&[true], &["VBN"]));
    }

    #[test]
    fn test_fix_tags_unguessed_untouched() {
        assert_eq!(
            vec!["DT", "VB", "NN", "RB", "NNS", "JJR", "VBN"],
            fixed(
                &[false; 7],
                &["DT", "VB", "NN", "RB", "NNS", "JJR", "VBN"]
            )
        );
    }

    #[test]
    fn test_fix_tags_modifier_before_nominal() {
        for next in ["NNP", "NNPS", "NN", "NNS", "JJ", "POS"] {
            assert_eq!(
                vec!["DT", "JJ", next],
                fixed(&[false, true, false], &["DT", "VB", next])
            );
            assert_eq!(
                vec!["JJ", "JJ", next],
                fixed(&[false, true, false], &["JJ", "VBG", next])
            );
        }
        assert_eq!(
            vec!["DT", "VB", "VBZ"],
            fixed(&[false, true, false], &["DT", "VB", "VBZ"])
        );
        assert_eq!(
            vec!["NN", "VB", "NN"],
            fixed(&[false, true, false], &["NN", "VB", "NN"])
        );
    }

    #[test]
    fn test_fix_tags_modifier_before_guessed_preposition() {
        assert_eq!(
            vec!["JJ", "JJ", "IN"],
            fixed(&[false, true, true], &["JJ", "NN", "IN"])
        );
        assert_eq!(
            vec!["DT", "VB", "IN"],
            fixed(&[false, true, false], &["DT", "VB", "IN"])
        );
    }

    #[test]
    fn test_fix_tags_modifier_needs_next_position() {
        assert_eq!(vec!["DT", "VB"], fixed(&[false, true], &["DT", "VB"]));
    }

    #[test]
    fn test_fix_tags_corrections_cascade() {
        assert_eq!(
            vec!["DT", "JJ", "JJ", "NN"],
            fixed(&[false, true, true, false], &["DT", "NN", "NN", "NN"])
        );
    }

    #[test]
    fn test_fix_tags_preposition_before_comma() {
        assert_eq!(
            vec!["NN", "NN", ","],
            fixed(&[true, true, false], &["NN", "IN", ","])
        );
        assert_eq!(
            vec!["NN", "IN", ","],
            fixed(&[false, true, false], &["NN", "IN", ","])
        );
        assert_eq!(
            vec!["NN", "IN", "."],
            fixed(&[true, true, false], &["NN", "IN", "."])
        );
    }

    #[test]
    fn test_fix_tags_noun_after_adverb() {
        assert_eq!(
            vec!["RB", "JJ", "."],
            fixed(&[false, true, false], &["RB", "NNS", "."])
        );
        assert_eq!(vec!["RB", "JJ"], fixed(&[false, true], &["RB", "NN"]));
        assert_eq!(vec!["RB", "NNP"], fixed(&[false, true], &["RB", "NNP"]));
        assert_eq!(vec!["RBR", "NN"], fixed(&[false, true], &["RBR", "NN"]));
    }

    #[test]
    fn test_fix_tags_participle_after_comparative() {
        assert_eq!(vec!["RBR", "JJ"], fixed(&[false, true], &["RBR", "VBN"]));
        assert_eq!(
            vec!["JJR", "JJ", "NN"],
            fixed(&[false, true, false], &["JJR", "VBN", "NN"])
        );
        assert_eq!(vec!["RB", "VBN"], fixed(&[false, true], &["RB", "VBN"]));
    }

    #[test]
    fn test_fix_tags_right_and_left_context_both_apply() {
        assert_eq!(
            vec!["RB", "JJ", ","],
            fixed(&[true, true, false], &["RB", "IN", ","])
        );
    }

    #[test]
    fn test_fix_tags_idempotent_without_guesses() {
        let tags = ["DT", "JJ", "NN", "RB", "VBN", ",", "IN", "NNS"];
        let once = fixed(&[false; 8], &tags);
        let twice = fixed(&[false; 8], &once);
        assert_eq!(tags.to_vec(), once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fix_tags_never_leaves_unknown() {
        let cases: &[(&[bool], &[&str])] = &[
            (&[true, true, true], &["UNK", "UNK", "UNK"]),
            (&[false, true, true, false], &["DT", "UNK", "UNK", "NN"]),
            (&[true, false, true], &["RB", "UNK", "UNK"]),
            (&[false, false], &["UNK", "IN"]),
        ];
        for &(was_guessed, tags) in cases {
            let result = fixed(was_guessed, tags);
            assert!(!result.contains(&UNK), "{:?}", result);
        }
    }

    #[test]
    fn test_fix_tags_owned_tags() {
        let mut tags: Vec<String> = vec!["DT".into(), "UNK".into(), "NNS".into()];
        fix_tags(&[false, true, false], &mut tags);
        assert_eq!(vec!["DT", "JJ", "NNS"], tags);

        let mut tags: Vec<Cow<'static, str>> = vec!["RB".into(), Cow::Owned("NN".to_string())];
        fix_tags(&[false, true], &mut tags);
        assert_eq!(vec!["RB", "JJ"], tags);
    }

    #[test]
    #[should_panic(expected = "`was_guessed` and `tags` must have the same length")]
    fn test_fix_tags_length_mismatch() {
        fixed(&[true], &["DT", "NN"]);
    }
}
