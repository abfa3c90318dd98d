//! Keyword-based emotion classification.
//!
//! A text is scored in two passes over the lexicon:
//! 1. any multi-word phrase found anywhere in the text wins outright with score 10;
//! 2. otherwise each token is looked up, with a preceding negation marker
//!    flipping the meaning of the next matched token only.
//!
//! Accumulated scores are then resolved through [`PRIORITY`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::emotion::{Emotion, Verdict, PRIORITY};
use crate::lexicon::{Lexicon, LEXICON};

/// Fixed score given to a phrase hit.
pub const PHRASE_SCORE: u32 = 10;
const TOKEN_SCORE: u32 = 2;
const NEGATED_POSITIVE_SCORE: u32 = 2;
const NEGATED_NEGATIVE_SCORE: u32 = 1;

static TOKEN_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\s\x1c-\x1f,.!?;:"()]+"#).expect("token split pattern is valid")
});

/// Classifies `text` against the built-in lexicon.
pub fn classify(text: &str) -> Verdict {
    LEXICON.classify(text)
}

/// Splits already-lowercased text into tokens, dropping empty pieces.
/// The ASCII file/group/record/unit separators (0x1C-0x1F) split too.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_SPLIT.split(text).filter(|t| !t.is_empty())
}

impl Lexicon {
    /// Classifies `text` against this lexicon. Total over all inputs.
    pub fn classify(&self, text: &str) -> Verdict {
        let lowered = text.to_lowercase();

        if let Some(emotion) = self.match_phrase(&lowered) {
            tracing::trace!(%emotion, "phrase match");
            return Verdict {
                emotion,
                score: PHRASE_SCORE,
            };
        }

        let mut scores = [0u32; Emotion::COUNT];
        let mut negated = false;

        for token in tokenize(&lowered) {
            if self.is_negation(token) {
                negated = true;
                continue;
            }

            let Some(emotion) = self.match_token(token) else {
                continue;
            };

            if negated {
                if emotion.is_positive_affect() {
                    scores[Emotion::Negative.index()] += NEGATED_POSITIVE_SCORE;
                } else {
                    scores[Emotion::Positive.index()] += NEGATED_NEGATIVE_SCORE;
                }
                negated = false;
            } else {
                scores[emotion.index()] += TOKEN_SCORE;
            }
        }

        resolve(&scores)
    }
}

/// Picks the highest score; earlier entries in [`PRIORITY`] keep ties.
fn resolve(scores: &[u32; Emotion::COUNT]) -> Verdict {
    PRIORITY
        .iter()
        .fold(Verdict::neutral(), |best, &emotion| {
            let score = scores[emotion.index()];
            if score > best.score {
                Verdict { emotion, score }
            } else {
                best
            }
        })
}
