//! Emotion categories and the verdict produced for one piece of text.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Fixed set of emotion tags a comment can be classified as.
///
/// `Positive` is only ever reached by negating a non-positive trigger
/// ("not bad"), and `Neutral` is the fallback when nothing scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Excited,
    Happy,
    Grateful,
    Angry,
    Sad,
    Confused,
    Negative,
    Positive,
    Neutral,
}

/// Tie-break order used when resolving accumulated scores.
/// An earlier entry keeps its place unless a later one scores strictly higher.
pub const PRIORITY: [Emotion; 8] = [
    Emotion::Angry,
    Emotion::Excited,
    Emotion::Sad,
    Emotion::Grateful,
    Emotion::Happy,
    Emotion::Confused,
    Emotion::Negative,
    Emotion::Positive,
];

impl Emotion {
    pub const COUNT: usize = 9;

    /// Slot of this emotion in a score table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Categories whose negation counts against the text ("not amazing").
    pub fn is_positive_affect(self) -> bool {
        matches!(self, Emotion::Happy | Emotion::Excited | Emotion::Grateful)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Excited => "excited",
            Emotion::Happy => "happy",
            Emotion::Grateful => "grateful",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Confused => "confused",
            Emotion::Negative => "negative",
            Emotion::Positive => "positive",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Verdict {
    pub emotion: Emotion,
    #[schema(example = 2)]
    pub score: u32,
}

impl Verdict {
    pub fn neutral() -> Self {
        Self {
            emotion: Emotion::Neutral,
            score: 0,
        }
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::neutral()
    }
}
