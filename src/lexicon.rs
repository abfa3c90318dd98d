//! Multilingual trigger lexicon (English, Hindi, Telugu, Tamil; Latin and native script).
//!
//! Categories are kept in declaration order. Both the phrase pass and the
//! token pass stop at the first category that matches, so the order below
//! decides which emotion wins when a trigger is listed more than once
//! (e.g. "nandri" is both happy and grateful and resolves to happy).

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::emotion::Emotion;

const EXCITED: &[&str] = &[
    // English
    "excited", "hyped", "cant wait", "can't wait", "fire", "lit", "awesome", "epic",
    "legendary", "goated", "w", "win", "sheesh", "insane", "crazy good",
    // Hindi
    "maza aa gaya", "badiya", "zabardast", "josh", "mast hai", "bahut accha",
    "bahut badhiya", "majedar", "dhamaal",
    // Telugu
    "kirrak", "keka", "racha", "mass", "blockbuster",
    "bagundi ra", "super ra", "chala bagundi",
    "బాగుంది", "సూపర్", "అద్భుతం",
    // Tamil
    "vera level", "semma", "mass da", "super da",
    "அருமை", "சூப்பர்", "மாஸ்",
];

const HAPPY: &[&str] = &[
    // English
    "love", "amazing", "beautiful", "great", "fantastic", "nice", "wonderful",
    "excellent", "brilliant", "cool", "best", "favourite",
    // Hindi
    "acha", "accha", "achha", "khush", "khushi", "pyaar",
    "bahut achha", "sundar", "mast", "badhiya",
    "अच्छा", "खुश", "सुंदर",
    // Telugu
    "bagundi", "bagundhi", "chala bagundi",
    "santosham", "happy ga", "nachindi",
    "బాగుంది", "సంతోషం", "నచ్చింది",
    // Tamil
    "nandri", "romba nalla", "nalla iruku", "magizhchi",
    "நல்லா இருக்கு", "மகிழ்ச்சி",
];

const GRATEFUL: &[&str] = &[
    "thank", "thanks", "thank you", "thx", "appreciate", "grateful", "respect",
    "shukriya", "dhanyavad", "bohot shukriya",
    "nandri", "thanks anna", "thanks bro",
    "ధన్యవాదాలు", "నன்றி",
];

const ANGRY: &[&str] = &[
    // English
    "hate", "worst", "stupid", "idiot", "trash", "useless", "disgusting",
    "nonsense", "fake", "fraud", "scam", "terrible",
    // Hindi
    "bakwaas", "ghatiya", "bekaar", "faltu", "bewakoof",
    "bakwas hai", "gussa aa raha",
    "बकवास", "घटिया", "बेकार",
    // Telugu
    "waste", "daridram", "bokka", "rod", "chee",
    "chala worst", "nachaledu",
    "దారిద్రం", "చీ", "నచ్చలేదు",
    // Tamil
    "sollu", "mokke", "kevalam", "kadupu",
    "கேவலம்", "மொக்கை",
];

const SAD: &[&str] = &[
    "sad", "cry", "crying", "miss", "heartbroken", "pain", "depressed",
    "dukh", "dard", "dukhi", "rona aa gaya",
    "baadha", "edupu", "badha padutundi",
    "kashtam", "paavam",
    "దుఃఖం", "బాధ", "கஷ்டம்",
];

const CONFUSED: &[&str] = &[
    "confused", "why", "what", "how", "really", "seriously", "doubt",
    "kya", "kyun", "kaise", "samajh nahi aya",
    "enti", "enduku", "ela", "ardham kaledu",
    "enna", "epdi", "puriyala",
    "ఎంటి", "ఎందుకు", "புரியல",
];

const NEGATIVE: &[&str] = &[
    "bad", "boring", "slow", "mid", "average", "problem", "issue",
    "bug", "glitch", "error", "hard", "lag",
    "problem hai", "issue hai",
    "baledu", "ledu", "problem undi",
    "seri illa", "problem iruku",
    "లేదు", "இல்லை",
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "dont", "don't", "didn't", "isn't",
    "nahi", "mat", "na", "illa", "illai",
    "kadhu", "ledu", "oddu",
];

/// Built-in lexicon, initialized once and shared read-only.
pub static LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_entries(
        &[
            (Emotion::Excited, EXCITED),
            (Emotion::Happy, HAPPY),
            (Emotion::Grateful, GRATEFUL),
            (Emotion::Angry, ANGRY),
            (Emotion::Sad, SAD),
            (Emotion::Confused, CONFUSED),
            (Emotion::Negative, NEGATIVE),
        ],
        NEGATIONS,
    )
});

/// Triggers for one emotion, split by how they are matched.
#[derive(Debug, Clone)]
pub struct CategoryTriggers {
    pub emotion: Emotion,
    /// Multi-word triggers, matched as substrings of the whole lowercased text.
    pub phrases: Vec<&'static str>,
    /// Single-word triggers, matched against individual tokens.
    pub tokens: HashSet<&'static str>,
}

impl CategoryTriggers {
    fn new(emotion: Emotion, triggers: &[&'static str]) -> Self {
        let (phrases, tokens): (Vec<&'static str>, Vec<&'static str>) =
            triggers.iter().copied().partition(|t| t.contains(char::is_whitespace));

        Self {
            emotion,
            phrases,
            tokens: tokens.into_iter().collect(),
        }
    }
}

/// Ordered category triggers plus the negation markers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: Vec<CategoryTriggers>,
    negations: HashSet<&'static str>,
}

impl Lexicon {
    /// Builds a lexicon from `(emotion, triggers)` pairs. Pair order is the
    /// match order. Triggers are expected to be lowercase already.
    pub fn from_entries(
        categories: &[(Emotion, &[&'static str])],
        negations: &[&'static str],
    ) -> Self {
        Self {
            categories: categories
                .iter()
                .map(|(emotion, triggers)| CategoryTriggers::new(*emotion, triggers))
                .collect(),
            negations: negations.iter().copied().collect(),
        }
    }

    pub fn categories(&self) -> &[CategoryTriggers] {
        &self.categories
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    /// First category (in declaration order) whose phrase occurs in `text`.
    pub fn match_phrase(&self, text: &str) -> Option<Emotion> {
        self.categories
            .iter()
            .find(|c| c.phrases.iter().any(|p| text.contains(p)))
            .map(|c| c.emotion)
    }

    /// First category (in declaration order) listing `token` as a single-word trigger.
    pub fn match_token(&self, token: &str) -> Option<Emotion> {
        self.categories
            .iter()
            .find(|c| c.tokens.contains(token))
            .map(|c| c.emotion)
    }
}
