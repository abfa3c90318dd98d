//! Sentify: keyword-lexicon emotion classification for short, code-mixed
//! comments (English, Hindi, Telugu, Tamil), with an HTTP API that can
//! classify a YouTube video's comments.

pub mod api;
pub mod classifier;
pub mod config;
pub mod emotion;
pub mod error;
pub mod lexicon;
pub mod youtube;

pub use classifier::classify;
pub use emotion::{Emotion, Verdict};
