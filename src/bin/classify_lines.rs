//! Classifies each non-blank stdin line and prints one JSON verdict per line.
//!
//! echo "semma mass da" | cargo run --bin classify_lines

use anyhow::Result;
use serde::Serialize;
use std::io::{self, BufRead, Write};

use sentify::{classify, Emotion};

#[derive(Serialize)]
struct Line<'a> {
    text: &'a str,
    emotion: Emotion,
    score: u32,
}

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let verdict = classify(text);
        let record = Line {
            text,
            emotion: verdict.emotion,
            score: verdict.score,
        };
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }

    Ok(())
}
