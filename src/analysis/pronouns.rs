// ============================================================
// Layer 5 — Personal Pronoun Counter
// ============================================================
// Counts whole-word, case-insensitive occurrences of
//
//   i, we, my, ours, us
//
// in the ORIGINAL article text. Unlike every other metric this
// runs before stop-word filtering, so pronouns that happen to
// be stop words are still counted.
//
// Word boundaries are Unicode-aware: "us" inside "bonus" or
// "I" inside "AI" never match, but "I" in "I'm" does, because
// the apostrophe is a boundary.

use anyhow::Result;
use regex::Regex;

const PRONOUN_PATTERN: &str = r"(?i)\b(?:i|we|my|ours|us)\b";

pub struct PronounCounter {
    pattern: Regex,
}

impl PronounCounter {
    pub fn new() -> Result<Self> {
        Ok(Self { pattern: Regex::new(PRONOUN_PATTERN)? })
    }

    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}
