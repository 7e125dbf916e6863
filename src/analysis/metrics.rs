// ============================================================
// Layer 5 — Metrics Calculator
// ============================================================
// Turns one article's text into one AnalysisRecord.
//
// The step order matters because later formulas reuse earlier
// results:
//
//   1. words      — lower-cased Treebank tokens, alphanumeric
//                   only, stop words removed
//   2. sentences  — split from the original text
//   3. sentiment  — positive / negative counts
//                   polarity     = (P - N) / (P + N + ε)
//                   subjectivity = (P + N) / (words + ε)
//   4. readability
//                   complex word = len > 2 and syllables > 2
//                   avg sentence length = words / sentences
//                   % complex    = 100 * complex / words
//                   fog index    = 0.4 * (avg sentence length + % complex)
//   5. syllables per word = Σ syllables / words
//   6. personal pronouns  — counted on the ORIGINAL text
//   7. avg word length    = Σ characters / words
//
// ε = 1e-6 keeps the sentiment ratios finite. The readability
// ratios have no such guard: a document with no countable
// words or no sentences is rejected with EmptyDocument.

use anyhow::Result;

use crate::analysis::pronouns::PronounCounter;
use crate::data::{
    lexicon::Lexicon,
    sentences::split_sentences,
    tokenizer::{is_alphanumeric_token, tokenize_sentence},
};
use crate::domain::{
    analysis_record::AnalysisRecord,
    error::AnalysisError,
    traits::SyllableCounter,
};

/// Added to sentiment denominators so they are never zero
pub const EPSILON: f64 = 0.000001;

/// A word longer than this many characters can be complex
const COMPLEX_MIN_CHARS: usize = 2;

/// A word with more than this many syllables is complex
const COMPLEX_MIN_SYLLABLES: usize = 2;

/// Computes AnalysisRecords against a shared lexicon.
///
/// Borrows the lexicon and syllable counter so one calculator
/// can be reused for every document in a run.
pub struct MetricsCalculator<'a> {
    lexicon:   &'a Lexicon,
    syllables: &'a dyn SyllableCounter,
    pronouns:  PronounCounter,
}

impl<'a> MetricsCalculator<'a> {
    pub fn new(lexicon: &'a Lexicon, syllables: &'a dyn SyllableCounter) -> Result<Self> {
        Ok(Self {
            lexicon,
            syllables,
            pronouns: PronounCounter::new()?,
        })
    }

    /// Step 1: lower-cased, alphanumeric, non-stop-word tokens.
    pub fn clean_words(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .flat_map(|s| tokenize_sentence(&s.to_lowercase()))
            .filter(|w| is_alphanumeric_token(w) && !self.lexicon.is_stop_word(w))
            .collect()
    }

    /// Compute every metric for one document.
    pub fn analyze(
        &self,
        identifier: &str,
        url:        &str,
        text:       &str,
    ) -> Result<AnalysisRecord, AnalysisError> {
        // ── Steps 1-2: tokens ─────────────────────────────────────────────────
        let words     = self.clean_words(text);
        let sentences = split_sentences(text);

        if words.is_empty() || sentences.is_empty() {
            return Err(AnalysisError::EmptyDocument {
                words:     words.len(),
                sentences: sentences.len(),
            });
        }

        let word_count = words.len();
        let n_words    = word_count as f64;
        let n_sents    = sentences.len() as f64;

        // ── Step 3: sentiment ─────────────────────────────────────────────────
        let positive = words.iter().filter(|w| self.lexicon.is_positive(w)).count();
        let negative = words.iter().filter(|w| self.lexicon.is_negative(w)).count();
        let (p, n)   = (positive as f64, negative as f64);

        let polarity_score     = (p - n) / (p + n + EPSILON);
        let subjectivity_score = (p + n) / (n_words + EPSILON);

        // ── Steps 4-5: readability ────────────────────────────────────────────
        let syllable_counts: Vec<usize> = words
            .iter()
            .map(|w| self.syllables.syllables(w))
            .collect();

        let complex_word_count = words
            .iter()
            .zip(&syllable_counts)
            .filter(|&(w, &s)| w.chars().count() > COMPLEX_MIN_CHARS && s > COMPLEX_MIN_SYLLABLES)
            .count();

        let avg_sentence_length      = n_words / n_sents;
        let avg_words_per_sentence   = n_words / n_sents;
        let percentage_complex_words = complex_word_count as f64 / n_words * 100.0;
        let fog_index                = 0.4 * (avg_sentence_length + percentage_complex_words);
        let syllables_per_word       = syllable_counts.iter().sum::<usize>() as f64 / n_words;

        // ── Step 6: pronouns on the unfiltered text ───────────────────────────
        let personal_pronouns = self.pronouns.count(text);

        // ── Step 7: word length ───────────────────────────────────────────────
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length    = total_chars as f64 / n_words;

        Ok(AnalysisRecord {
            identifier: identifier.to_string(),
            url:        url.to_string(),
            positive_score: positive,
            negative_score: negative,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index,
            avg_words_per_sentence,
            complex_word_count,
            word_count,
            syllables_per_word,
            personal_pronouns,
            avg_word_length,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::syllables::VowelGroupCounter;
    use std::collections::HashSet;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn example_lexicon() -> Lexicon {
        Lexicon::new(
            set(&["love", "great", "wonderful"]),
            set(&["bad", "terrible"]),
            set(&["this", "it", "is", "and"]),
        )
    }

    const EXAMPLE: &str = "I love this. It is great and wonderful.";

    /// Counts one syllable per character so tests control complexity
    struct CharSyllables;
    impl SyllableCounter for CharSyllables {
        fn syllables(&self, word: &str) -> usize {
            word.chars().count()
        }
    }

    #[test]
    fn test_worked_example() {
        let lex  = example_lexicon();
        let calc = MetricsCalculator::new(&lex, &VowelGroupCounter).unwrap();

        assert_eq!(calc.clean_words(EXAMPLE), vec!["i", "love", "great", "wonderful"]);

        let r = calc.analyze("1", "http://x", EXAMPLE).unwrap();
        assert_eq!(r.positive_score, 3);
        assert_eq!(r.negative_score, 0);
        assert!((r.polarity_score - 1.0).abs() < 1e-5);
        assert!((r.subjectivity_score - 0.75).abs() < 1e-5);
        assert_eq!(r.word_count, 4);
        assert_eq!(r.personal_pronouns, 1);
        assert_eq!(r.avg_sentence_length, 2.0);
        assert_eq!(r.avg_words_per_sentence, 2.0);
        // Only "wonderful" has three syllables
        assert_eq!(r.complex_word_count, 1);
        assert_eq!(r.percentage_complex_words, 25.0);
        assert!((r.fog_index - 10.8).abs() < 1e-9);
        assert_eq!(r.syllables_per_word, 1.5);
        assert_eq!(r.avg_word_length, 4.75);
    }

    #[test]
    fn test_negative_polarity() {
        let lex  = example_lexicon();
        let calc = MetricsCalculator::new(&lex, &VowelGroupCounter).unwrap();
        let r = calc.analyze("2", "u", "Bad food. Terrible service. Bad bad day.").unwrap();

        assert_eq!(r.positive_score, 0);
        assert_eq!(r.negative_score, 4);
        assert!(r.polarity_score < -0.99);
        assert!(r.polarity_score >= -1.0);
    }

    #[test]
    fn test_score_bounds_and_fog_formula() {
        let lex  = example_lexicon();
        let calc = MetricsCalculator::new(&lex, &VowelGroupCounter).unwrap();
        let text = "Love conquers everything. The terrible weather was bad! \
                    Nevertheless, the wonderful community celebrated greatly.";
        let r = calc.analyze("3", "u", text).unwrap();

        assert!((-1.0..=1.0).contains(&r.polarity_score));
        assert!((0.0..=1.0).contains(&r.subjectivity_score));
        assert!(r.complex_word_count <= r.word_count);
        assert_eq!(
            r.fog_index,
            0.4 * (r.avg_sentence_length + r.percentage_complex_words)
        );
    }

    #[test]
    fn test_injected_syllable_counter() {
        let lex  = example_lexicon();
        let calc = MetricsCalculator::new(&lex, &CharSyllables).unwrap();
        let r = calc.analyze("4", "u", EXAMPLE).unwrap();

        // love, great and wonderful all exceed 2 "syllables" now
        assert_eq!(r.complex_word_count, 3);
        assert_eq!(r.syllables_per_word, 19.0 / 4.0);
    }

    #[test]
    fn test_short_words_are_never_complex() {
        let lex  = Lexicon::default();
        let calc = MetricsCalculator::new(&lex, &CharSyllables).unwrap();
        let r = calc.analyze("5", "u", "Go to it.").unwrap();
        assert_eq!(r.complex_word_count, 0);
    }

    #[test]
    fn test_same_input_same_record() {
        let lex  = example_lexicon();
        let calc = MetricsCalculator::new(&lex, &VowelGroupCounter).unwrap();
        let a = calc.analyze("6", "u", EXAMPLE).unwrap();
        let b = calc.analyze("6", "u", EXAMPLE).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_pronouns_counted_before_stop_word_filtering() {
        let lex  = Lexicon::new(HashSet::new(), HashSet::new(), set(&["we", "us", "my"]));
        let calc = MetricsCalculator::new(&lex, &VowelGroupCounter).unwrap();
        let r = calc.analyze("7", "u", "We told us about my plan.").unwrap();

        assert_eq!(r.personal_pronouns, 3);
        assert_eq!(r.word_count, 3); // told, about, plan
    }

    #[test]
    fn test_only_stop_words_is_empty_document() {
        let lex  = example_lexicon();
        let calc = MetricsCalculator::new(&lex, &VowelGroupCounter).unwrap();
        let err = calc.analyze("8", "u", "It is this. And it is.").unwrap_err();
        assert_eq!(err, AnalysisError::EmptyDocument { words: 0, sentences: 2 });
    }

    #[test]
    fn test_blank_text_is_empty_document() {
        let lex  = example_lexicon();
        let calc = MetricsCalculator::new(&lex, &VowelGroupCounter).unwrap();
        let err = calc.analyze("9", "u", "  \n ").unwrap_err();
        assert_eq!(err, AnalysisError::EmptyDocument { words: 0, sentences: 0 });
    }
}
