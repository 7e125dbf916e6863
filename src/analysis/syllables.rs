// ============================================================
// Layer 5 — Syllable Counters
// ============================================================
// Two implementations of the SyllableCounter trait:
//
//   VowelGroupCounter     — spelling heuristic, no data needed
//   PronouncingDictionary — CMU-format pronouncing dictionary,
//                           falls back to the heuristic for
//                           words it does not know
//
// Heuristic rules (English spelling):
//   1. every maximal run of vowels (a e i o u y) is one syllable
//   2. a final silent "e" is dropped        ("love"   → 1)
//      ...unless it is consonant + "le"     ("table"  → 2)
//   3. a final "ed" is silent except after t/d
//                                           ("jumped" → 1, "wanted" → 2)
//   4. a final "es" is silent except after s, x, z, c, g, ch, sh
//                                           ("makes"  → 1, "boxes"  → 2)
//   5. a word with letters has at least one syllable
//
// CMU dictionary line format:
//   WONDERFUL  W AH1 N D ER0 F AH0 L
//   WONDERFUL(2)  ...        ← alternates, ignored
//   ;;; comment
// Syllables are the phones carrying a stress digit.

use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path};

use crate::domain::traits::SyllableCounter;

// ─── VowelGroupCounter ────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelGroupCounter;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

impl SyllableCounter for VowelGroupCounter {
    fn syllables(&self, word: &str) -> usize {
        let letters: Vec<char> = word
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();

        if letters.is_empty() {
            return 0;
        }

        let mut count     = 0usize;
        let mut in_vowels = false;
        for &c in &letters {
            let v = is_vowel(c);
            if v && !in_vowels {
                count += 1;
            }
            in_vowels = v;
        }

        let n   = letters.len();
        let at  = |i: usize| letters[i];
        let ends = |suffix: &str| {
            let s: Vec<char> = suffix.chars().collect();
            n >= s.len() && letters[n - s.len()..] == s[..]
        };

        let silent = if ends("le") {
            n >= 3 && is_vowel(at(n - 3))
        } else if ends("ed") {
            n >= 3 && !matches!(at(n - 3), 't' | 'd')
        } else if ends("es") {
            n >= 3
                && !matches!(at(n - 3), 's' | 'x' | 'z' | 'c' | 'g')
                && !ends("ches")
                && !ends("shes")
        } else {
            ends("e")
        };

        if silent && count > 1 {
            count -= 1;
        }

        count.max(1)
    }
}

// ─── PronouncingDictionary ────────────────────────────────────────────────────
/// Syllable counts looked up in a CMU-format pronouncing dictionary.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    counts:   HashMap<String, usize>,
    fallback: VowelGroupCounter,
}

impl PronouncingDictionary {
    /// Load a dictionary file such as `cmudict.dict`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read pronouncing dictionary '{}'", path.display()))?;
        let dict = Self::parse(&String::from_utf8_lossy(&bytes));

        tracing::info!(
            "Loaded pronunciations for {} words from '{}'",
            dict.word_count(),
            path.display()
        );
        Ok(dict)
    }

    /// Parse dictionary text. The first pronunciation of a word wins.
    pub fn parse(text: &str) -> Self {
        let mut counts = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(head) = parts.next() else { continue };

            // "word(2)" is an alternate pronunciation
            if head.ends_with(')') && head.contains('(') {
                continue;
            }

            let stressed = parts
                .take_while(|p| !p.starts_with('#'))
                .filter(|p| p.ends_with(|c: char| c.is_ascii_digit()))
                .count();

            counts.entry(head.to_lowercase()).or_insert(stressed);
        }

        Self { counts, fallback: VowelGroupCounter }
    }

    /// Number of distinct words with a known pronunciation
    pub fn word_count(&self) -> usize {
        self.counts.len()
    }

    /// Count from the dictionary only.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }
}

impl SyllableCounter for PronouncingDictionary {
    fn syllables(&self, word: &str) -> usize {
        self.lookup(word)
            .unwrap_or_else(|| self.fallback.syllables(word))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_basic_words() {
        let c = VowelGroupCounter;
        assert_eq!(c.syllables("cat"), 1);
        assert_eq!(c.syllables("wonderful"), 3);
        assert_eq!(c.syllables("beautiful"), 3);
        assert_eq!(c.syllables("rhythm"), 1);
    }

    #[test]
    fn test_heuristic_silent_endings() {
        let c = VowelGroupCounter;
        assert_eq!(c.syllables("love"), 1);
        assert_eq!(c.syllables("the"), 1);
        assert_eq!(c.syllables("table"), 2);
        assert_eq!(c.syllables("jumped"), 1);
        assert_eq!(c.syllables("wanted"), 2);
        assert_eq!(c.syllables("makes"), 1);
        assert_eq!(c.syllables("boxes"), 2);
        assert_eq!(c.syllables("watches"), 2);
    }

    #[test]
    fn test_heuristic_numbers_have_no_syllables() {
        assert_eq!(VowelGroupCounter.syllables("2024"), 0);
    }

    #[test]
    fn test_dictionary_parse_and_lookup() {
        let text = ";;; comment\n\
                    WONDERFUL  W AH1 N D ER0 F AH0 L\n\
                    read  R EH1 D\n\
                    read(2)  R IY1 D IY0\n\
                    cat K AE1 T # a comment\n";
        let d = PronouncingDictionary::parse(text);
        assert_eq!(d.word_count(), 3);
        assert_eq!(d.lookup("wonderful"), Some(3));
        assert_eq!(d.lookup("read"), Some(1));
        assert_eq!(d.lookup("cat"), Some(1));
    }

    #[test]
    fn test_dictionary_falls_back_to_heuristic() {
        let d = PronouncingDictionary::parse("CAT  K AE1 T\n");
        assert_eq!(d.syllables("cat"), 1);
        assert_eq!(d.syllables("beautiful"), 3);
    }

    #[test]
    fn test_dictionary_load_from_disk() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmudict.dict");
        fs::write(&path, "analysis AH0 N AE1 L AH0 S AH0 S\n").unwrap();

        let d = PronouncingDictionary::load(&path).unwrap();
        assert_eq!(d.syllables("analysis"), 4);
    }
}
