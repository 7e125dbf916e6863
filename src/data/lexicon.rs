// ============================================================
// Layer 4 — Lexicon (Dictionaries + Stop Words)
// ============================================================
// Loads the three word sets every document is scored against:
//
//   positive words  — one per line, e.g. MasterDictionary/positive-words.txt
//   negative words  — one per line, e.g. MasterDictionary/negative-words.txt
//   stop words      — every StopWords/<prefix>*.txt file, whitespace
//                     separated, unioned into one set
//
// All three are built once per run and only ever read after that,
// so the calculator borrows a &Lexicon for every document.
//
// Files are decoded lossily: word lists in the wild are often
// Latin-1, and a single bad byte should not abort the run.
// Every entry is lower-cased because tokens are lower-cased
// before lookup.

use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// The immutable word sets shared by every document in a run.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub positive:   HashSet<String>,
    pub negative:   HashSet<String>,
    pub stop_words: HashSet<String>,
}

impl Lexicon {
    pub fn new(
        positive:   HashSet<String>,
        negative:   HashSet<String>,
        stop_words: HashSet<String>,
    ) -> Self {
        Self { positive, negative, stop_words }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

/// Where to find the word lists on disk.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    pub positive_path:    PathBuf,
    pub negative_path:    PathBuf,
    pub stopwords_dir:    PathBuf,
    pub stopwords_prefix: String,
}

impl LexiconLoader {
    pub fn load(&self) -> Result<Lexicon> {
        let positive = load_word_list(&self.positive_path)?;
        let negative = load_word_list(&self.negative_path)?;
        let stop_words = load_stop_words(&self.stopwords_dir, &self.stopwords_prefix)?;

        let overlap = positive.intersection(&negative).count();
        if overlap > 0 {
            // Such words count towards both scores and cancel out in polarity
            tracing::warn!("{} words appear in both sentiment dictionaries", overlap);
        }

        tracing::info!(
            "Lexicon ready: {} positive, {} negative, {} stop words",
            positive.len(),
            negative.len(),
            stop_words.len()
        );

        Ok(Lexicon::new(positive, negative, stop_words))
    }
}

/// Read a one-word-per-line dictionary file.
pub fn load_word_list(path: &Path) -> Result<HashSet<String>> {
    let text = read_lossy(path)
        .with_context(|| format!("Cannot read dictionary '{}'", path.display()))?;
    let words = parse_word_list(&text);
    tracing::debug!("Loaded {} words from '{}'", words.len(), path.display());
    Ok(words)
}

/// Union every `<prefix>*.txt` file in `dir` into one stop-word set.
pub fn load_stop_words(dir: &Path, prefix: &str) -> Result<HashSet<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Cannot read stop-word directory '{}'", dir.display()))?
    {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(prefix) && n.ends_with(".txt"))
            .unwrap_or(false);

        if matches && path.is_file() {
            files.push(path);
        }
    }

    // read_dir order is platform dependent
    files.sort();

    if files.is_empty() {
        tracing::warn!(
            "No '{}*.txt' files in '{}'; no stop words will be removed",
            prefix,
            dir.display()
        );
    }

    let mut stop_words = HashSet::new();
    for path in &files {
        let text = read_lossy(path)
            .with_context(|| format!("Cannot read stop-word file '{}'", path.display()))?;
        let before = stop_words.len();
        stop_words.extend(parse_stop_words(&text));
        tracing::debug!(
            "'{}' added {} stop words",
            path.display(),
            stop_words.len() - before
        );
    }

    Ok(stop_words)
}

/// One entry per non-empty line. Lines starting with ';' are
/// comments (the usual header of published sentiment lists).
pub fn parse_word_list(text: &str) -> HashSet<String> {
    strip_bom(text)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with(';'))
        .map(str::to_lowercase)
        .collect()
}

/// Every whitespace-separated word in the text, lower-cased.
pub fn parse_stop_words(text: &str) -> HashSet<String> {
    strip_bom(text)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_skips_blanks_and_comments() {
        let words = parse_word_list("\u{FEFF}; positive words\n\nGood\n  great \n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("good"));
        assert!(words.contains("great"));
    }

    #[test]
    fn test_stop_words_split_on_whitespace() {
        let words = parse_stop_words("SMITH | Surnames\nJones\tBrown");
        assert!(words.contains("smith"));
        assert!(words.contains("jones"));
        assert!(words.contains("brown"));
        assert!(words.contains("surnames"));
    }

    #[test]
    fn test_load_stop_words_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("StopWords_Names.txt"), "ALICE\nBOB").unwrap();
        fs::write(dir.path().join("StopWords_Generic.txt"), "the a an").unwrap();
        fs::write(dir.path().join("Other.txt"), "ignored").unwrap();
        fs::write(dir.path().join("StopWords_Notes.md"), "ignored").unwrap();

        let words = load_stop_words(dir.path(), "StopWords_").unwrap();
        assert_eq!(words.len(), 5);
        assert!(words.contains("alice"));
        assert!(words.contains("an"));
        assert!(!words.contains("ignored"));
    }

    #[test]
    fn test_load_word_list_tolerates_invalid_utf8() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("negative-words.txt");
        fs::write(&path, b"bad\nna\xefve\nworse\n").unwrap();

        let words = load_word_list(&path).unwrap();
        assert!(words.contains("bad"));
        assert!(words.contains("worse"));
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_loader_builds_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let dict = dir.path().join("MasterDictionary");
        let stop = dir.path().join("StopWords");
        fs::create_dir_all(&dict).unwrap();
        fs::create_dir_all(&stop).unwrap();
        fs::write(dict.join("positive-words.txt"), "love\ngreat\n").unwrap();
        fs::write(dict.join("negative-words.txt"), "hate\n").unwrap();
        fs::write(stop.join("StopWords_Generic.txt"), "THE\nAND\n").unwrap();

        let lexicon = LexiconLoader {
            positive_path:    dict.join("positive-words.txt"),
            negative_path:    dict.join("negative-words.txt"),
            stopwords_dir:    stop,
            stopwords_prefix: "StopWords_".to_string(),
        }
        .load()
        .unwrap();

        assert!(lexicon.is_positive("love"));
        assert!(lexicon.is_negative("hate"));
        assert!(lexicon.is_stop_word("the"));
        assert!(!lexicon.is_stop_word("love"));
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        let err = load_word_list(Path::new("/no/such/positive-words.txt")).unwrap_err();
        assert!(format!("{err}").contains("Cannot read dictionary"));
    }
}
