// ============================================================
// Layer 4 — Sentence Splitter
// ============================================================
// Splits running text into sentences using the usual
// punctuation rules for English prose.
//
// A boundary is placed after a run of terminal punctuation
// (. ! ?), optionally followed by closing quotes/brackets, when:
//
//   1. the run is followed by whitespace or the end of the text
//   2. the next word does not start with a lower-case letter
//      ("e.g. the" / "approx. five" continue the sentence)
//   3. for a period: the word before it is not a known
//      abbreviation ("Mr.", "Dr.", "Inc."), a single initial
//      ("J."), or a dotted letter form ("U.S.", "e.g.", "Ph.D.")
//
// Numbers and domains ending a sentence ("version 2.0.",
// "example.com.") do not count as dotted forms.
//
// Line breaks alone are NOT boundaries, so an article title
// without punctuation runs into its first body sentence.
//
// Example:
//   "Mr. Smith arrived. He said hi! Then left"
//   → ["Mr. Smith arrived.", "He said hi!", "Then left"]

/// Words that are almost always followed by a period mid-sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc",
    "inc", "ltd", "corp", "dept", "approx", "fig", "vol", "jan", "feb",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "gov", "rev",
    "capt", "lt",
];

/// Longest piece between dots in a dotted abbreviation ("Ph" in "Ph.D")
const DOTTED_PART_MAX: usize = 2;

/// Characters that may trail terminal punctuation inside a sentence
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{2019}' | '\u{201D}')
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split `text` into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start     = 0usize;
    let mut i         = 0usize;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminal(c) {
            i += 1;
            continue;
        }

        // Consume the whole punctuation run: "?!", "...", '."', etc.
        let mut j = i;
        while j < chars.len() && is_terminal(chars[j].1) {
            j += 1;
        }
        while j < chars.len() && is_closing(chars[j].1) {
            j += 1;
        }
        let end = if j < chars.len() { chars[j].0 } else { text.len() };

        if is_boundary(text, &chars, pos, c, j) {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j.max(i + 1);
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// `punct_pos` is the byte offset of the first terminal character,
/// `after` the char index just past the punctuation run.
fn is_boundary(text: &str, chars: &[(usize, char)], punct_pos: usize, first: char, after: usize) -> bool {
    // Rule 1: end of text, or followed by whitespace
    if after >= chars.len() {
        return true;
    }
    if !chars[after].1.is_whitespace() {
        return false;
    }

    // Rule 2: next word starting lower-case continues the sentence
    let next = chars[after..].iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
    if matches!(next, Some(c) if c.is_lowercase()) {
        return false;
    }

    // Rule 3: abbreviations only matter for a lone period
    if first == '.' && ends_with_abbreviation(&text[..punct_pos]) {
        return false;
    }

    true
}

fn ends_with_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or("");

    if word.is_empty() {
        return false;
    }

    // Single initial: "J. R. R. Tolkien"
    let mut letters = word.chars();
    if let (Some(c), None) = (letters.next(), letters.next()) {
        return c.is_alphabetic();
    }

    if word.contains('.') {
        return is_dotted_letters(word);
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// "U.S", "e.g", "Ph.D" but not "2.0" or "example.com"
fn is_dotted_letters(word: &str) -> bool {
    word.split('.').all(|part| {
        let n = part.chars().count();
        n > 0 && n <= DOTTED_PART_MAX && part.chars().all(char::is_alphabetic)
    })
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, s: &'a str) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s);
    }
}
