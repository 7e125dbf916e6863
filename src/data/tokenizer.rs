// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Splits text into word tokens the way Penn-Treebank style
// tokenizers do, then the calculator keeps only the purely
// alphanumeric ones.
//
// Why not just take runs of letters?
//   Treebank rules decide what a "word" is differently at the
//   edges, and those decisions change the counts:
//
//     "don't"    → "do", "n't"      (keeps "do", drops "n't")
//     "U.S."     → "U.S."           (dropped: has periods)
//     "e-mail"   → "e-mail"         (dropped: has a hyphen)
//     "3,000"    → "3,000"          (dropped: has a comma)
//     "end."     → "end", "."       (only at the end of a sentence)
//
// Callers tokenise one sentence at a time (see split_sentences)
// so that only the sentence-final period is split off.

/// Punctuation that always becomes its own token
fn always_split(c: char) -> bool {
    matches!(
        c,
        ';' | '@' | '#' | '$' | '%' | '&' | '?' | '!' | '(' | ')' | '[' | ']'
            | '{' | '}' | '<' | '>' | '"' | '`' | '\u{201C}' | '\u{201D}'
    )
}

/// Clitic suffixes split off the end of a word
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Tokenise a single sentence.
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let spaced = space_out_punctuation(sentence);
    let mut tokens: Vec<String> = Vec::new();

    for raw in spaced.split_whitespace() {
        split_word(raw, &mut tokens);
    }

    // Only the sentence-final period is a separate token
    if let Some(last) = tokens.last_mut() {
        if last.len() > 1 && last.ends_with('.') {
            last.pop();
            tokens.push(".".to_string());
        }
    }

    tokens
}

/// True when every character is a letter or digit (and there is one).
pub fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Surround split-worthy punctuation with spaces.
fn space_out_punctuation(sentence: &str) -> String {
    let chars: Vec<char> = sentence.chars().collect();
    let mut out = String::with_capacity(sentence.len() + 16);

    for (i, &c) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };

        let split = if always_split(c) {
            true
        } else if c == ',' || c == ':' {
            // "3,000" and "10:30" stay whole
            !(matches!(prev, Some(p) if p.is_ascii_digit())
                && matches!(next, Some(n) if n.is_ascii_digit()))
        } else if c == '-' {
            // "--" dash, but not "e-mail"
            next == Some('-') || prev == Some('-')
        } else {
            false
        };

        if split {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}

/// Split leading/trailing single quotes and clitics off one word.
fn split_word(raw: &str, out: &mut Vec<String>) {
    // Normalise typographic apostrophes so clitic rules apply
    let word = raw.replace('\u{2019}', "'").replace('\u{2018}', "'");
    let mut core = word.as_str();

    while let Some(rest) = core.strip_prefix('\'') {
        out.push("'".to_string());
        core = rest;
    }

    let mut trailing = 0usize;
    while core.ends_with('\'') {
        core = &core[..core.len() - 1];
        trailing += 1;
    }

    if core.eq_ignore_ascii_case("cannot") {
        out.push(core[..3].to_string());
        out.push(core[3..].to_string());
    } else if let Some(clitic) = CLITICS
        .iter()
        .find(|c| core.len() > c.len() && core.to_ascii_lowercase().ends_with(**c))
    {
        let cut = core.len() - clitic.len();
        out.push(core[..cut].to_string());
        out.push(core[cut..].to_string());
    } else if !core.is_empty() {
        out.push(core.to_string());
    }

    out.extend(std::iter::repeat("'".to_string()).take(trailing));
}
