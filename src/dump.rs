//! Source text dumps written next to an interpreted file. These never feed
//! back into the interpreter; they only describe the raw source.

use crate::statement::RESERVED_WORDS;

// Longest symbols first so ":=" is reported before ":" and "=".
const SYMBOLS: [&str; 14] = [
    ":=", "==", "!=", "<<", ":", ";", "=", "+", "-", "(", ")", ">", "<", "\"",
];

/// The source with every whitespace character removed (the NOSPACES dump).
pub fn strip_whitespace(src: &str) -> String {
    src.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Reserved words and symbols occurring in the source, in a fixed order:
/// reserved words first, then symbols longest-first (the RES_SYM dump).
pub fn reserved_and_symbols(src: &str) -> Vec<String> {
    let mut found = vec![];
    for word in RESERVED_WORDS {
        if contains_word(src, word) {
            found.push(word.to_string());
        }
    }
    for sym in SYMBOLS {
        if src.contains(sym) {
            found.push(sym.to_string());
        }
    }
    found
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// Case-insensitive whole-word search.
fn contains_word(src: &str, word: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    lower.match_indices(word).any(|(i, m)| {
        let before = lower[..i].chars().next_back();
        let after = lower[i + m.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}
