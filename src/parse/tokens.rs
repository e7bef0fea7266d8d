//! Story tokenizer
//!
//! Splits story text into syllable-like chunks with a greedy two-character
//! lookahead: a known digraph is consumed as one token, anything else is
//! consumed one character at a time.

use serde::{Deserialize, Serialize};

/// Letter pairs that are kept together as a single token (matched case-insensitively)
pub const DIGRAPHS: [&str; 7] = ["th", "ng", "oo", "ou", "ea", "ch", "mm"];

/// A chunk of the story text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Check whether a two-character slice is one of the [`DIGRAPHS`]
pub fn is_digraph(pair: &str) -> bool {
    DIGRAPHS.iter().any(|digraph| digraph.eq_ignore_ascii_case(pair))
}

/// Split `text` into tokens.
///
/// Concatenating the returned tokens reproduces `text` exactly. Scanning is
/// strictly left to right with no backtracking, so `"ooo"` yields
/// `["oo", "o"]`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let first_len = first.len_utf8();
        let pair_len = rest[first_len..]
            .chars()
            .next()
            .map_or(first_len, |second| first_len + second.len_utf8());

        let take = if pair_len > first_len && is_digraph(&rest[..pair_len]) {
            pair_len
        } else {
            first_len
        };

        tokens.push(Token::new(&rest[..take]));
        rest = &rest[take..];
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_capitalized_digraph_matches() {
        assert_eq!(texts(&tokenize("Then")), vec!["Th", "e", "n"]);
    }

    #[test]
    fn test_single_digraph() {
        assert_eq!(texts(&tokenize("oo")), vec!["oo"]);
    }

    #[test]
    fn test_single_character() {
        assert_eq!(texts(&tokenize("a")), vec!["a"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_no_digraphs() {
        assert_eq!(
            texts(&tokenize("It was.")),
            vec!["I", "t", " ", "w", "a", "s", "."]
        );
    }

    #[test]
    fn test_greedy_without_backtracking() {
        assert_eq!(texts(&tokenize("ooo")), vec!["oo", "o"]);
        // "ea" wins over "th" because scanning never looks back
        assert_eq!(texts(&tokenize("eath")), vec!["ea", "th"]);
        assert_eq!(texts(&tokenize("yummy")), vec!["y", "u", "mm", "y"]);
    }

    #[test]
    fn test_all_digraphs_recognized() {
        for digraph in DIGRAPHS {
            assert!(is_digraph(digraph));
            assert!(is_digraph(&digraph.to_uppercase()));
        }
        assert!(!is_digraph("t"));
        assert!(!is_digraph("ht"));
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let inputs = [
            "There once was a big dragon. This dragon liked ice-cream. It was very yummy.",
            "THOUGH ENOUGH",
            "naïve café — touché",
            "x",
            "  ",
        ];
        for input in inputs {
            let joined: String = tokenize(input).iter().map(Token::as_str).collect();
            assert_eq!(joined, input);
        }
    }

    #[test]
    fn test_multibyte_before_digraph() {
        assert_eq!(texts(&tokenize("éthe")), vec!["é", "th", "e"]);
    }

    #[test]
    fn test_story_opening() {
        let tokens = tokenize("There once");
        assert_eq!(
            texts(&tokens),
            vec!["Th", "e", "r", "e", " ", "o", "n", "c", "e"]
        );
    }
}
