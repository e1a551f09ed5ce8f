//! Text containment — what "field contains text" means at evaluation time.
//!
//! The default is a case-insensitive substring test with Unicode lower-casing
//! on both sides. Whole-word mode compiles the escaped term into a regex with
//! word boundaries once, when the predicate is compiled; patterns larger than
//! [`WORD_PATTERN_SIZE_LIMIT`] are refused.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// How a term is located inside a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The term may appear anywhere, including inside a word.
    #[default]
    Substring,
    /// The term must start and end on word boundaries.
    WholeWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    pub mode: MatchMode,
}

/// A search term prepared for repeated matching.
#[derive(Debug, Clone)]
pub enum TextMatcher {
    /// Empty term: matches any present field.
    Always,
    Exact(String),
    /// Holds the lower-cased term.
    Folded(String),
    Word(Regex),
}

impl TextMatcher {
    pub fn new(term: &str, options: &MatchOptions) -> Result<Self, regex::Error> {
        if term.is_empty() {
            return Ok(TextMatcher::Always);
        }
        match (options.mode, options.case_sensitive) {
            (MatchMode::Substring, true) => Ok(TextMatcher::Exact(term.to_string())),
            (MatchMode::Substring, false) => Ok(TextMatcher::Folded(term.to_lowercase())),
            (MatchMode::WholeWord, case_sensitive) => Ok(TextMatcher::Word(word_regex(
                term,
                case_sensitive,
                WORD_PATTERN_SIZE_LIMIT,
            )?)),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            TextMatcher::Always => true,
            TextMatcher::Exact(term) => haystack.contains(term.as_str()),
            TextMatcher::Folded(term) => haystack.to_lowercase().contains(term.as_str()),
            TextMatcher::Word(regex) => regex.is_match(haystack),
        }
    }
}

/// Compiled size cap for a whole-word pattern.
pub const WORD_PATTERN_SIZE_LIMIT: usize = 1 << 20;

fn word_regex(term: &str, case_sensitive: bool, size_limit: usize) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&whole_word_pattern(term))
        .case_insensitive(!case_sensitive)
        .size_limit(size_limit)
        .build()
}

/// `\b` only holds next to a word character. A term that starts or ends with
/// punctuation is instead delimited by a non-word character or the edge of
/// the haystack on that side.
fn whole_word_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let left = if term.starts_with(is_word) { r"\b" } else { r"(?:^|\W)" };
    let right = if term.ends_with(is_word) { r"\b" } else { r"(?:\W|$)" };
    format!("{left}{}{right}", regex::escape(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INSENSITIVE: MatchOptions = MatchOptions {
        case_sensitive: false,
        mode: MatchMode::Substring,
    };
    const SENSITIVE: MatchOptions = MatchOptions {
        case_sensitive: true,
        mode: MatchMode::Substring,
    };
    const WORD: MatchOptions = MatchOptions {
        case_sensitive: false,
        mode: MatchMode::WholeWord,
    };

    #[rstest]
    #[case(INSENSITIVE, "cats", "Cats and Dogs", true)]
    #[case(INSENSITIVE, "CATS", "bobcats", true)]
    #[case(INSENSITIVE, "straße", "STRASSE STRAßE", true)]
    #[case(INSENSITIVE, "fish", "Cats and Dogs", false)]
    #[case(SENSITIVE, "cats", "Cats and Dogs", false)]
    #[case(SENSITIVE, "Cats", "Cats and Dogs", true)]
    #[case(WORD, "cat", "bobcats", false)]
    #[case(WORD, "cat", "a CAT sat", true)]
    #[case(WORD, "and dogs", "Cats and Dogs", true)]
    #[case(WORD, "c++", "I love c++ code", true)]
    #[case(WORD, "c++", "c++", true)]
    #[case(WORD, "c++", "abc++ lib", false)]
    #[case(WORD, "#rust", "tips #rust daily", true)]
    #[case(WORD, "#rust", "#rust", true)]
    #[case(WORD, "#rust", "tips#rust", false)]
    #[case(WORD, "#rust", "#rusty", false)]
    #[case(WORD, "rust!", "Rust! every day", true)]
    fn contains_semantics(
        #[case] options: MatchOptions,
        #[case] term: &str,
        #[case] haystack: &str,
        #[case] expected: bool,
    ) {
        let matcher = TextMatcher::new(term, &options).unwrap();
        assert_eq!(matcher.is_match(haystack), expected, "{term:?} in {haystack:?}");
    }

    #[test]
    fn empty_term_matches_everything() {
        for options in [INSENSITIVE, SENSITIVE, WORD] {
            let matcher = TextMatcher::new("", &options).unwrap();
            assert!(matcher.is_match(""));
            assert!(matcher.is_match("anything"));
        }
    }

    #[test]
    fn punctuation_edges_use_non_word_delimiters() {
        assert_eq!(whole_word_pattern("cat"), r"\bcat\b");
        assert_eq!(whole_word_pattern("c++"), r"\bc\+\+(?:\W|$)");
        assert_eq!(
            whole_word_pattern("#rust"),
            format!(r"(?:^|\W){}\b", regex::escape("#rust"))
        );
    }

    #[test]
    fn oversized_word_pattern_is_an_error() {
        assert!(word_regex("cats", false, 16).is_err());
        assert!(word_regex("cats", false, WORD_PATTERN_SIZE_LIMIT).is_ok());

        let huge = "word ".repeat(50_000);
        assert!(TextMatcher::new(&huge, &WORD).is_err());
        assert!(TextMatcher::new(&huge, &INSENSITIVE).is_ok());
    }
}
