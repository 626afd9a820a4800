//! English stop words.
//!
//! Function words that carry no signal for matching. The set is closed and
//! fixed; it is built once on first use and never written again.
//!
//! Contractions ("don't", "isn't", ...) are kept for parity with the index
//! builder's list even though the tokenizer splits on apostrophes, so they
//! never match a query token on their own.

use std::collections::HashSet;
use std::sync::LazyLock;

#[rustfmt::skip]
const STOP_WORD_LIST: &[&str] = &[
    "all", "am", "an", "and", "any", "are", "aren't", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "for", "from",
    "further", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "her", "here", "here's",
    "hers", "herself", "him", "himself", "his", "how", "how's", "i'd",
    "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's",
    "its", "itself", "let's", "me", "more", "most", "mustn't", "my",
    "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "so", "some", "such", "than", "that", "that's", "the",
    "their", "theirs", "them", "themselves", "then", "there", "there's",
    "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't",
    "what", "what's", "when", "when's", "where", "where's", "which",
    "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've",
    "your", "yours", "yourself", "yourselves",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check if a token is a stop word. Expects lowercase input.
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Drop stop words, preserving the order of what remains.
pub fn remove_stop_words<I, S>(tokens: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter(|t| !is_stop_word(t.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_function_words_in_order() {
        assert_eq!(remove_stop_words(["the", "cat", "sat"]), vec!["cat", "sat"]);
        assert_eq!(
            remove_stop_words(["what", "is", "rust", "and", "why"]),
            vec!["rust"]
        );
    }

    #[test]
    fn content_words_pass_through() {
        assert!(!is_stop_word("database"));
        assert!(!is_stop_word("a")); // not in the list
        assert!(is_stop_word("ours"));
    }

    #[test]
    fn list_has_no_duplicates() {
        assert_eq!(STOP_WORDS.len(), STOP_WORD_LIST.len());
    }
}
