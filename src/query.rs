// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query decomposition.
//!
//! People type into a search box one character at a time, so the last word of
//! a query is usually unfinished. It is held back as a prefix candidate and
//! matched against term prefixes; every other word is a finished exact term.
//!
//! ```text
//! "the rust datab"
//!   normalize   → ["the", "rust", "datab"]
//!   split last  → exact: ["the", "rust"]   prefix: "datab"
//!   stop words  → exact: ["rust"]
//!   stem        → exact: [stem("rust")]    prefix: ("datab", stem("datab"))
//! ```
//!
//! The prefix candidate skips stop-word filtering: "the" typed on its own may
//! well be the start of "theory".

use crate::error::SearchError;
use crate::normalize::tokenize;
use crate::stemmer::Stemmer;
use crate::stop_words::is_stop_word;

/// The trailing, possibly incomplete query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixCandidate {
    /// Normalized but unstemmed.
    pub raw: String,
    pub stemmed: String,
}

impl PrefixCandidate {
    /// First character of the raw token. Used as a cheap pre-filter before
    /// the `starts_with` checks.
    #[inline]
    pub fn first_char(&self) -> Option<char> {
        self.raw.chars().next()
    }
}

/// A query split into its matchable parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Stemmed, stop-word-free terms in query order. Duplicates are kept:
    /// each one is a term slot the document is expected to match.
    pub exact_terms: Vec<String>,
    pub prefix: Option<PrefixCandidate>,
}

impl ParsedQuery {
    /// Number of term slots a document could match: one per exact term plus
    /// one for the prefix candidate, however many index terms it expands to.
    #[inline]
    pub fn total_term_slots(&self) -> usize {
        self.exact_terms.len() + usize::from(self.prefix.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.total_term_slots() == 0
    }
}

/// Decompose a raw query.
///
/// At most `max_tokens` normalized tokens are considered; anything after that
/// is dropped before the last token is held back. An empty query (or one with
/// no word characters) parses to an empty `ParsedQuery`.
pub fn parse_query(
    query: &str,
    stemmer: &dyn Stemmer,
    max_tokens: usize,
) -> Result<ParsedQuery, SearchError> {
    let mut tokens = tokenize(query);
    tokens.truncate(max_tokens);

    let Some(last) = tokens.pop() else {
        return Ok(ParsedQuery::default());
    };

    let exact_terms = tokens
        .iter()
        .filter(|t| !is_stop_word(t))
        .map(|t| stem(stemmer, t))
        .collect::<Result<Vec<_>, _>>()?;

    let stemmed = stem(stemmer, &last)?;

    Ok(ParsedQuery {
        exact_terms,
        prefix: Some(PrefixCandidate { raw: last, stemmed }),
    })
}

fn stem(stemmer: &dyn Stemmer, token: &str) -> Result<String, SearchError> {
    stemmer.stem(token).map_err(|source| SearchError::Stem {
        token: token.to_string(),
        source,
    })
}
