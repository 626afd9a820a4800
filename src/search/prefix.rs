// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix expansion for the trailing query token.
//!
//! "datab" should find posts about databases before the user finishes typing.
//! The candidate is matched against every indexed term sharing its first
//! character; a term qualifies if it starts with the raw token or with the
//! stemmed token. Stemming can shorten a word past the point where the raw
//! form would still match ("running" → "run" finds "runs"), hence both checks.
//!
//! However many terms qualify, they form a single term slot for miss
//! tolerance. See `matcher`.

use crate::index::SearchIndex;
use crate::query::PrefixCandidate;
use crate::types::Posting;

/// Indexed terms (and their postings) matching a prefix candidate, in term
/// order.
///
/// Only terms whose first character equals the candidate's first character are
/// considered, so a stemmer that rewrites the first letter cannot pull in
/// unrelated terms.
pub fn expand_prefix<'a>(
    index: &'a SearchIndex,
    candidate: &PrefixCandidate,
) -> Vec<(&'a str, &'a [Posting])> {
    let Some(first) = candidate.first_char() else {
        return Vec::new();
    };

    index
        .terms_starting_with(first)
        .filter(|(term, _)| {
            term.starts_with(candidate.raw.as_str()) || term.starts_with(candidate.stemmed.as_str())
        })
        .collect()
}
