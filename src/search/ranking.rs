// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! The score is plain term-frequency aggregation: a candidate's weight is the
//! sum of its posting weights over every slot it matched. Higher weight wins.
//!
//! Ties keep the order in which the matcher first saw each document. That
//! order comes from the query and the (sorted) index, never from a hash seed,
//! so two runs over the same input produce identical output.

use crate::search::matcher::Candidate;
use crate::types::DocId;
use std::cmp::Ordering;

/// A candidate after ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResult<'a> {
    pub doc_id: &'a DocId,
    pub weight: u64,
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Weight** - descending, heavier documents first
/// 2. **First seen** - ascending, earlier in scan order first
///
/// The second key makes the order total, so the result does not depend on
/// sort stability.
pub fn compare_ranked(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.weight
        .cmp(&a.weight)
        .then_with(|| a.first_seen.cmp(&b.first_seen))
}

/// Sort candidates into their final order.
pub fn rank(mut candidates: Vec<Candidate<'_>>) -> Vec<RankedResult<'_>> {
    candidates.sort_by(compare_ranked);
    candidates
        .into_iter()
        .map(|c| RankedResult {
            doc_id: c.doc_id,
            weight: c.weight,
        })
        .collect()
}
