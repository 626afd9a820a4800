// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result exclusion.
//!
//! Sites usually index every page, including ones nobody should land on from a
//! search box (the search page itself, an about page). Exclusion removes those
//! after ranking, so the remaining results keep their relative order.

use crate::options::{ExcludePredicate, Exclusion};
use crate::types::DocumentRecord;
use std::collections::HashSet;

/// Decides whether a resolved document is dropped from results.
#[derive(Clone, Default)]
pub enum Excluder {
    #[default]
    Nothing,
    Urls(HashSet<String>),
    Predicate(ExcludePredicate),
}

impl Excluder {
    pub fn new(exclusion: &Exclusion) -> Self {
        match exclusion {
            Exclusion::None => Excluder::Nothing,
            Exclusion::Urls(urls) if urls.is_empty() => Excluder::Nothing,
            Exclusion::Urls(urls) => Excluder::Urls(urls.clone()),
            Exclusion::Predicate(f) => Excluder::Predicate(f.clone()),
        }
    }

    /// Matching is on the raw url from the index, before any formatting.
    #[inline]
    pub fn is_excluded(&self, record: &DocumentRecord) -> bool {
        match self {
            Excluder::Nothing => false,
            Excluder::Urls(urls) => urls.contains(&record.url),
            Excluder::Predicate(f) => f(record),
        }
    }

    /// True when nothing is ever excluded.
    pub fn is_noop(&self) -> bool {
        matches!(self, Excluder::Nothing)
    }
}
