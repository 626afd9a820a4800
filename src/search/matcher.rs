// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Miss-tolerant matching over term slots.
//!
//! A query contributes one *term slot* per exact term plus one for the prefix
//! candidate. A document is a candidate when it matches every slot, or every
//! slot but one:
//!
//! ```text
//! slots matched ≥ total slots − 1
//! ```
//!
//! The slack absorbs a typo, an unindexed word, or an over-eager final
//! keystroke without returning the whole corpus.
//!
//! Exact terms missing from the index have no slot here but still count
//! towards the total. That is what makes them the "one miss".
//!
//! # Scan order
//!
//! Slots are scanned in query order (exact terms first, then the prefix slot
//! with its terms in index order). The order in which documents are first
//! seen is recorded, and the ranker uses it to break weight ties. Same index
//! and same query give the same order on every run.

use crate::index::SearchIndex;
use crate::query::ParsedQuery;
use crate::search::prefix::expand_prefix;
use crate::types::{DocId, Posting};
use std::collections::HashMap;

/// What a term slot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind<'a> {
    /// A stemmed exact query term found in the index.
    Exact(&'a str),
    /// The prefix candidate and every indexed term it expanded to.
    Prefix { terms: Vec<&'a str> },
}

/// One matchable part of a query with the postings it carries.
#[derive(Debug, Clone)]
pub struct TermSlot<'a> {
    pub kind: SlotKind<'a>,
    /// One list for an exact term; one per expanded term for a prefix slot.
    pub postings: Vec<&'a [Posting]>,
}

/// A document that passed the miss-tolerance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub doc_id: &'a DocId,
    /// Distinct slots referencing this document.
    pub slots_matched: usize,
    /// Sum of posting weights across all matched slots.
    pub weight: u64,
    /// Position in scan order at which the document was first seen.
    pub first_seen: usize,
}

/// The merged term → postings view of a query against an index.
#[derive(Debug, Clone)]
pub struct MatchSet<'a> {
    pub slots: Vec<TermSlot<'a>>,
    /// Exact terms submitted (duplicates included) plus one if there was a
    /// prefix candidate. Independent of what the index contains.
    pub total_term_slots: usize,
}

impl<'a> MatchSet<'a> {
    /// Look up every exact term and expand the prefix candidate.
    ///
    /// A term repeated in the query gets one slot in the match set but still
    /// counts twice towards `total_term_slots`.
    pub fn build(index: &'a SearchIndex, query: &ParsedQuery) -> Self {
        let mut slots: Vec<TermSlot<'a>> = Vec::new();

        for term in &query.exact_terms {
            let already = slots
                .iter()
                .any(|s| matches!(s.kind, SlotKind::Exact(t) if t == term));
            if already {
                continue;
            }
            if let Some((key, postings)) = index.entry(term) {
                slots.push(TermSlot {
                    kind: SlotKind::Exact(key),
                    postings: vec![postings],
                });
            }
        }

        if let Some(candidate) = &query.prefix {
            let expanded = expand_prefix(index, candidate);
            if !expanded.is_empty() {
                let (terms, postings) = expanded.into_iter().unzip();
                slots.push(TermSlot {
                    kind: SlotKind::Prefix { terms },
                    postings,
                });
            }
        }

        MatchSet {
            slots,
            total_term_slots: query.total_term_slots(),
        }
    }

    /// Minimum number of slots a document has to match.
    #[inline]
    pub fn required_slots(&self) -> usize {
        self.total_term_slots.saturating_sub(1)
    }

    /// Documents matching enough slots, in first-seen order.
    ///
    /// Postings that reference a document missing from the index are skipped
    /// and contribute nothing. With zero term slots nothing qualifies.
    pub fn candidates(&self, index: &SearchIndex) -> Vec<Candidate<'a>> {
        if self.total_term_slots == 0 {
            return Vec::new();
        }

        let mut tally = Tally::default();
        for (slot_idx, slot) in self.slots.iter().enumerate() {
            for &list in &slot.postings {
                for posting in list {
                    if index.document(posting.doc_id()).is_some() {
                        tally.add(posting, slot_idx);
                    }
                }
            }
        }

        let required = self.required_slots();
        let mut candidates = tally.order;
        candidates.retain(|c| c.slots_matched >= required);
        candidates
    }
}

/// Per-document accumulation in first-seen order.
#[derive(Default)]
struct Tally<'a> {
    order: Vec<Candidate<'a>>,
    position: HashMap<&'a DocId, usize>,
    /// Last slot that touched each entry of `order`, so a document posted by
    /// several terms of one prefix slot counts that slot once.
    last_slot: Vec<usize>,
}

impl<'a> Tally<'a> {
    fn add(&mut self, posting: &'a Posting, slot_idx: usize) {
        let doc_id = posting.doc_id();
        let pos = match self.position.get(doc_id) {
            Some(&pos) => pos,
            None => {
                let pos = self.order.len();
                self.order.push(Candidate {
                    doc_id,
                    slots_matched: 0,
                    weight: 0,
                    first_seen: pos,
                });
                self.last_slot.push(usize::MAX);
                self.position.insert(doc_id, pos);
                pos
            }
        };

        let candidate = &mut self.order[pos];
        candidate.weight += posting.weight();
        if self.last_slot[pos] != slot_idx {
            self.last_slot[pos] = slot_idx;
            candidate.slots_matched += 1;
        }
    }
}
