//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::SearchIndex;
use crate::types::{DocId, DocumentRecord, Posting};
use std::collections::BTreeSet;

/// Create a document record with predictable fields: title "Doc {id}",
/// url "/doc/{id}", date "2020-01-{id:02}".
pub fn make_record(id: u32) -> DocumentRecord {
    DocumentRecord::new(
        format!("Doc {}", id),
        format!("/doc/{}", id),
        format!("2020-01-{:02}", id % 28 + 1),
    )
}

/// Build an index from bare postings (weight 1). Every referenced document
/// gets a `make_record` entry.
pub fn index_from_terms(terms: &[(&str, &[u32])]) -> SearchIndex {
    build(
        terms
            .iter()
            .map(|(term, ids)| {
                let postings = ids.iter().map(|id| Posting::bare(*id)).collect();
                (term.to_string(), postings)
            })
            .collect(),
    )
}

/// Build an index from weighted `(doc, weight)` postings. Every referenced
/// document gets a `make_record` entry.
pub fn index_from_weighted(terms: &[(&str, &[(u32, u32)])]) -> SearchIndex {
    build(
        terms
            .iter()
            .map(|(term, postings)| {
                let postings = postings
                    .iter()
                    .map(|(id, weight)| Posting::weighted(*id, *weight))
                    .collect();
                (term.to_string(), postings)
            })
            .collect(),
    )
}

fn build(words: Vec<(String, Vec<Posting>)>) -> SearchIndex {
    let ids: BTreeSet<DocId> = words
        .iter()
        .flat_map(|(_, postings)| postings.iter().map(|p| p.doc_id().clone()))
        .collect();
    let docs: Vec<(DocId, DocumentRecord)> = ids
        .into_iter()
        .map(|id| {
            let record = id
                .as_str()
                .parse::<u32>()
                .map(make_record)
                .unwrap_or_else(|_| DocumentRecord::new(id.as_str(), format!("/{}", id), ""));
            (id, record)
        })
        .collect();
    SearchIndex::from_parts(words, docs)
}

/// The two-document index used throughout the docs:
/// `cat → [[1,2]]`, `sat → [[1,1],[2,1]]`.
pub fn cat_sat_index() -> SearchIndex {
    SearchIndex::from_parts(
        [
            ("cat".to_string(), vec![Posting::weighted(1u32, 2)]),
            (
                "sat".to_string(),
                vec![Posting::weighted(1u32, 1), Posting::weighted(2u32, 1)],
            ),
        ],
        [
            (DocId::from(1u32), DocumentRecord::new("A", "/a", "2020-01-01")),
            (DocId::from(2u32), DocumentRecord::new("B", "/b", "2020-01-02")),
        ],
    )
}
