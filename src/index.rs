// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The precomputed index: read-only lookups into terms and documents.
//!
//! The index is produced by an external builder and consumed here as-is. It
//! is loaded once, never mutated, and shared by every query, so concurrent
//! searches need no locking.
//!
//! # Loading
//!
//! The static-site builder writes the index as a script the browser can
//! include directly:
//!
//! ```text
//! searchIndex = {"words": {...}, "docs": {...}};
//! ```
//!
//! `from_script` accepts that form or bare JSON. `from_path` reads a file and
//! does the same.
//!
//! # Integrity
//!
//! Postings are supposed to reference documents that exist. The builder is a
//! separate program, so `validate()` checks instead of assuming. Loading never
//! fails on a dangling posting: it is logged, and the matcher skips it.

use crate::error::LoadError;
use crate::types::{DocId, DocumentRecord, Posting};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::Read;
use std::ops::Bound;
use std::path::Path;
use tracing::{debug, warn};

/// Term → postings and document id → record.
///
/// `words` is a `BTreeMap` so that terms sharing a prefix are contiguous and
/// iteration order is the same on every run. Ranking ties are broken by scan
/// order, so that matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    #[serde(default)]
    words: BTreeMap<String, Vec<Posting>>,
    #[serde(default)]
    docs: HashMap<DocId, DocumentRecord>,
}

impl SearchIndex {
    /// Build an index from already-parsed parts.
    pub fn from_parts(
        words: impl IntoIterator<Item = (String, Vec<Posting>)>,
        docs: impl IntoIterator<Item = (DocId, DocumentRecord)>,
    ) -> Self {
        SearchIndex {
            words: words.into_iter().collect(),
            docs: docs.into_iter().collect(),
        }
    }

    /// Parse an index from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        if json.trim().is_empty() {
            return Err(LoadError::EmptyInput);
        }
        let index: SearchIndex = serde_json::from_str(json)?;
        Ok(index.loaded())
    }

    /// Parse an index from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let index: SearchIndex = serde_json::from_reader(reader)?;
        Ok(index.loaded())
    }

    /// Parse either bare JSON or a `name = {...};` script assignment.
    pub fn from_script(source: &str) -> Result<Self, LoadError> {
        Self::from_json_str(strip_assignment(source))
    }

    /// Read and parse an index file (JSON or script form).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read search index");
        Self::from_script(&source)
    }

    /// Log the shape of a freshly loaded index and any integrity problems.
    fn loaded(self) -> Self {
        debug!(
            terms = self.words.len(),
            docs = self.docs.len(),
            "loaded search index"
        );
        for issue in &self.validate().issues {
            warn!(%issue, "search index integrity");
        }
        self
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Postings for an exact term, if the term is indexed.
    #[inline]
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.words.get(term).map(Vec::as_slice)
    }

    /// The stored term and its postings. The returned key borrows from the
    /// index, so it outlives the query string that looked it up.
    #[inline]
    pub fn entry(&self, term: &str) -> Option<(&str, &[Posting])> {
        self.words
            .get_key_value(term)
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Resolve a document id to its record.
    #[inline]
    pub fn document(&self, id: &DocId) -> Option<&DocumentRecord> {
        self.docs.get(id)
    }

    /// All indexed terms whose first character is `first`, in term order.
    ///
    /// Walks only the contiguous key range for that character.
    pub fn terms_starting_with(
        &self,
        first: char,
    ) -> impl Iterator<Item = (&str, &[Posting])> + '_ {
        let start = first.to_string();
        self.words
            .range::<str, _>((Bound::Included(start.as_str()), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(first))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// All indexed terms in order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[Posting])> + '_ {
        self.words
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    pub fn documents(&self) -> impl Iterator<Item = (&DocId, &DocumentRecord)> + '_ {
        self.docs.iter()
    }

    pub fn term_count(&self) -> usize {
        self.words.len()
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// True when there is nothing to search: no terms or no documents.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() || self.docs.is_empty()
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Check that every posting references a known document.
    pub fn validate(&self) -> IndexReport {
        let mut issues = Vec::new();
        for (term, postings) in &self.words {
            if postings.is_empty() {
                issues.push(IndexIssue::EmptyPostingList { term: term.clone() });
            }
            for posting in postings {
                if !self.docs.contains_key(posting.doc_id()) {
                    issues.push(IndexIssue::DanglingPosting {
                        term: term.clone(),
                        doc_id: posting.doc_id().clone(),
                    });
                }
            }
        }
        IndexReport {
            terms: self.words.len(),
            docs: self.docs.len(),
            postings: self.words.values().map(Vec::len).sum(),
            issues,
        }
    }
}

/// Strip a leading `name =` and trailing `;` from a script-wrapped index.
fn strip_assignment(source: &str) -> &str {
    let trimmed = source.trim();
    if trimmed.starts_with('{') {
        return trimmed;
    }
    let body = match trimmed.split_once('=') {
        Some((_, rest)) => rest,
        None => trimmed,
    };
    body.trim().trim_end_matches(';').trim_end()
}

// =============================================================================
// INTEGRITY REPORT
// =============================================================================

/// An integrity problem in an index. None of these stop a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexIssue {
    /// A posting references a document that isn't in `docs`.
    DanglingPosting { term: String, doc_id: DocId },
    /// A term with no postings at all.
    EmptyPostingList { term: String },
}

impl fmt::Display for IndexIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexIssue::DanglingPosting { term, doc_id } => {
                write!(f, "term '{}' references unknown document {}", term, doc_id)
            }
            IndexIssue::EmptyPostingList { term } => {
                write!(f, "term '{}' has no postings", term)
            }
        }
    }
}

/// Summary of `SearchIndex::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub terms: usize,
    pub docs: usize,
    pub postings: usize,
    pub issues: Vec<IndexIssue>,
}

impl IndexReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
