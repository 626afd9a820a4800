// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! These types mirror the JSON shape an external index builder emits:
//!
//! ```text
//! {
//!   "words": { "cat": [[1, 2]], "sat": [[1, 1], 2] },
//!   "docs":  { "1": { "t": "A", "u": "/a", "d": "2020-01-01" }, ... }
//! }
//! ```
//!
//! # Invariants
//!
//! - **Posting**: the referenced `DocId` should exist in `docs`. The builder
//!   is a separate program, so this is checked (see `SearchIndex::validate`)
//!   rather than trusted. Dangling postings are skipped at query time.
//! - **DocId**: `1` and `"1"` are the same document. Integer ids are stored in
//!   their decimal string form so posting ids and `docs` keys compare equal.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Document ids show up as JSON object keys in `docs` (always strings) and as
/// bare integers or strings inside postings. Both forms deserialize into the
/// same canonical string so lookups don't care which one the builder used.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Create a DocId from any string-like value.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    /// Borrow the canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id.to_string())
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id.to_string())
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocIdVisitor;

        impl Visitor<'_> for DocIdVisitor {
            type Value = DocId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or string document id")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<DocId, E> {
                Ok(DocId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<DocId, E> {
                u64::try_from(v)
                    .map(DocId::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DocId, E> {
                Ok(DocId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<DocId, E> {
                Ok(DocId(v))
            }
        }

        deserializer.deserialize_any(DocIdVisitor)
    }
}

// =============================================================================
// POSTINGS
// =============================================================================

/// One entry in a term's hit list.
///
/// The builder emits either a bare document id (the term occurs, weight 1) or
/// a `[docId, weight]` pair where weight is the term frequency. The matcher
/// treats both uniformly through `doc_id()` and `weight()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Posting {
    Weighted(DocId, u32),
    Bare(DocId),
}

impl Posting {
    /// Create a weighted posting.
    pub fn weighted(doc_id: impl Into<DocId>, weight: u32) -> Self {
        Posting::Weighted(doc_id.into(), weight)
    }

    /// Create a bare posting (implicit weight 1).
    pub fn bare(doc_id: impl Into<DocId>) -> Self {
        Posting::Bare(doc_id.into())
    }

    #[inline]
    pub fn doc_id(&self) -> &DocId {
        match self {
            Posting::Weighted(id, _) | Posting::Bare(id) => id,
        }
    }

    /// Term-frequency weight. Bare postings count as a single occurrence.
    #[inline]
    pub fn weight(&self) -> u64 {
        match self {
            Posting::Weighted(_, w) => u64::from(*w),
            Posting::Bare(_) => 1,
        }
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// Raw document metadata as stored in the index.
///
/// Field names on the wire are single letters (`t`, `u`, `d`) to keep the
/// index small; they get their full names here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(rename = "t")]
    pub title: String,
    #[serde(rename = "u")]
    pub url: String,
    #[serde(rename = "d", default)]
    pub date: String,
}

impl DocumentRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>, date: impl Into<String>) -> Self {
        DocumentRecord {
            title: title.into(),
            url: url.into(),
            date: date.into(),
        }
    }
}

/// What callers get back: a document after its fields went through the
/// configured formatters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub title: String,
    pub url: String,
    pub date: String,
}

impl DisplayResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>, date: impl Into<String>) -> Self {
        DisplayResult {
            title: title.into(),
            url: url.into(),
            date: date.into(),
        }
    }
}

/// Document fields that formatters apply to.
///
/// Used for error reporting and template placeholder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Url,
    Date,
}

impl Field {
    /// Lowercase name, matching the serde representation and the template
    /// placeholder (`{title}`, `{url}`, `{date}`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Url => "url",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
