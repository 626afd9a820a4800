// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time search over a precomputed static inverted index.
//!
//! A static site builder writes an inverted index (term → postings, id →
//! document) at build time. This crate answers queries against it: no index
//! construction, no mutation, no I/O on the query path.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────────────────────┐
//! │ normalize.rs │────▶│   query.rs   │────▶│          search/            │
//! │ (accents,    │     │ (stop words, │     │ prefix → matcher → ranking  │
//! │  tokens)     │     │  stem, last  │     │ (expand, miss tolerance,    │
//! └──────────────┘     │  token held) │     │  weight desc)               │
//!                      └──────────────┘     └─────────────────────────────┘
//!                                                         │
//!        ┌──────────────┐     ┌──────────────┐            ▼
//!        │  format.rs   │◀────│  exclude.rs  │◀───── engine.rs
//!        │ (title, url, │     │ (url set or  │    (StaticSearch)
//!        │  date)       │     │  predicate)  │
//!        └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use staticsearch::{SearchIndex, SearchOptions, StaticSearch};
//!
//! let index = SearchIndex::from_script(r#"searchIndex = {
//!     "words": {"cat": [[1, 2]], "sat": [[1, 1], [2, 1]]},
//!     "docs": {
//!         "1": {"t": "A", "u": "/a", "d": "2020-01-01"},
//!         "2": {"t": "B", "u": "/b", "d": "2020-01-02"}
//!     }
//! };"#).unwrap();
//!
//! let search = StaticSearch::new(index, SearchOptions::default()).unwrap();
//! let results = search.search("cat sat").unwrap();
//! assert_eq!(results[0].url, "/a");
//! assert_eq!(results[1].url, "/b");
//! ```

pub mod engine;
pub mod error;
pub mod exclude;
pub mod format;
pub mod index;
pub mod normalize;
pub mod options;
pub mod query;
pub mod search;
pub mod stemmer;
pub mod stop_words;
pub mod testing;
pub mod types;

// Re-exports for public API
pub use engine::{Hit, StaticSearch};
pub use error::{BoxError, ConfigError, LoadError, SearchError};
pub use index::{IndexIssue, IndexReport, SearchIndex};
pub use normalize::{remove_accents, tokenize};
pub use options::{
    Exclusion, FieldFormat, FormatSpec, SearchOptions, SearchOptionsConfig,
    DEFAULT_MAX_QUERY_TOKENS,
};
pub use query::{parse_query, ParsedQuery, PrefixCandidate};
pub use stemmer::{IdentityStemmer, Stemmer};
pub use stop_words::{is_stop_word, remove_stop_words};
pub use types::{DisplayResult, DocId, DocumentRecord, Field, Posting};
