// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: construction and the query pipeline.
//!
//! ```text
//! query ─► parse_query ─► MatchSet::build ─► candidates ─► rank ─► exclude ─► format
//!          (normalize,     (exact lookups,    (miss          (weight   (url or     (title,
//!           stop words,     prefix             tolerance)     desc)     predicate)  url, date)
//!           stem)           expansion)
//! ```
//!
//! Everything that can be wrong with the configuration is checked in
//! [`StaticSearch::new`]. After that, the only way `search()` fails is an
//! external stemmer or formatter returning an error.
//!
//! The engine is `Send + Sync` and cheap to clone (the state sits behind an
//! `Arc`), so one instance can serve any number of threads.

use crate::error::{ConfigError, SearchError};
use crate::exclude::Excluder;
use crate::format::Formatter;
use crate::index::SearchIndex;
use crate::options::SearchOptions;
use crate::query::{parse_query, ParsedQuery};
use crate::search::{rank, MatchSet};
use crate::stemmer::{IdentityStemmer, Stemmer};
use crate::types::{DisplayResult, DocId, DocumentRecord};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A ranked result that survived exclusion, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'a> {
    pub doc_id: &'a DocId,
    pub weight: u64,
    pub record: &'a DocumentRecord,
}

struct StaticSearchInner {
    index: SearchIndex,
    formatter: Formatter,
    excluder: Excluder,
    stemmer: Box<dyn Stemmer>,
    max_query_tokens: usize,
}

/// Query engine over one immutable index.
#[derive(Clone)]
pub struct StaticSearch {
    inner: Arc<StaticSearchInner>,
}

impl StaticSearch {
    /// Build an engine that does no stemming.
    pub fn new(index: SearchIndex, options: SearchOptions) -> Result<Self, ConfigError> {
        Self::with_stemmer(index, options, IdentityStemmer)
    }

    /// Build an engine with the stemmer the index was built with.
    ///
    /// Fails if the index has no terms or no documents, or if any option is
    /// invalid. Templates are compiled here.
    pub fn with_stemmer(
        index: SearchIndex,
        options: SearchOptions,
        stemmer: impl Stemmer + 'static,
    ) -> Result<Self, ConfigError> {
        if index.is_empty() {
            return Err(ConfigError::EmptyIndex {
                terms: index.term_count(),
                docs: index.doc_count(),
            });
        }
        if options.max_query_tokens == 0 {
            return Err(ConfigError::ZeroQueryTokens);
        }

        let formatter = Formatter::from_options(&options)?;
        let excluder = Excluder::new(&options.exclude);

        debug!(
            terms = index.term_count(),
            docs = index.doc_count(),
            max_query_tokens = options.max_query_tokens,
            excluding = !excluder.is_noop(),
            "search engine ready"
        );

        Ok(StaticSearch {
            inner: Arc::new(StaticSearchInner {
                index,
                formatter,
                excluder,
                stemmer: Box::new(stemmer),
                max_query_tokens: options.max_query_tokens,
            }),
        })
    }

    #[inline]
    pub fn index(&self) -> &SearchIndex {
        &self.inner.index
    }

    /// Decompose a query the way `search()` does.
    pub fn parse(&self, query: &str) -> Result<ParsedQuery, SearchError> {
        parse_query(query, self.inner.stemmer.as_ref(), self.inner.max_query_tokens)
    }

    /// Ranked, exclusion-filtered hits with their raw records.
    pub fn rank(&self, query: &str) -> Result<Vec<Hit<'_>>, SearchError> {
        let parsed = self.parse(query)?;
        if parsed.is_empty() {
            return Ok(Vec::new());
        }

        let index = &self.inner.index;
        let matches = MatchSet::build(index, &parsed);
        let ranked = rank(matches.candidates(index));

        Ok(ranked
            .into_iter()
            .filter_map(|r| {
                let record = index.document(r.doc_id)?;
                Some(Hit {
                    doc_id: r.doc_id,
                    weight: r.weight,
                    record,
                })
            })
            .filter(|hit| !self.inner.excluder.is_excluded(hit.record))
            .collect())
    }

    /// Run a query and return display-ready results, best first.
    ///
    /// An empty query, or one that matches nothing, gives an empty list.
    pub fn search(&self, query: &str) -> Result<Vec<DisplayResult>, SearchError> {
        self.rank(query)?
            .into_iter()
            .map(|hit| self.inner.formatter.format(hit.record))
            .collect()
    }
}

impl fmt::Debug for StaticSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSearch")
            .field("terms", &self.inner.index.term_count())
            .field("docs", &self.inner.index.doc_count())
            .field("max_query_tokens", &self.inner.max_query_tokens)
            .finish_non_exhaustive()
    }
}
