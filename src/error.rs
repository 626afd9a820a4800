// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three families, split by when they can happen:
//!
//! | Type          | When                | Fatal?                              |
//! |---------------|---------------------|-------------------------------------|
//! | `LoadError`   | reading the index   | yes, there is nothing to search     |
//! | `ConfigError` | engine construction | yes, bad options never reach search |
//! | `SearchError` | inside `search()`   | per query, from external callbacks  |
//!
//! A query that matches nothing is not an error; it returns an empty list.

use crate::types::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Error type returned by pluggable callbacks (stemmers, formatters).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid engine configuration, detected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The index has no terms or no documents.
    #[error("please provide a search index: index has {terms} terms and {docs} documents")]
    EmptyIndex { terms: usize, docs: usize },

    /// A formatter option that is neither absent, a template string, nor a callback.
    #[error("unknown {field} formatter option: expected a template string or a callback, got {found}")]
    UnknownFormatter { field: Field, found: String },

    /// A template string that cannot be compiled.
    #[error("invalid {field} template: {reason}")]
    InvalidTemplate { field: Field, reason: String },

    /// An exclusion option that is neither absent nor a list of urls.
    #[error("invalid exclude option: expected a list of urls, got {found}")]
    InvalidExclude { found: String },

    /// `max_query_tokens` must allow at least one token.
    #[error("max query tokens must be at least 1")]
    ZeroQueryTokens,
}

/// Failure of an external collaborator while answering a query.
///
/// The engine never masks these: a stemmer or formatter that fails makes the
/// whole query fail.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("stemmer failed on token '{token}'")]
    Stem {
        token: String,
        #[source]
        source: BoxError,
    },

    #[error("{field} formatter failed")]
    Format {
        field: Field,
        #[source]
        source: BoxError,
    },
}

/// Failure to read or parse an index produced by the external builder.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read index from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read index")]
    Read(#[from] std::io::Error),

    #[error("invalid index JSON")]
    Json(#[from] serde_json::Error),

    #[error("index input is empty")]
    EmptyInput,
}
