// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stemming capability.
//!
//! The index builder reduces words to a root form ("offspring" → "offspr")
//! before writing terms, so queries have to go through the same reduction to
//! land on them. Which algorithm that is belongs to the builder, not to this
//! crate: the engine takes any `Stemmer` at construction time.
//!
//! `IdentityStemmer` is the default. It is correct for indexes built without
//! stemming and handy in tests. Closures work too:
//!
//! ```
//! use staticsearch::{BoxError, Stemmer};
//!
//! let strip_plural = |token: &str| -> Result<String, BoxError> {
//!     Ok(token.strip_suffix('s').unwrap_or(token).to_string())
//! };
//! assert_eq!(strip_plural.stem("cats").unwrap(), "cat");
//! ```

use crate::error::BoxError;

/// Reduce a lowercase token to its canonical root.
///
/// `Send + Sync` so one engine can serve queries from many threads.
pub trait Stemmer: Send + Sync {
    /// Stem a single normalized token. Failures propagate to the caller of
    /// `search()` unchanged.
    fn stem(&self, token: &str) -> Result<String, BoxError>;
}

/// Returns every token unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    #[inline]
    fn stem(&self, token: &str) -> Result<String, BoxError> {
        Ok(token.to_string())
    }
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> Result<String, BoxError> + Send + Sync,
{
    fn stem(&self, token: &str) -> Result<String, BoxError> {
        self(token)
    }
}
