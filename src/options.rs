// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine options: how to display fields and what to leave out.
//!
//! Two ways in:
//!
//! - **Rust API**: build `SearchOptions` directly. Formatters can be closures.
//! - **Config file / CLI**: deserialize `SearchOptionsConfig` from JSON and
//!   convert with `TryFrom`. Formatter options there are loosely typed
//!   (`null`, a template string, or something invalid), so the conversion
//!   checks the shape and reports anything else as a `ConfigError`.
//!
//! Either way, options are resolved once when the engine is built; nothing is
//! inspected per query.

use crate::error::{BoxError, ConfigError};
use crate::types::{DocumentRecord, Field};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Default bound on normalized tokens per query.
pub const DEFAULT_MAX_QUERY_TOKENS: usize = 32;

/// Formatter callback: raw field value in, display value out.
pub type FormatCallback = Arc<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>;

/// Exclusion predicate over a resolved document record.
pub type ExcludePredicate = Arc<dyn Fn(&DocumentRecord) -> bool + Send + Sync>;

/// How one document field is turned into its display value.
#[derive(Clone, Default)]
pub enum FieldFormat {
    /// Return the raw value unchanged.
    #[default]
    Identity,
    /// Substitute the value into a template with a `{field}` placeholder,
    /// e.g. `"https://example.com{url}"`.
    Template(String),
    /// Call an external function.
    Callback(FormatCallback),
}

impl FieldFormat {
    /// Wrap a closure as a callback formatter.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        FieldFormat::Callback(Arc::new(f))
    }

    pub fn template(pattern: impl Into<String>) -> Self {
        FieldFormat::Template(pattern.into())
    }
}

impl fmt::Debug for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFormat::Identity => f.write_str("Identity"),
            FieldFormat::Template(pattern) => f.debug_tuple("Template").field(pattern).finish(),
            FieldFormat::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Documents to leave out of every result list.
#[derive(Clone, Default)]
pub enum Exclusion {
    #[default]
    None,
    /// Exclude documents for which the predicate returns true.
    Predicate(ExcludePredicate),
    /// Exclude documents whose url is in the set.
    Urls(HashSet<String>),
}

impl Exclusion {
    pub fn urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Exclusion::Urls(urls.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&DocumentRecord) -> bool + Send + Sync + 'static,
    {
        Exclusion::Predicate(Arc::new(f))
    }
}

impl fmt::Debug for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::None => f.write_str("None"),
            Exclusion::Predicate(_) => f.write_str("Predicate(..)"),
            Exclusion::Urls(urls) => f.debug_tuple("Urls").field(urls).finish(),
        }
    }
}

/// Everything configurable about an engine besides the index and stemmer.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub title_format: FieldFormat,
    pub url_format: FieldFormat,
    pub date_format: FieldFormat,
    pub exclude: Exclusion,
    /// Tokens beyond this many are ignored. Guards against pathological input.
    pub max_query_tokens: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            title_format: FieldFormat::Identity,
            url_format: FieldFormat::Identity,
            date_format: FieldFormat::Identity,
            exclude: Exclusion::None,
            max_query_tokens: DEFAULT_MAX_QUERY_TOKENS,
        }
    }
}

impl SearchOptions {
    pub fn with_title_format(mut self, format: FieldFormat) -> Self {
        self.title_format = format;
        self
    }

    pub fn with_url_format(mut self, format: FieldFormat) -> Self {
        self.url_format = format;
        self
    }

    pub fn with_date_format(mut self, format: FieldFormat) -> Self {
        self.date_format = format;
        self
    }

    pub fn with_exclude(mut self, exclude: Exclusion) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_max_query_tokens(mut self, max: usize) -> Self {
        self.max_query_tokens = max;
        self
    }

    /// The format configured for a field.
    pub fn format_for(&self, field: Field) -> &FieldFormat {
        match field {
            Field::Title => &self.title_format,
            Field::Url => &self.url_format,
            Field::Date => &self.date_format,
        }
    }
}

// =============================================================================
// LOOSELY TYPED CONFIGURATION
// =============================================================================

/// A formatter option as written in a config file or on the command line.
///
/// Deserializes from any JSON value so that a wrong shape surfaces as a
/// `ConfigError` naming the field when resolved, not as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatSpec {
    /// `null` or missing.
    #[default]
    Absent,
    /// A template string.
    Template(String),
    /// Any other JSON value; holds a description of what was found.
    Unsupported(&'static str),
}

impl FormatSpec {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => FormatSpec::Absent,
            Value::String(pattern) => FormatSpec::Template(pattern.clone()),
            other => FormatSpec::Unsupported(json_kind(other)),
        }
    }

    /// `Absent` → Identity, `Template` → Template, anything else is an error.
    pub fn resolve(&self, field: Field) -> Result<FieldFormat, ConfigError> {
        match self {
            FormatSpec::Absent => Ok(FieldFormat::Identity),
            FormatSpec::Template(pattern) => Ok(FieldFormat::Template(pattern.clone())),
            FormatSpec::Unsupported(found) => Err(ConfigError::UnknownFormatter {
                field,
                found: (*found).to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for FormatSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(FormatSpec::from_value(&value))
    }
}

/// Options as they appear in a JSON config file.
///
/// ```json
/// {
///   "titleFormat": null,
///   "urlFormat": "https://example.com/blog{url}",
///   "exclude": ["/about/", "/search/"],
///   "maxQueryTokens": 16
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptionsConfig {
    pub title_format: FormatSpec,
    pub url_format: FormatSpec,
    pub date_format: FormatSpec,
    /// Kept raw so a wrong shape is reported as `InvalidExclude`.
    pub exclude: Value,
    pub max_query_tokens: Option<usize>,
}

/// Resolve a loosely typed formatter option.
pub fn resolve_format(field: Field, value: &Value) -> Result<FieldFormat, ConfigError> {
    FormatSpec::from_value(value).resolve(field)
}

/// Resolve a loosely typed exclusion option: `null` or an array of strings.
pub fn resolve_exclude(value: &Value) -> Result<Exclusion, ConfigError> {
    match value {
        Value::Null => Ok(Exclusion::None),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(url) => Ok(url.clone()),
                other => Err(ConfigError::InvalidExclude {
                    found: format!("array containing {}", json_kind(other)),
                }),
            })
            .collect::<Result<HashSet<_>, _>>()
            .map(Exclusion::Urls),
        other => Err(ConfigError::InvalidExclude {
            found: json_kind(other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<SearchOptionsConfig> for SearchOptions {
    type Error = ConfigError;

    fn try_from(config: SearchOptionsConfig) -> Result<Self, Self::Error> {
        Ok(SearchOptions {
            title_format: config.title_format.resolve(Field::Title)?,
            url_format: config.url_format.resolve(Field::Url)?,
            date_format: config.date_format.resolve(Field::Date)?,
            exclude: resolve_exclude(&config.exclude)?,
            max_query_tokens: config.max_query_tokens.unwrap_or(DEFAULT_MAX_QUERY_TOKENS),
        })
    }
}
