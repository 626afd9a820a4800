// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display formatting for result fields.
//!
//! Each of title, url and date goes through its own formatter. Formatters are
//! compiled from `FieldFormat` once, when the engine is built: templates are
//! split into literal and placeholder segments up front so a bad template is a
//! construction error rather than a surprise on the first query.
//!
//! # Template syntax
//!
//! The field's own name in braces is replaced by the raw value. Double braces
//! are literal braces.
//!
//! ```text
//! "https://example.com/blog{url}"   url "/posts/1"   →  "https://example.com/blog/posts/1"
//! "{{{title}}}"                     title "Hi"       →  "{Hi}"
//! ```

use crate::error::{ConfigError, SearchError};
use crate::options::{FieldFormat, FormatCallback, SearchOptions};
use crate::types::{DisplayResult, DocumentRecord, Field};

/// A piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value,
}

/// A template split into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Compile a template for `field`. The only placeholder allowed is the
    /// field's own name.
    pub fn compile(field: Field, pattern: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidTemplate { field, reason };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => name.push(ch),
                            None => return Err(invalid(format!("unclosed placeholder '{{{}'", name))),
                        }
                    }
                    if name.trim() != field.as_str() {
                        return Err(invalid(format!(
                            "unknown placeholder '{{{}}}', expected '{{{}}}'",
                            name, field
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Value);
                }
                '}' => return Err(invalid("unmatched '}', use '}}' for a literal brace".to_string())),
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(CompiledTemplate { segments })
    }

    /// Substitute a value into every placeholder.
    pub fn render(&self, value: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value => out.push_str(value),
            }
        }
        out
    }
}

/// Resolved formatter for a single field.
#[derive(Clone)]
pub enum FieldFormatter {
    Identity,
    Template(CompiledTemplate),
    Callback(FormatCallback),
}

impl FieldFormatter {
    pub fn compile(field: Field, format: &FieldFormat) -> Result<Self, ConfigError> {
        Ok(match format {
            FieldFormat::Identity => FieldFormatter::Identity,
            FieldFormat::Template(pattern) => {
                FieldFormatter::Template(CompiledTemplate::compile(field, pattern)?)
            }
            FieldFormat::Callback(f) => FieldFormatter::Callback(f.clone()),
        })
    }

    /// Format a raw value. Callback failures carry the field name.
    pub fn apply(&self, field: Field, value: &str) -> Result<String, SearchError> {
        match self {
            FieldFormatter::Identity => Ok(value.to_string()),
            FieldFormatter::Template(template) => Ok(template.render(value)),
            FieldFormatter::Callback(f) => f(value).map_err(|source| SearchError::Format { field, source }),
        }
    }
}

/// Formatters for all three display fields.
#[derive(Clone)]
pub struct Formatter {
    title: FieldFormatter,
    url: FieldFormatter,
    date: FieldFormatter,
}

impl Formatter {
    pub fn from_options(options: &SearchOptions) -> Result<Self, ConfigError> {
        Ok(Formatter {
            title: FieldFormatter::compile(Field::Title, &options.title_format)?,
            url: FieldFormatter::compile(Field::Url, &options.url_format)?,
            date: FieldFormatter::compile(Field::Date, &options.date_format)?,
        })
    }

    /// Map a raw record to its display form. Fields are formatted
    /// independently.
    pub fn format(&self, record: &DocumentRecord) -> Result<DisplayResult, SearchError> {
        Ok(DisplayResult {
            title: self.title.apply(Field::Title, &record.title)?,
            url: self.url.apply(Field::Url, &record.url)?,
            date: self.date.apply(Field::Date, &record.date)?,
        })
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter {
            title: FieldFormatter::Identity,
            url: FieldFormatter::Identity,
            date: FieldFormatter::Identity,
        }
    }
}
