// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization: fold accents, split into words, lowercase.
//!
//! The index builder folds accents with the same table before it writes
//! terms, so "Mémoires" in a post and "memoires" in a query meet in the middle.
//! Anything the table doesn't know stays as-is, and if it isn't an ASCII word
//! character it becomes a separator.
//!
//! ```text
//! "Café déjà-vu"  →  fold  →  "Cafe deja-vu"  →  split  →  ["cafe", "deja", "vu"]
//! ```

/// Combining Diacritical Marks block. These compose onto the preceding base
/// letter, so dropping them leaves the bare letter behind.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Map a single character through the accent table.
///
/// Returns `None` for combining marks (dropped entirely), `Some(c)` otherwise.
/// Covers the Latin-1 Supplement letters with diacritics in both cases, plus
/// the "œ" ligature. Case is preserved; lowercasing happens after tokenization.
#[inline]
pub fn fold_char(c: char) -> Option<char> {
    if COMBINING_MARKS.contains(&c) {
        return None;
    }
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Æ' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'œ' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Œ' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' | 'Ÿ' => 'Y',
        other => other,
    };
    Some(folded)
}

/// Fold accents across a whole string.
///
/// - "Mémoires" → "Memoires"
/// - "naïve" → "naive"
/// - "cafe\u{0301}" → "cafe" (decomposed input)
pub fn remove_accents(value: &str) -> String {
    value.chars().filter_map(fold_char).collect()
}

/// ASCII word character, `\w` in most regex flavours.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Normalize a raw query into lowercase word tokens.
///
/// Accent folding runs first, then maximal runs of `[A-Za-z0-9_]` are
/// extracted and lowercased. Everything else is a separator. Empty input,
/// or input with no word characters, yields no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in query.chars().filter_map(fold_char) {
        if is_word_char(c) {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
