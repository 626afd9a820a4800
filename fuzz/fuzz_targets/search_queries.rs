// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at `search()` over a fixed blog index and
//! checks that it never panics, never returns an excluded page, never returns
//! a page twice, and always ranks heavier pages first.

#![no_main]

use libfuzzer_sys::fuzz_target;
use staticsearch::{Exclusion, SearchIndex, SearchOptions, StaticSearch};
use std::collections::HashSet;
use std::sync::OnceLock;

const INDEX: &str = r#"searchIndex = {
  "words": {
    "rust": [[1, 4], [2, 3], [3, 1]], "async": [[1, 5]], "await": [1, 4],
    "databas": [[2, 2], [3, 4]], "database": [[3, 1]], "index": [[3, 3], [5, 1]],
    "search": [[5, 6], [3, 1]], "cafe": [4], "deja": [4], "vu": [4],
    "explaino": [1, 2, 3, 4, 5], "_": [2], "2023": [1, 3], "ghost": [[99, 9]]
  },
  "docs": {
    "1": {"t": "Async Rust", "u": "/async-rust/", "d": "2023-08-02"},
    "2": {"t": "Rust databases", "u": "/rust-databases/", "d": "2024-02-10"},
    "3": {"t": "Database indexing", "u": "/database-indexing/", "d": "2023-09-15"},
    "4": {"t": "Café déjà vu", "u": "/about/", "d": "2023-01-01"},
    "5": {"t": "Search", "u": "/search/", "d": "2023-01-01"}
  }
};"#;

const EXCLUDED: [&str; 2] = ["/about/", "/search/"];

fuzz_target!(|query: &[u8]| {
    static ENGINE: OnceLock<StaticSearch> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| {
        let index = SearchIndex::from_script(INDEX).expect("fuzz index parses");
        let options = SearchOptions::default().with_exclude(Exclusion::urls(EXCLUDED));
        StaticSearch::new(index, options).expect("fuzz index is valid")
    });

    let query = String::from_utf8_lossy(query);

    // Never panics, and with identity formatting and stemming never errors
    let hits = engine.rank(&query).expect("search succeeds");

    let mut seen = HashSet::new();
    for hit in &hits {
        assert!(
            !EXCLUDED.contains(&hit.record.url.as_str()),
            "excluded url {} returned for {:?}",
            hit.record.url,
            query
        );
        assert!(seen.insert(hit.doc_id), "doc {} returned twice", hit.doc_id);
        assert_ne!(hit.doc_id.as_str(), "99", "dangling posting surfaced");
    }

    for pair in hits.windows(2) {
        assert!(
            pair[0].weight >= pair[1].weight,
            "ranking out of order for {:?}: {} before {}",
            query,
            pair[0].weight,
            pair[1].weight
        );
    }

    let formatted = engine.search(&query).expect("search succeeds");
    assert_eq!(formatted.len(), hits.len());
});
