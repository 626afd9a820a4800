// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index loading.
//!
//! Arbitrary text as an index script must come back as an index or a
//! `LoadError`, never a panic. Whatever loads must also survive a search.

#![no_main]

use libfuzzer_sys::fuzz_target;
use staticsearch::{SearchIndex, SearchOptions, StaticSearch};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(index) = SearchIndex::from_script(source) else {
        return;
    };

    let report = index.validate();
    assert_eq!(report.terms, index.term_count());
    assert_eq!(report.docs, index.doc_count());

    if let Ok(engine) = StaticSearch::new(index, SearchOptions::default()) {
        for query in ["a", "rust data", "x y z", ""] {
            let _ = engine.search(query);
        }
    }
});
