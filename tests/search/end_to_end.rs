//! The whole pipeline against small hand-checked indexes.

use crate::common::{blog_engine, cat_sat_index, search_urls};
use staticsearch::{DisplayResult, SearchOptions, StaticSearch};

#[test]
fn cat_sat_ranks_heavier_document_first() {
    let engine = StaticSearch::new(cat_sat_index(), SearchOptions::default()).unwrap();
    let results = engine.search("cat sat").unwrap();
    assert_eq!(
        results,
        vec![
            DisplayResult::new("A", "/a", "2020-01-01"),
            DisplayResult::new("B", "/b", "2020-01-02"),
        ]
    );
}

#[test]
fn single_word_is_a_prefix_search() {
    let engine = blog_engine(SearchOptions::default());
    assert_eq!(
        search_urls(&engine, "rust"),
        vec!["/2023/async-rust/", "/2024/rust-databases/", "/2023/database-indexing/"]
    );
}

#[test]
fn partial_last_word_expands_to_every_matching_term() {
    let engine = blog_engine(SearchOptions::default());
    // "dat" → databas (3:4, 6:2) and database (3:1)
    assert_eq!(
        search_urls(&engine, "dat"),
        vec!["/2023/database-indexing/", "/2024/rust-databases/"]
    );
}

#[test]
fn exact_and_prefix_weights_add_up() {
    let engine = blog_engine(SearchOptions::default());
    // rust: 2→4, 6→3, 3→1; datab: 3→4+1, 6→2
    let hits = engine.rank("rust datab").unwrap();
    let ranked: Vec<(&str, u64)> = hits.iter().map(|h| (h.doc_id.as_str(), h.weight)).collect();
    assert_eq!(ranked, vec![("3", 6), ("6", 5), ("2", 4)]);
}

#[test]
fn stop_words_are_ignored_before_the_last_word() {
    let engine = blog_engine(SearchOptions::default());
    assert_eq!(search_urls(&engine, "the rust"), search_urls(&engine, "rust"));
    assert_eq!(
        search_urls(&engine, "the of in rust"),
        search_urls(&engine, "rust")
    );
}

#[test]
fn accents_and_case_are_folded() {
    let engine = blog_engine(SearchOptions::default());
    assert_eq!(search_urls(&engine, "HËLLO"), vec!["/2023/hello-world/"]);
    assert_eq!(search_urls(&engine, "Dätab"), search_urls(&engine, "datab"));
}

#[test]
fn string_and_integer_ids_resolve_to_the_same_document() {
    let engine = blog_engine(SearchOptions::default());
    // "note" is posted as "3", docs key is "3"
    assert_eq!(search_urls(&engine, "note"), vec!["/2023/database-indexing/"]);
}

#[test]
fn empty_and_unmatched_queries_return_nothing() {
    let engine = blog_engine(SearchOptions::default());
    assert!(engine.search("").unwrap().is_empty());
    assert!(engine.search("   ").unwrap().is_empty());
    assert!(engine.search("—").unwrap().is_empty());
    assert!(engine.search("kubernetes").unwrap().is_empty());
    // "the" on its own is a prefix, and nothing starts with it
    assert!(engine.search("the").unwrap().is_empty());
}
