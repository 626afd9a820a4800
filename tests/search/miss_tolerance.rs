//! A document may miss at most one term slot.

use crate::common::{blog_engine, index_from_terms, search_urls};
use staticsearch::{SearchOptions, StaticSearch};

#[test]
fn two_of_three_slots_is_enough() {
    let engine = blog_engine(SearchOptions::default());
    // doc 1 matches hello, world, explaino; doc 4 matches world, explaino
    assert_eq!(
        search_urls(&engine, "hello world explaino"),
        vec!["/2023/hello-world/", "/about/"]
    );
}

#[test]
fn one_of_three_slots_is_not() {
    let engine = StaticSearch::new(
        index_from_terms(&[("alpha", &[1, 2, 3]), ("beta", &[1, 2]), ("gamma", &[1])]),
        SearchOptions::default(),
    )
    .unwrap();
    let ids: Vec<String> = engine
        .rank("alpha beta gamma")
        .unwrap()
        .iter()
        .map(|h| h.doc_id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn an_unindexed_word_uses_up_the_miss() {
    let engine = blog_engine(SearchOptions::default());
    assert_eq!(
        search_urls(&engine, "kubernetes rust"),
        search_urls(&engine, "rust")
    );
    assert!(search_urls(&engine, "kubernetes terraform rust").is_empty());
}

#[test]
fn prefix_with_no_expansion_still_counts_as_a_slot() {
    let engine = blog_engine(SearchOptions::default());
    // "databases" expands to nothing (terms are stemmed to "databas")
    assert_eq!(search_urls(&engine, "async rust databases"), vec!["/2023/async-rust/"]);
}

#[test]
fn repeated_words_each_count() {
    let engine = StaticSearch::new(
        index_from_terms(&[("cat", &[1]), ("dog", &[1, 2])]),
        SearchOptions::default(),
    )
    .unwrap();
    // three slots (cat, cat, dog): doc 2 only has dog
    let ids: Vec<String> = engine
        .rank("cat cat dog")
        .unwrap()
        .iter()
        .map(|h| h.doc_id.to_string())
        .collect();
    assert_eq!(ids, vec!["1"]);
}
