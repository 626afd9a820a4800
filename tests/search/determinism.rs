//! Same index, same options, same query: same output.

use crate::common::{blog_engine, blog_index, index_from_terms, search_urls, BLOG_SCRIPT};
use staticsearch::{SearchIndex, SearchOptions, StaticSearch};

#[test]
fn repeated_searches_are_identical() {
    let engine = blog_engine(SearchOptions::default());
    for query in ["rust", "rust datab", "explaino", "hello world explaino", "s"] {
        let first = serde_json::to_string(&engine.search(query).unwrap()).unwrap();
        for _ in 0..5 {
            let again = serde_json::to_string(&engine.search(query).unwrap()).unwrap();
            assert_eq!(first, again, "query {query:?} changed between runs");
        }
    }
}

#[test]
fn separately_loaded_indexes_agree() {
    let a = blog_engine(SearchOptions::default());
    let b = StaticSearch::new(
        SearchIndex::from_script(BLOG_SCRIPT).unwrap(),
        SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(a.search("explaino").unwrap(), b.search("explaino").unwrap());
    assert_eq!(blog_index(), SearchIndex::from_script(BLOG_SCRIPT).unwrap());
}

#[test]
fn equal_weights_keep_posting_order() {
    let engine = blog_engine(SearchOptions::default());
    // every page posts "explaino" with weight 1, listed 1..6
    assert_eq!(
        search_urls(&engine, "explaino"),
        vec![
            "/2023/hello-world/",
            "/2023/async-rust/",
            "/2023/database-indexing/",
            "/about/",
            "/search/",
            "/2024/rust-databases/",
        ]
    );
}

#[test]
fn ties_across_prefix_terms_follow_term_order() {
    // prefix "ca" expands to cab, car, cat in that order
    let engine = StaticSearch::new(
        index_from_terms(&[("cat", &[3]), ("car", &[2]), ("cab", &[1])]),
        SearchOptions::default(),
    )
    .unwrap();
    let ids: Vec<String> = engine
        .rank("ca")
        .unwrap()
        .iter()
        .map(|h| h.doc_id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}
