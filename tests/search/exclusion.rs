//! Excluded documents never reach the caller.

use crate::common::{blog_engine, search_urls};
use staticsearch::{DocumentRecord, Exclusion, SearchOptions};

#[test]
fn excluded_url_is_removed_and_order_kept() {
    let plain = blog_engine(SearchOptions::default());
    assert_eq!(
        search_urls(&plain, "search index"),
        vec!["/search/", "/2023/database-indexing/"]
    );

    let engine = blog_engine(SearchOptions::default().with_exclude(Exclusion::urls(["/search/"])));
    assert_eq!(
        search_urls(&engine, "search index"),
        vec!["/2023/database-indexing/"]
    );
}

#[test]
fn exclusion_applies_after_miss_tolerance() {
    // doc 4 qualifies for the query; excluding it must not let anything else in
    let engine = blog_engine(SearchOptions::default().with_exclude(Exclusion::urls(["/about/"])));
    assert_eq!(
        search_urls(&engine, "hello world explaino"),
        vec!["/2023/hello-world/"]
    );
}

#[test]
fn exclusion_matches_raw_url_not_formatted_url() {
    use staticsearch::FieldFormat;
    let engine = blog_engine(
        SearchOptions::default()
            .with_url_format(FieldFormat::template("https://explaino.example{url}"))
            .with_exclude(Exclusion::urls(["/about/", "/search/"])),
    );
    let urls = search_urls(&engine, "explaino");
    assert_eq!(urls.len(), 4);
    assert!(urls.iter().all(|u| u.starts_with("https://explaino.example/20")));
}

#[test]
fn predicate_exclusion_sees_the_record() {
    let engine = blog_engine(SearchOptions::default().with_exclude(Exclusion::predicate(
        |r: &DocumentRecord| !r.title.contains("Article"),
    )));
    let urls = search_urls(&engine, "explaino");
    assert_eq!(
        urls,
        vec![
            "/2023/hello-world/",
            "/2023/async-rust/",
            "/2023/database-indexing/",
            "/2024/rust-databases/",
        ]
    );
}
