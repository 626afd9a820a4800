//! Reading indexes the way a site builder writes them.

use crate::common::{write_temp, BLOG_SCRIPT};
use staticsearch::{ConfigError, IndexIssue, LoadError, SearchIndex, SearchOptions, StaticSearch};

#[test]
fn script_file_loads_from_disk() {
    let file = write_temp(BLOG_SCRIPT);
    let index = SearchIndex::from_path(file.path()).unwrap();
    assert_eq!(index.term_count(), 12);
    assert_eq!(index.doc_count(), 6);
    assert!(index.validate().is_clean());
}

#[test]
fn bare_json_file_loads_too() {
    let json = BLOG_SCRIPT
        .trim()
        .trim_start_matches("searchIndex =")
        .trim_end_matches(';');
    let file = write_temp(json);
    let from_disk = SearchIndex::from_path(file.path()).unwrap();
    assert_eq!(from_disk, SearchIndex::from_script(BLOG_SCRIPT).unwrap());

    let from_reader = SearchIndex::from_reader(std::fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(from_reader, from_disk);
}

#[test]
fn invalid_json_is_a_load_error() {
    let file = write_temp("searchIndex = {\"words\": [};");
    assert!(matches!(
        SearchIndex::from_path(file.path()),
        Err(LoadError::Json(_))
    ));
    assert!(matches!(
        SearchIndex::from_path(write_temp("").path()),
        Err(LoadError::EmptyInput)
    ));
}

#[test]
fn empty_index_cannot_build_an_engine() {
    let index = SearchIndex::from_json_str(r#"{"words": {}, "docs": {}}"#).unwrap();
    assert!(matches!(
        StaticSearch::new(index, SearchOptions::default()),
        Err(ConfigError::EmptyIndex { .. })
    ));

    let no_docs = SearchIndex::from_json_str(r#"{"words": {"a": [1]}, "docs": {}}"#).unwrap();
    assert!(matches!(
        StaticSearch::new(no_docs, SearchOptions::default()),
        Err(ConfigError::EmptyIndex { terms: 1, docs: 0 })
    ));
}

#[test]
fn dangling_postings_are_reported_and_skipped() {
    let index = SearchIndex::from_json_str(
        r#"{
            "words": {"rust": [[1, 1], [9, 50]]},
            "docs": {"1": {"t": "Rust", "u": "/rust/", "d": "2024-01-01"}}
        }"#,
    )
    .unwrap();

    let report = index.validate();
    assert_eq!(
        report.issues,
        vec![IndexIssue::DanglingPosting {
            term: "rust".to_string(),
            doc_id: "9".into(),
        }]
    );

    let engine = StaticSearch::new(index, SearchOptions::default()).unwrap();
    let results = engine.search("rust").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "/rust/");
}
