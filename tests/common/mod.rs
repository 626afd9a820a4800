//! Shared test utilities and fixtures.

#![allow(dead_code)]

use staticsearch::{DisplayResult, SearchIndex, SearchOptions, StaticSearch};
use std::io::Write;
use std::sync::LazyLock;
use tempfile::NamedTempFile;

// Re-export canonical test utilities from staticsearch::testing
pub use staticsearch::testing::{cat_sat_index, index_from_terms, index_from_weighted, make_record};

// ============================================================================
// BLOG FIXTURE
// ============================================================================

/// A small blog index in the script form a site builder emits.
///
/// Terms are already stemmed the way the builder would ("databas",
/// "practic"). Every page carries "explaino" from the site footer. Ids mix
/// integer and string postings on purpose.
pub const BLOG_SCRIPT: &str = r#"searchIndex = {
  "words": {
    "hello":    [[1, 3]],
    "world":    [[1, 2], [4, 1]],
    "async":    [[2, 5]],
    "rust":     [[2, 4], [6, 3], [3, 1]],
    "practic":  [2],
    "databas":  [[3, 4], [6, 2]],
    "database": [[3, 1]],
    "index":    [[3, 3], [5, 1]],
    "note":     ["3"],
    "compar":   [6],
    "search":   [[5, 6], [3, 1]],
    "explaino": [1, 2, 3, 4, 5, 6]
  },
  "docs": {
    "1": {"t": "Hello world - Article - von Explaino", "u": "/2023/hello-world/", "d": "2023-07-20T21:40:41+10:00"},
    "2": {"t": "Async Rust in practice - Article - von Explaino", "u": "/2023/async-rust/", "d": "2023-08-02T09:00:00+10:00"},
    "3": {"t": "Database indexing notes - Article - von Explaino", "u": "/2023/database-indexing/", "d": "2023-09-15T18:30:00+10:00"},
    "4": {"t": "About - von Explaino", "u": "/about/", "d": "2023-01-01T00:00:00+10:00"},
    "5": {"t": "Search - von Explaino", "u": "/search/", "d": "2023-01-01T00:00:00+10:00"},
    "6": {"t": "Rust databases compared - Article - von Explaino", "u": "/2024/rust-databases/", "d": "2024-02-10T12:00:00+10:00"}
  }
};
"#;

static BLOG_INDEX: LazyLock<SearchIndex> = LazyLock::new(|| {
    SearchIndex::from_script(BLOG_SCRIPT).expect("blog fixture parses")
});

pub fn blog_index() -> SearchIndex {
    BLOG_INDEX.clone()
}

/// Engine over the blog fixture.
pub fn blog_engine(options: SearchOptions) -> StaticSearch {
    StaticSearch::new(blog_index(), options).expect("blog fixture is a valid engine")
}

// ============================================================================
// HELPERS
// ============================================================================

/// Urls of the results, in order.
pub fn urls(results: &[DisplayResult]) -> Vec<String> {
    results.iter().map(|r| r.url.clone()).collect()
}

/// Search and return urls, panicking on error.
pub fn search_urls(engine: &StaticSearch, query: &str) -> Vec<String> {
    urls(&engine.search(query).expect("search succeeds"))
}

/// Write text to a temporary file that lives as long as the handle.
pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
