//! Display formatting of result fields.

use crate::common::{blog_engine, blog_index, write_temp};
use staticsearch::{
    BoxError, ConfigError, Field, FieldFormat, SearchError, SearchOptions, SearchOptionsConfig,
    StaticSearch,
};

fn strip_site_suffix(title: &str) -> Result<String, BoxError> {
    let title = title.strip_suffix(" - von Explaino").unwrap_or(title);
    Ok(title.strip_suffix(" - Article").unwrap_or(title).to_string())
}

#[test]
fn identity_by_default() {
    let engine = blog_engine(SearchOptions::default());
    let first = &engine.search("hello").unwrap()[0];
    assert_eq!(first.title, "Hello world - Article - von Explaino");
    assert_eq!(first.url, "/2023/hello-world/");
    assert_eq!(first.date, "2023-07-20T21:40:41+10:00");
}

#[test]
fn each_field_has_its_own_formatter() {
    let engine = blog_engine(
        SearchOptions::default()
            .with_title_format(FieldFormat::callback(strip_site_suffix))
            .with_url_format(FieldFormat::template("https://explaino.example{url}"))
            .with_date_format(FieldFormat::callback(|d| Ok(d.chars().take(10).collect()))),
    );
    let first = &engine.search("hello").unwrap()[0];
    assert_eq!(first.title, "Hello world");
    assert_eq!(first.url, "https://explaino.example/2023/hello-world/");
    assert_eq!(first.date, "2023-07-20");
}

#[test]
fn failing_formatter_fails_the_query() {
    let engine = blog_engine(SearchOptions::default().with_date_format(FieldFormat::callback(
        |d| -> Result<String, BoxError> { Err(format!("unparseable date {d}").into()) },
    )));
    match engine.search("hello") {
        Err(SearchError::Format { field, source }) => {
            assert_eq!(field, Field::Date);
            assert!(source.to_string().contains("2023-07-20"));
        }
        other => panic!("expected a format error, got {other:?}"),
    }
    // no results, nothing to format
    assert!(engine.search("kubernetes").unwrap().is_empty());
}

#[test]
fn options_file_configures_templates_and_exclusions() {
    let file = write_temp(
        r#"{
            "titleFormat": "{title}!",
            "urlFormat": "https://explaino.example{url}",
            "exclude": ["/search/"],
            "maxQueryTokens": 8
        }"#,
    );
    let text = std::fs::read_to_string(file.path()).unwrap();
    let config: SearchOptionsConfig = serde_json::from_str(&text).unwrap();
    let options = SearchOptions::try_from(config).unwrap();
    assert_eq!(options.max_query_tokens, 8);

    let engine = StaticSearch::new(blog_index(), options).unwrap();
    let results = engine.search("search").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Database indexing notes - Article - von Explaino!");
    assert_eq!(results[0].url, "https://explaino.example/2023/database-indexing/");
}

#[test]
fn malformed_formatter_option_is_a_construction_error() {
    let config: SearchOptionsConfig = serde_json::from_str(r#"{"urlFormat": ["nope"]}"#).unwrap();
    let err = SearchOptions::try_from(config).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownFormatter { field: Field::Url, .. }));
    assert!(err.to_string().contains("url"));
}

#[test]
fn template_naming_another_field_is_rejected() {
    let options = SearchOptions::default().with_date_format(FieldFormat::template("{title}"));
    let err = StaticSearch::new(blog_index(), options).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTemplate { field: Field::Date, .. }));
}
