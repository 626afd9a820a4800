// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the staticsearch command-line interface.
//!
//! Two subcommands: `search` runs a query against an index file the way a
//! site's search page would, and `inspect` reports what an index contains and
//! whether its postings all point somewhere.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "staticsearch",
    about = "Query a precomputed static site search index",
    version
)]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and print ranked results
    Search {
        /// Index file: bare JSON or a `searchIndex = {...};` script
        index: PathBuf,

        /// Search query (the last word is treated as a prefix)
        query: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print term and document counts and any integrity problems
    Inspect {
        /// Index file: bare JSON or a `searchIndex = {...};` script
        index: PathBuf,
    },
}

/// Engine options. Flags override values from `--options`.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// JSON options file (titleFormat, urlFormat, dateFormat, exclude, maxQueryTokens)
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Title template, e.g. "{title} | My Blog"
    #[arg(long, value_name = "TEMPLATE")]
    pub title_format: Option<String>,

    /// Url template, e.g. "https://example.com{url}"
    #[arg(long, value_name = "TEMPLATE")]
    pub url_format: Option<String>,

    /// Date template
    #[arg(long, value_name = "TEMPLATE")]
    pub date_format: Option<String>,

    /// Leave this url out of results (repeatable)
    #[arg(long, value_name = "URL")]
    pub exclude: Vec<String>,

    /// Maximum number of query tokens considered
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "staticsearch",
            "-vv",
            "search",
            "index.js",
            "rust async",
            "--limit",
            "3",
            "--exclude",
            "/about/",
            "--exclude",
            "/search/",
            "--url-format",
            "https://example.com{url}",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Search {
                query,
                limit,
                json,
                options,
                ..
            } => {
                assert_eq!(query, "rust async");
                assert_eq!(limit, 3);
                assert!(!json);
                assert_eq!(options.exclude, vec!["/about/", "/search/"]);
                assert_eq!(options.url_format.as_deref(), Some("https://example.com{url}"));
                assert!(options.max_tokens.is_none());
            }
            Commands::Inspect { .. } => panic!("expected search"),
        }
    }
}
