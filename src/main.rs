// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use staticsearch::{
    DisplayResult, Exclusion, FieldFormat, SearchIndex, SearchOptions, SearchOptionsConfig,
    StaticSearch,
};
use std::fs;
use std::path::Path;
use tracing::Level;

mod cli;
use cli::display;
use cli::{Cli, Commands, OptionArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
            options,
        } => run_search(&index, &query, limit, json, &options),
        Commands::Inspect { index } => run_inspect(&index),
    }
}

fn load_index(path: &Path) -> Result<SearchIndex> {
    SearchIndex::from_path(path).with_context(|| format!("cannot load index {}", path.display()))
}

/// Options file first, then flags on top.
fn resolve_options(args: &OptionArgs) -> Result<SearchOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read options file {}", path.display()))?;
            let config: SearchOptionsConfig = serde_json::from_str(&text)
                .with_context(|| format!("invalid options file {}", path.display()))?;
            SearchOptions::try_from(config)?
        }
        None => SearchOptions::default(),
    };

    if let Some(pattern) = &args.title_format {
        options.title_format = FieldFormat::template(pattern.as_str());
    }
    if let Some(pattern) = &args.url_format {
        options.url_format = FieldFormat::template(pattern.as_str());
    }
    if let Some(pattern) = &args.date_format {
        options.date_format = FieldFormat::template(pattern.as_str());
    }
    if !args.exclude.is_empty() {
        options.exclude = Exclusion::urls(args.exclude.iter().cloned());
    }
    if let Some(max) = args.max_tokens {
        options.max_query_tokens = max;
    }
    Ok(options)
}

fn run_search(index: &Path, query: &str, limit: usize, json: bool, args: &OptionArgs) -> Result<()> {
    let options = resolve_options(args)?;
    let engine = StaticSearch::new(load_index(index)?, options)?;

    let mut results = engine
        .search(query)
        .with_context(|| format!("search for \"{}\" failed", query))?;
    results.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(query, &results);
    }
    Ok(())
}

fn print_results(query: &str, results: &[DisplayResult]) {
    if results.is_empty() {
        println!("{}", display::no_results(query));
        return;
    }
    for (i, result) in results.iter().enumerate() {
        for line in display::result_lines(i + 1, result) {
            println!("{}", line);
        }
    }
}

fn run_inspect(index: &Path) -> Result<()> {
    let report = load_index(index)?.validate();
    display::print_report(&index.display().to_string(), &report);
    Ok(())
}
