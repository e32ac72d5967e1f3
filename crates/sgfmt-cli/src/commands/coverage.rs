//! Coverage command implementation.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use sgfmt::translation::load_directory;
use sgfmt::{Message, TranslationSnapshot};

use super::SourceArgs;
use crate::output::load_error_report;
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    author: Option<String>,
    fallback: bool,
}

/// Per-language coverage of the message catalog, in language order.
fn language_coverage(snapshot: &TranslationSnapshot) -> Vec<LanguageCoverage> {
    let total = Message::ALL.len();
    snapshot
        .languages()
        .into_iter()
        .map(|language| {
            let missing: Vec<String> = snapshot
                .missing(language)
                .into_iter()
                .map(|message| message.key().to_string())
                .collect();
            LanguageCoverage {
                language: language.to_string(),
                translated: total - missing.len(),
                missing,
                author: snapshot.author(language).map(str::to_string),
            }
        })
        .collect()
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let config = args.source.language_config(None)?;
    let (tables, _warnings) = load_directory(&config.directory).map_err(load_error_report)?;
    let snapshot = TranslationSnapshot::builder()
        .fallback_language(config.fallback_language.clone())
        .tables(tables)
        .build();
    let total = Message::ALL.len();
    let coverage_data = language_coverage(&snapshot);

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());
    let fallback = snapshot.fallback_language().to_string();

    // Output results
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
                author: c.author.clone(),
                fallback: c.language == fallback,
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        if snapshot.table(snapshot.fallback_language()).is_none() {
            eprintln!("warning: no file for fallback language '{}'", fallback);
        }

        // Print ASCII table
        let table = format_coverage_table(total, &coverage_data);
        println!("{}", table);

        // Print missing messages per language
        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for key in &lang_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
