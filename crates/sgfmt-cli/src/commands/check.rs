//! Implementation of the `sgfmt check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use serde::Serialize;
use sgfmt::{Language, LoadError, TranslationTable};

use crate::output::SgfmtDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (<language>.txt)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    language: String,
    entries: usize,
    error: Option<String>,
    warnings: Vec<WarningReport>,
}

/// JSON output for one warning.
#[derive(Debug, Serialize)]
struct WarningReport {
    line: Option<usize>,
    message: String,
}

/// Language named by a file stem.
fn language_for(path: &Path) -> Option<Language> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| Language::parse(stem).ok())
}

/// Check a single file, printing diagnostics unless `quiet`.
fn check_file(path: &Path, quiet: bool) -> FileReport {
    let mut report = FileReport {
        file: path.display().to_string(),
        language: String::new(),
        entries: 0,
        error: None,
        warnings: Vec::new(),
    };

    // load_directory skips files whose stem is not a language code
    let language = match language_for(path) {
        Some(language) => language,
        None => {
            let language = Language::default();
            let message = format!(
                "file name is not a language code, checking as '{language}' (loading skips this file)"
            );
            if !quiet {
                eprintln!("{} {}: {}", "warning:".yellow().bold(), path.display(), message);
            }
            report.warnings.push(WarningReport {
                line: None,
                message,
            });
            language
        }
    };
    report.language = language.to_string();

    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            report.error = Some(format!("cannot read file: {e}"));
            if !quiet {
                eprintln!("{} {}: {}", "error:".red().bold(), path.display(), e);
            }
            return report;
        }
    };

    match TranslationTable::parse(&language, &content, Some(path)) {
        Ok((table, warnings)) => {
            report.entries = table.len();
            for warning in warnings {
                if !quiet {
                    eprintln!("{} {}", "warning:".yellow().bold(), warning);
                }
                report.warnings.push(WarningReport {
                    line: Some(warning.line()),
                    message: warning.to_string(),
                });
            }
        }
        Err(e) => {
            report.error = Some(e.to_string());
            if !quiet {
                let diagnostic: Report = match e {
                    LoadError::Parse {
                        line,
                        column,
                        message,
                        ..
                    } => SgfmtDiagnostic::new(path, &content, line, column, &message).into(),
                    other => Report::msg(other.to_string()),
                };
                eprintln!("{:?}", diagnostic);
            }
        }
    }
    report
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let reports: Vec<FileReport> = args
        .files
        .iter()
        .map(|path| check_file(path, args.json))
        .collect();

    let errors = reports.iter().filter(|r| r.error.is_some()).count();
    let warnings: usize = reports.iter().map(|r| r.warnings.len()).sum();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).into_diagnostic()?
        );
    } else {
        for report in reports.iter().filter(|r| r.error.is_none()) {
            println!(
                "{} {} ({}, {} entries)",
                "ok".green(),
                report.file,
                report.language,
                report.entries
            );
        }
        println!(
            "\n{} file(s) checked, {} error(s), {} warning(s)",
            reports.len(),
            errors,
            warnings
        );
    }

    if errors > 0 || (args.strict && warnings > 0) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
