//! Miette diagnostic wrapper for language file parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use sgfmt::LoadError;
use thiserror::Error;

/// A miette-compatible diagnostic for language file syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(sgfmt::syntax), help("each line must be blank, a # comment, or key=value"))]
pub struct SgfmtDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl SgfmtDiagnostic {
    /// Create a diagnostic pointing at `line:column` of `content`.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: &str) -> Self {
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        SgfmtDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.to_string(),
        }
    }
}

/// Turn a load error into a report, with source context for parse errors.
pub fn load_error_report(err: LoadError) -> Report {
    if let LoadError::Parse {
        path,
        line,
        column,
        message,
    } = &err
    {
        if let Ok(content) = read_to_string(path) {
            return SgfmtDiagnostic::new(path, &content, *line, *column, message).into();
        }
    }
    miette!("{}", err)
}
