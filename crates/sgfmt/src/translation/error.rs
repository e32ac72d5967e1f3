//! Error and warning types for translation loading.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Language, LanguageError};

/// Errors that occur during translation loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a language file or directory.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A required language has no file in the translation directory.
    #[error("no language file for '{language}' in '{directory}'")]
    MissingLanguage {
        language: Language,
        directory: PathBuf,
    },

    /// A configuration value is not a valid language.
    #[error(transparent)]
    InvalidLanguage(#[from] LanguageError),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

/// A non-fatal problem found while loading a language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A key that names no known message.
    UnknownKey {
        key: String,
        language: Language,
        line: usize,
        suggestions: Vec<String>,
    },

    /// A key defined more than once; the later definition wins.
    DuplicateKey {
        key: String,
        language: Language,
        line: usize,
    },
}

impl LoadWarning {
    /// Line the warning points at (1-based).
    pub fn line(&self) -> usize {
        match self {
            LoadWarning::UnknownKey { line, .. } | LoadWarning::DuplicateKey { line, .. } => *line,
        }
    }
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LoadWarning::UnknownKey {
                key,
                language,
                line,
                suggestions,
            } => {
                write!(f, "{language}:{line}: unknown message key '{key}'")?;
                if !suggestions.is_empty() {
                    write!(f, ", did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(())
            }
            LoadWarning::DuplicateKey {
                key,
                language,
                line,
            } => write!(f, "{language}:{line}: duplicate key '{key}' overrides earlier entry"),
        }
    }
}

/// Find up to three keys close to `key`, closest first.
///
/// Short keys allow an edit distance of 1, longer ones 2.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let lowered = key.to_lowercase();
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(&lowered, &candidate.to_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_rank_closest_first() {
        let available = vec![
            "denyMsg".to_string(),
            "destroyMsg".to_string(),
            "destEmpty".to_string(),
        ];
        let suggestions = compute_suggestions("denyMs", &available);
        assert_eq!(suggestions[0], "denyMsg");
    }

    #[test]
    fn case_differences_are_cheap() {
        let available = vec!["teleportMsg".to_string()];
        assert_eq!(compute_suggestions("teleportmsg", &available), vec!["teleportMsg"]);
    }

    #[test]
    fn distant_keys_have_no_suggestions() {
        let available = vec!["prefix".to_string()];
        assert!(compute_suggestions("xyzzy", &available).is_empty());
    }
}
