//! Per-language message tables.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::{Entry, ParseError, parse_language_file};
use crate::translation::error::{LoadError, LoadWarning, compute_suggestions};
use crate::types::{Language, Message};

/// Message text for a single language.
///
/// A table maps each [`Message`] to the verbatim template text a language
/// file assigns it. Tables are built once, then frozen inside a
/// [`TranslationSnapshot`](crate::TranslationSnapshot).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<Message, String>,
}

impl TranslationTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text for a message.
    pub fn get(&self, message: Message) -> Option<&str> {
        self.entries.get(&message).map(String::as_str)
    }

    /// Check whether a message has text in this table.
    pub fn contains(&self, message: Message) -> bool {
        self.entries.contains_key(&message)
    }

    /// Set the text for a message, returning the text it replaced.
    pub fn insert(&mut self, message: Message, text: impl Into<String>) -> Option<String> {
        self.entries.insert(message, text.into())
    }

    /// Number of messages with text.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no message has text.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Message, &str)> {
        Message::ALL
            .iter()
            .filter_map(|message| self.get(*message).map(|text| (*message, text)))
    }

    /// Messages from the catalog that this table does not define.
    pub fn missing(&self) -> Vec<Message> {
        Message::ALL
            .iter()
            .copied()
            .filter(|message| !self.contains(*message))
            .collect()
    }

    /// Build a table from parsed language-file entries.
    ///
    /// Unknown keys and repeated keys do not stop loading; they are reported
    /// as warnings. When a key repeats, the later entry wins.
    pub fn from_entries(
        language: &Language,
        entries: impl IntoIterator<Item = Entry>,
    ) -> (TranslationTable, Vec<LoadWarning>) {
        let mut table = TranslationTable::new();
        let mut warnings = Vec::new();
        for entry in entries {
            let Some(message) = Message::from_key(&entry.key) else {
                let known: Vec<String> = Message::ALL.iter().map(|m| m.key().to_string()).collect();
                warnings.push(LoadWarning::UnknownKey {
                    suggestions: compute_suggestions(&entry.key, &known),
                    key: entry.key,
                    language: language.clone(),
                    line: entry.line,
                });
                continue;
            };
            if table.insert(message, entry.value).is_some() {
                warnings.push(LoadWarning::DuplicateKey {
                    key: entry.key,
                    language: language.clone(),
                    line: entry.line,
                });
            }
        }
        (table, warnings)
    }

    /// Parse language-file content into a table.
    ///
    /// `path` is only used to label errors; string-loaded content is
    /// reported as `<language>`.
    pub fn parse(
        language: &Language,
        content: &str,
        path: Option<&Path>,
    ) -> Result<(TranslationTable, Vec<LoadWarning>), LoadError> {
        let entries = parse_language_file(content).map_err(|e| {
            let path = path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(format!("<{language}>")));
            match e {
                ParseError::Syntax {
                    line,
                    column,
                    message,
                } => LoadError::Parse {
                    path,
                    line,
                    column,
                    message,
                },
            }
        })?;
        Ok(TranslationTable::from_entries(language, entries))
    }

    /// Read and parse a language file.
    pub fn load(
        language: &Language,
        path: impl AsRef<Path>,
    ) -> Result<(TranslationTable, Vec<LoadWarning>), LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        TranslationTable::parse(language, &content, Some(path))
    }
}

impl FromIterator<(Message, String)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (Message, String)>>(iter: I) -> Self {
        TranslationTable {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(Message, &str); N]> for TranslationTable {
    fn from(entries: [(Message, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(message, text)| (message, text.to_string()))
            .collect()
    }
}
