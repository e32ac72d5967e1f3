//! Immutable, complete sets of translation tables.

use std::collections::HashMap;

use bon::Builder;

use crate::translation::TranslationResolver;
use crate::translation::table::TranslationTable;
use crate::types::{Language, Message};

/// Every loaded language table as of one point in time.
///
/// A snapshot is never modified once it has been published to a
/// [`TranslationStore`](crate::TranslationStore); reloading builds a new
/// snapshot and swaps it in whole. Besides the tables it records which
/// language is active by default and which language fills gaps.
///
/// # Example
///
/// ```
/// use sgfmt::{Language, Message, TranslationResolver, TranslationSnapshot, TranslationTable};
///
/// let snapshot = TranslationSnapshot::builder()
///     .language("de".parse().unwrap())
///     .build()
///     .with_table(Language::english(), TranslationTable::from([(Message::Deny, "Access denied")]));
///
/// assert_eq!(snapshot.language().to_string(), "de");
/// assert_eq!(snapshot.lookup(Message::Deny, &Language::english()), Some("Access denied"));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct TranslationSnapshot {
    /// Language used when a resolver does not ask for a specific one.
    #[builder(default)]
    language: Language,

    /// Language consulted when the requested language lacks a message.
    #[builder(default)]
    fallback_language: Language,

    /// Tables keyed by language.
    #[builder(default)]
    tables: HashMap<Language, TranslationTable>,
}

impl TranslationSnapshot {
    /// Create an empty snapshot with English as active and fallback language.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing any previous table for that language.
    pub fn with_table(mut self, language: Language, table: TranslationTable) -> Self {
        self.insert_table(language, table);
        self
    }

    /// Add a table, returning the one it replaced.
    pub fn insert_table(
        &mut self,
        language: Language,
        table: TranslationTable,
    ) -> Option<TranslationTable> {
        self.tables.insert(language, table)
    }

    /// A copy of this snapshot with a different active language.
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    /// The default active language.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The language consulted when the active one lacks a message.
    pub fn fallback_language(&self) -> &Language {
        &self.fallback_language
    }

    /// Get the table for a language.
    pub fn table(&self, language: &Language) -> Option<&TranslationTable> {
        self.tables.get(language)
    }

    /// Loaded languages, sorted by code.
    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self.tables.keys().collect();
        languages.sort_by_key(|language| language.to_string());
        languages
    }

    /// Total number of entries across all tables.
    pub fn entry_count(&self) -> usize {
        self.tables.values().map(TranslationTable::len).sum()
    }

    /// Messages a language does not define, in catalog order.
    ///
    /// A language with no table is missing everything.
    pub fn missing(&self, language: &Language) -> Vec<Message> {
        match self.tables.get(language) {
            Some(table) => table.missing(),
            None => Message::ALL.to_vec(),
        }
    }

    /// The translator credit of a language file, if it has a non-empty one.
    pub fn author(&self, language: &Language) -> Option<&str> {
        self.lookup(Message::Author, language)
            .map(str::trim)
            .filter(|author| !author.is_empty())
    }
}

impl TranslationResolver for TranslationSnapshot {
    fn lookup(&self, message: Message, language: &Language) -> Option<&str> {
        self.tables.get(language).and_then(|table| table.get(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> Language {
        "de".parse().unwrap()
    }

    #[test]
    fn missing_lists_undefined_messages() {
        let snapshot = TranslationSnapshot::new().with_table(
            german(),
            TranslationTable::from([(Message::Prefix, "[Stargate] ")]),
        );
        let missing = snapshot.missing(&german());
        assert_eq!(missing.len(), Message::ALL.len() - 1);
        assert!(!missing.contains(&Message::Prefix));
        assert_eq!(snapshot.missing(&"fr".parse().unwrap()).len(), Message::ALL.len());
    }

    #[test]
    fn blank_author_is_absent() {
        let snapshot = TranslationSnapshot::new()
            .with_table(Language::english(), TranslationTable::from([(Message::Author, "  ")]))
            .with_table(german(), TranslationTable::from([(Message::Author, "Kim")]));
        assert_eq!(snapshot.author(&Language::english()), None);
        assert_eq!(snapshot.author(&german()), Some("Kim"));
    }

    #[test]
    fn with_language_keeps_tables() {
        let snapshot = TranslationSnapshot::new()
            .with_table(german(), TranslationTable::from([(Message::Deny, "Nein")]));
        let switched = snapshot.with_language(german());
        assert_eq!(switched.language(), &german());
        assert_eq!(switched.lookup(Message::Deny, &german()), Some("Nein"));
        assert_eq!(snapshot.language(), &Language::english());
    }
}
