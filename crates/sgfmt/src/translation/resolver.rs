//! Language-aware message lookup.

use std::sync::Arc;

use tracing::debug;

use crate::format::FormatError;
use crate::global;
use crate::translation::snapshot::TranslationSnapshot;
use crate::translation::store::TranslationStore;
use crate::types::{Language, Message};

/// Looks up the template text of a message in a language.
///
/// Implementations must be pure reads: the same arguments give the same
/// answer for as long as the implementor itself is unchanged.
pub trait TranslationResolver {
    /// Get the text for `message` in `language`, if that language defines it.
    fn lookup(&self, message: Message, language: &Language) -> Option<&str>;
}

/// Resolve a message in `language`, falling back to `fallback`.
///
/// Returns [`FormatError::MissingTranslation`] when neither language defines
/// the message. The text is returned verbatim.
pub fn translate<R: TranslationResolver + ?Sized>(
    resolver: &R,
    message: Message,
    language: &Language,
    fallback: &Language,
) -> Result<String, FormatError> {
    if let Some(text) = resolver.lookup(message, language) {
        return Ok(text.to_string());
    }
    if language != fallback {
        if let Some(text) = resolver.lookup(message, fallback) {
            debug!(%message, %language, %fallback, "using fallback translation");
            return Ok(text.to_string());
        }
    }
    debug!(%message, %language, %fallback, "missing translation");
    Err(FormatError::MissingTranslation {
        message,
        language: language.clone(),
        fallback: fallback.clone(),
    })
}

/// Resolves messages against the current snapshot of a [`TranslationStore`].
///
/// The resolver reads whichever snapshot is current when resolution starts,
/// so it follows reloads without being rebuilt. Unless a language is set
/// explicitly, the snapshot's configured language is used. A store with
/// nothing installed resolves every message to
/// [`FormatError::UnresolvedSymbol`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sgfmt::{Language, LanguageResolver, Message, TranslationSnapshot, TranslationStore, TranslationTable};
///
/// let store = Arc::new(TranslationStore::new(TranslationSnapshot::new().with_table(
///     Language::english(),
///     TranslationTable::from([(Message::Teleport, "Teleported")]),
/// )));
///
/// let resolver = LanguageResolver::new(store).with_language("fr".parse().unwrap());
/// // French has no table, so English fills in.
/// assert_eq!(resolver.resolve(Message::Teleport).unwrap(), "Teleported");
/// ```
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    store: Arc<TranslationStore>,
    language: Option<Language>,
}

impl LanguageResolver {
    /// Resolve against the given store.
    pub fn new(store: Arc<TranslationStore>) -> Self {
        Self {
            store,
            language: None,
        }
    }

    /// Resolve against the process-wide store.
    pub fn global() -> Self {
        Self::new(global::store())
    }

    /// Use `language` instead of the snapshot's configured language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// The explicitly requested language, if any.
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    /// The store this resolver reads from.
    pub fn store(&self) -> &Arc<TranslationStore> {
        &self.store
    }

    /// Pin the current snapshot for a series of lookups.
    ///
    /// Every lookup through the returned view sees the same tables, even if
    /// the store is reloaded in the meantime. Returns `None` while the store
    /// has nothing installed.
    pub fn pin(&self) -> Option<PinnedResolver> {
        let snapshot = self.store.snapshot()?;
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| snapshot.language().clone());
        Some(PinnedResolver { snapshot, language })
    }

    /// Resolve a single message against the current snapshot.
    pub fn resolve(&self, message: Message) -> Result<String, FormatError> {
        match self.pin() {
            Some(pinned) => pinned.resolve(message),
            None => {
                debug!(%message, "no translations installed");
                Err(FormatError::UnresolvedSymbol { message })
            }
        }
    }
}

/// A [`LanguageResolver`] bound to one snapshot.
#[derive(Debug, Clone)]
pub struct PinnedResolver {
    snapshot: Arc<TranslationSnapshot>,
    language: Language,
}

impl PinnedResolver {
    /// The active language lookups use.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The snapshot lookups read from.
    pub fn snapshot(&self) -> &TranslationSnapshot {
        &self.snapshot
    }

    /// Resolve a message in the active language, falling back to the
    /// snapshot's fallback language.
    pub fn resolve(&self, message: Message) -> Result<String, FormatError> {
        translate(
            self.snapshot.as_ref(),
            message,
            &self.language,
            self.snapshot.fallback_language(),
        )
    }
}
