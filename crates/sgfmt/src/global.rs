//! Process-wide translation store.
//!
//! Holds the snapshot that [`LanguageResolver::global`](crate::LanguageResolver::global)
//! and [`FormatBuilder::translated`](crate::FormatBuilder::translated) read
//! from. Until [`install`] is called the store holds no snapshot, and
//! rendering a message through it fails with
//! [`FormatError::UnresolvedSymbol`](crate::FormatError::UnresolvedSymbol).

use std::sync::{Arc, LazyLock};

use tracing::info;

use crate::translation::{TranslationSnapshot, TranslationStore};
use crate::types::Language;

static GLOBAL_STORE: LazyLock<Arc<TranslationStore>> =
    LazyLock::new(|| Arc::new(TranslationStore::default()));

/// The process-wide store.
pub fn store() -> Arc<TranslationStore> {
    Arc::clone(&GLOBAL_STORE)
}

/// Install the initial snapshot at startup.
pub fn install(snapshot: TranslationSnapshot) {
    GLOBAL_STORE.install(snapshot);
}

/// Replace the current snapshot, returning the one that was replaced.
///
/// Renders already in progress finish against the snapshot they started
/// with.
pub fn reload(snapshot: TranslationSnapshot) -> Option<Arc<TranslationSnapshot>> {
    let previous = GLOBAL_STORE.install(snapshot);
    info!(
        previous_entries = previous.as_ref().map_or(0, |p| p.entry_count()),
        "translations reloaded"
    );
    previous
}

/// The snapshot current at this instant, if one is installed.
pub fn snapshot() -> Option<Arc<TranslationSnapshot>> {
    GLOBAL_STORE.snapshot()
}

/// Check whether translations have been installed.
pub fn is_installed() -> bool {
    GLOBAL_STORE.is_installed()
}

/// The configured active language of the current snapshot.
pub fn language() -> Option<Language> {
    GLOBAL_STORE.snapshot().map(|snapshot| snapshot.language().clone())
}
