//! Atomically swappable translation snapshots.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::info;

use crate::translation::snapshot::TranslationSnapshot;

/// Holds the current [`TranslationSnapshot`] and swaps it on reload.
///
/// Reads are lock-free: [`snapshot`](Self::snapshot) hands out an `Arc` to
/// the snapshot current at that instant, which stays valid however many
/// reloads happen afterwards. Writers never mutate a published snapshot,
/// they publish a replacement, so a reader sees either the old tables or
/// the new ones and never a mix.
///
/// A store created with [`empty`](Self::empty) has no snapshot until the
/// first [`install`](Self::install); resolving through it is an
/// [`UnresolvedSymbol`](crate::FormatError::UnresolvedSymbol) error.
///
/// # Example
///
/// ```
/// use sgfmt::{Message, TranslationSnapshot, TranslationStore, TranslationTable, Language};
///
/// let store = TranslationStore::new(TranslationSnapshot::new());
/// let before = store.snapshot();
/// assert!(before.is_some());
///
/// store.install(TranslationSnapshot::new().with_table(
///     Language::english(),
///     TranslationTable::from([(Message::Reloaded, "Reloaded!")]),
/// ));
///
/// assert_eq!(before.unwrap().entry_count(), 0);
/// assert_eq!(store.snapshot().unwrap().entry_count(), 1);
/// ```
pub struct TranslationStore {
    current: ArcSwapOption<TranslationSnapshot>,
}

impl TranslationStore {
    /// Create a store publishing `snapshot`.
    pub fn new(snapshot: TranslationSnapshot) -> Self {
        Self {
            current: ArcSwapOption::from_pointee(snapshot),
        }
    }

    /// Create a store with nothing installed yet.
    pub fn empty() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// The snapshot current at this instant, or `None` before the first
    /// install.
    pub fn snapshot(&self) -> Option<Arc<TranslationSnapshot>> {
        self.current.load_full()
    }

    /// Check whether a snapshot has been installed.
    pub fn is_installed(&self) -> bool {
        self.current.load().is_some()
    }

    /// Publish a new snapshot, returning the one it replaced.
    pub fn install(&self, snapshot: TranslationSnapshot) -> Option<Arc<TranslationSnapshot>> {
        info!(
            language = %snapshot.language(),
            fallback = %snapshot.fallback_language(),
            languages = snapshot.languages().len(),
            entries = snapshot.entry_count(),
            "installing translation snapshot"
        );
        self.current.swap(Some(Arc::new(snapshot)))
    }

    /// Publish a modified copy of the current snapshot.
    ///
    /// `f` may run more than once if another writer publishes concurrently;
    /// it always receives the latest snapshot. An empty store passes an empty
    /// snapshot.
    pub fn update(&self, f: impl Fn(&TranslationSnapshot) -> TranslationSnapshot) {
        self.current.rcu(|current| {
            let next = match current {
                Some(snapshot) => f(snapshot.as_ref()),
                None => f(&TranslationSnapshot::default()),
            };
            Some(Arc::new(next))
        });
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        TranslationStore::empty()
    }
}

impl Debug for TranslationStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TranslationStore")
            .field("current", &self.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::TranslationResolver;
    use crate::translation::table::TranslationTable;
    use crate::types::{Language, Message};

    #[test]
    fn empty_store_has_no_snapshot() {
        let store = TranslationStore::default();
        assert!(!store.is_installed());
        assert!(store.snapshot().is_none());
        assert!(store.install(TranslationSnapshot::new()).is_none());
        assert!(store.is_installed());
    }

    #[test]
    fn install_returns_previous_snapshot() {
        let store = TranslationStore::new(TranslationSnapshot::new());
        let previous = store
            .install(TranslationSnapshot::new().with_language("de".parse().unwrap()))
            .unwrap();
        assert_eq!(previous.language(), &Language::english());
        assert_eq!(store.snapshot().unwrap().language().to_string(), "de");
    }

    #[test]
    fn update_on_empty_store_starts_from_empty_snapshot() {
        let store = TranslationStore::empty();
        store.update(|current| {
            current.clone().with_table(
                Language::english(),
                TranslationTable::from([(Message::Blocked, "Blocked")]),
            )
        });
        assert_eq!(store.snapshot().unwrap().entry_count(), 1);
    }

    #[test]
    fn update_copies_on_write() {
        let store = TranslationStore::new(TranslationSnapshot::new());
        let before = store.snapshot().unwrap();
        store.update(|current| {
            current.clone().with_table(
                Language::english(),
                TranslationTable::from([(Message::Blocked, "Blocked")]),
            )
        });
        assert_eq!(before.lookup(Message::Blocked, &Language::english()), None);
        assert_eq!(
            store.snapshot().unwrap().lookup(Message::Blocked, &Language::english()),
            Some("Blocked")
        );
    }
}
