//! Translation tables and the lookup contract messages resolve through.
//!
//! Tables are grouped into immutable snapshots. A [`TranslationStore`]
//! publishes one snapshot at a time and replaces it wholesale on reload, so
//! lookups never see a half-updated set of tables.

mod error;
mod loader;
mod resolver;
mod snapshot;
mod store;
mod table;

pub use error::{LoadError, LoadWarning, compute_suggestions};
pub use loader::{LANGUAGE_FILE_EXTENSION, Loaded, load_directory};
pub use resolver::{LanguageResolver, PinnedResolver, TranslationResolver, translate};
pub use snapshot::TranslationSnapshot;
pub use store::TranslationStore;
pub use table::TranslationTable;
