//! Loading language files from disk into snapshots.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::LanguageConfig;
use crate::translation::error::{LoadError, LoadWarning};
use crate::translation::snapshot::TranslationSnapshot;
use crate::translation::table::TranslationTable;
use crate::types::Language;

/// Extension of language files.
pub const LANGUAGE_FILE_EXTENSION: &str = "txt";

/// A freshly loaded snapshot and everything worth warning about.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub snapshot: TranslationSnapshot,
    pub warnings: Vec<LoadWarning>,
}

/// Load every `<language>.txt` file in a directory.
///
/// Files whose stem is not a language code are skipped. Loader warnings are
/// logged and also returned, ordered by language then line.
pub fn load_directory(
    directory: impl AsRef<Path>,
) -> Result<(HashMap<Language, TranslationTable>, Vec<LoadWarning>), LoadError> {
    let directory = directory.as_ref();
    let io_error = |source| LoadError::Io {
        path: directory.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for dir_entry in fs::read_dir(directory).map_err(io_error)? {
        let path = dir_entry.map_err(io_error)?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(LANGUAGE_FILE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut tables = HashMap::new();
    let mut warnings = Vec::new();
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let language = match Language::parse(stem) {
            Ok(language) => language,
            Err(e) => {
                debug!(path = %path.display(), "skipping file: {e}");
                continue;
            }
        };
        let (table, table_warnings) = TranslationTable::load(&language, &path)?;
        for warning in &table_warnings {
            warn!(path = %path.display(), "{warning}");
        }
        debug!(%language, entries = table.len(), "loaded language file");
        warnings.extend(table_warnings);
        tables.insert(language, table);
    }
    Ok((tables, warnings))
}

impl TranslationSnapshot {
    /// Load the languages named by `config` into a new snapshot.
    ///
    /// Every language file in the configured directory is loaded. The
    /// fallback language must have a file; the active language may be
    /// missing, in which case every message falls back.
    pub fn load(config: &LanguageConfig) -> Result<Loaded, LoadError> {
        let (tables, warnings) = load_directory(&config.directory)?;
        if !tables.contains_key(&config.fallback_language) {
            return Err(LoadError::MissingLanguage {
                language: config.fallback_language.clone(),
                directory: config.directory.clone(),
            });
        }
        if !tables.contains_key(&config.language) {
            warn!(
                language = %config.language,
                fallback = %config.fallback_language,
                "no language file for active language, all messages will fall back"
            );
        }
        let snapshot = TranslationSnapshot::builder()
            .language(config.language.clone())
            .fallback_language(config.fallback_language.clone())
            .tables(tables)
            .build();
        Ok(Loaded { snapshot, warnings })
    }
}
