//! Integration tests for parsing and loading language files.

use std::fs;
use std::path::PathBuf;

use sgfmt::parser::{Entry, ParseError, parse_language_file};
use sgfmt::translation::load_directory;
use sgfmt::{
    FormatBuilder, Language, LanguageConfig, LanguageError, LanguageResolver, LoadError,
    LoadWarning, Message, TranslationResolver, TranslationSnapshot, TranslationStore,
    TranslationTable,
};
use tempfile::TempDir;

fn lang(code: &str) -> Language {
    code.parse().unwrap()
}

fn write_files(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

// =========================================================================
// Parser
// =========================================================================

#[test]
fn parses_entries_in_order_with_line_numbers() {
    let entries = parse_language_file("prefix=[Stargate] \n\n# comment\nteleportMsg=Teleported\n").unwrap();
    assert_eq!(
        entries,
        vec![
            Entry {
                key: "prefix".to_string(),
                value: "[Stargate] ".to_string(),
                line: 1,
            },
            Entry {
                key: "teleportMsg".to_string(),
                value: "Teleported".to_string(),
                line: 4,
            },
        ]
    );
}

#[test]
fn value_keeps_everything_after_first_equals() {
    let entries = parse_language_file("denyMsg=a=b = c").unwrap();
    assert_eq!(entries[0].value, "a=b = c");
}

#[test]
fn spaces_before_equals_and_indentation_are_ignored() {
    let entries = parse_language_file("   author   =Kim").unwrap();
    assert_eq!(entries[0].key, "author");
    assert_eq!(entries[0].value, "Kim");
}

#[test]
fn empty_value_is_allowed() {
    let entries = parse_language_file("author=\n").unwrap();
    assert_eq!(entries[0].value, "");
}

#[test]
fn crlf_line_endings_and_bom_are_handled() {
    let entries = parse_language_file("\u{feff}prefix=A\r\ndenyMsg=B\r\n").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key, "prefix");
    assert_eq!(entries[0].value, "A");
    assert_eq!(entries[1].value, "B");
}

#[test]
fn empty_and_comment_only_files_have_no_entries() {
    assert!(parse_language_file("").unwrap().is_empty());
    assert!(parse_language_file("# only a comment").unwrap().is_empty());
    assert!(parse_language_file("\n   \n\t\n").unwrap().is_empty());
}

#[test]
fn line_without_equals_is_a_syntax_error() {
    let err = parse_language_file("prefix=ok\njust some words\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax {
            line: 2,
            column: 1,
            message: "expected 'key=value'".to_string(),
        }
    );
}

#[test]
fn invalid_key_character_is_located() {
    let err = parse_language_file("bad key=value").unwrap_err();
    let ParseError::Syntax { line, column, message } = err;
    assert_eq!((line, column), (1, 4));
    assert!(message.contains("bad key"));
}

#[test]
fn missing_key_is_a_syntax_error() {
    let err = parse_language_file("=value").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"syntax error at 1:1: missing key before '='");
}

// =========================================================================
// Tables
// =========================================================================

#[test]
fn unknown_keys_warn_with_suggestions() {
    let (table, warnings) =
        TranslationTable::parse(&Language::english(), "teleportmsg=Hi\nprefix=P\n", None).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(
        warnings,
        vec![LoadWarning::UnknownKey {
            key: "teleportmsg".to_string(),
            language: Language::english(),
            line: 1,
            suggestions: vec!["teleportMsg".to_string()],
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"en:1: unknown message key 'teleportmsg', did you mean: teleportMsg?"
    );
}

#[test]
fn duplicate_keys_warn_and_later_wins() {
    let (table, warnings) =
        TranslationTable::parse(&Language::english(), "denyMsg=first\ndenyMsg=second\n", None)
            .unwrap();
    assert_eq!(table.get(Message::Deny), Some("second"));
    assert_eq!(warnings.len(), 1);
    assert!(matches!(&warnings[0], LoadWarning::DuplicateKey { line: 2, .. }));
    assert_eq!(warnings[0].line(), 2);
}

#[test]
fn string_parse_errors_are_labeled_with_language() {
    let err = TranslationTable::parse(&lang("de"), "oops", None).unwrap_err();
    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, PathBuf::from("<de>"));
            assert_eq!(line, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn table_iterates_in_catalog_order() {
    let table = TranslationTable::from([(Message::Author, "Kim"), (Message::Prefix, "P")]);
    let keys: Vec<Message> = table.iter().map(|(message, _)| message).collect();
    assert_eq!(keys, vec![Message::Prefix, Message::Author]);
}

// =========================================================================
// Directories and snapshots
// =========================================================================

#[test]
fn load_directory_reads_every_language_file() {
    let dir = write_files(&[
        ("en.txt", "prefix=[Stargate] \nteleportMsg=Teleported\n"),
        ("nb_no.txt", "teleportMsg=Teleportert\n"),
        ("README.md", "not a language file"),
        ("not a language.txt", "prefix=x\n"),
    ]);
    let (tables, warnings) = load_directory(dir.path()).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[&lang("nb-NO")].get(Message::Teleport), Some("Teleportert"));
}

#[test]
fn load_directory_reports_file_location_on_parse_error() {
    let dir = write_files(&[("en.txt", "prefix=ok\nbroken\n")]);
    let err = load_directory(dir.path()).unwrap_err();
    match err {
        LoadError::Parse { path, line, column, .. } => {
            assert!(path.ends_with("en.txt"));
            assert_eq!((line, column), (2, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_directory_missing_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_directory(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn snapshot_load_uses_config_languages() {
    let dir = write_files(&[
        ("en.txt", "teleportMsg=Teleported\ndenyMsg=Access denied\n"),
        ("de.txt", "teleportMsg=Teleportiert\nunknownThing=x\n"),
    ]);
    let config = LanguageConfig::builder()
        .language(lang("de"))
        .directory(dir.path())
        .build();

    let loaded = TranslationSnapshot::load(&config).unwrap();
    assert_eq!(loaded.warnings.len(), 1);
    assert_eq!(loaded.snapshot.language(), &lang("de"));
    assert_eq!(loaded.snapshot.fallback_language(), &Language::english());
    assert_eq!(
        loaded.snapshot.lookup(Message::Teleport, &lang("de")),
        Some("Teleportiert")
    );

    let store = std::sync::Arc::new(TranslationStore::new(loaded.snapshot));
    let builder = FormatBuilder::builder()
        .value(vec![Message::Teleport, Message::Deny])
        .delimiter(" / ")
        .resolution(LanguageResolver::new(store))
        .build();
    assert_eq!(builder.render().unwrap(), "Teleportiert / Access denied");
}

#[test]
fn snapshot_load_requires_fallback_language_file() {
    let dir = write_files(&[("de.txt", "teleportMsg=Teleportiert\n")]);
    let config = LanguageConfig::builder()
        .language(lang("de"))
        .directory(dir.path())
        .build();
    let err = TranslationSnapshot::load(&config).unwrap_err();
    assert!(matches!(err, LoadError::MissingLanguage { ref language, .. } if *language == Language::english()));
}

#[test]
fn snapshot_load_tolerates_missing_active_language() {
    let dir = write_files(&[("en.txt", "teleportMsg=Teleported\n")]);
    let config = LanguageConfig::builder()
        .language(lang("fr"))
        .directory(dir.path())
        .build();
    let loaded = TranslationSnapshot::load(&config).unwrap();
    assert_eq!(loaded.snapshot.missing(&lang("fr")).len(), Message::ALL.len());
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn config_defaults() {
    let config = LanguageConfig::default();
    assert_eq!(config.language, Language::english());
    assert_eq!(config.fallback_language, Language::english());
    assert_eq!(config.directory, PathBuf::from("lang"));
}

#[test]
fn config_parses_toml() {
    let config = LanguageConfig::from_toml_str(
        r#"
        language = "pt_br"
        fallback_language = "de"
        directory = "/srv/lang"
    "#,
    )
    .unwrap();
    assert_eq!(config.language, lang("pt-BR"));
    assert_eq!(config.fallback_language, lang("de"));
    assert_eq!(config.directory, PathBuf::from("/srv/lang"));
}

#[test]
fn config_rejects_bad_language_and_unknown_fields() {
    assert!(matches!(
        LanguageConfig::from_toml_str(r#"language = "not a language!""#),
        Err(LoadError::InvalidLanguage(LanguageError::Invalid { .. }))
    ));
    let err = LanguageConfig::from_toml_str(r#"fallback_language = "e n""#).unwrap_err();
    assert!(err.to_string().starts_with("invalid language 'e n'"));
    assert!(matches!(
        LanguageConfig::from_toml_str("language = 3"),
        Err(LoadError::Config { .. })
    ));
    assert!(matches!(
        LanguageConfig::from_toml_str(r#"langauge = "en""#),
        Err(LoadError::Config { .. })
    ));
}

#[test]
fn message_and_language_serialize_as_strings() {
    let json = serde_json::to_string(&(Message::Teleport, lang("zh_cn"))).unwrap();
    assert_eq!(json, r#"["teleportMsg","zh-CN"]"#);
    let back: (Message, Language) = serde_json::from_str(&json).unwrap();
    assert_eq!(back, (Message::Teleport, lang("zh-CN")));
    assert!(serde_json::from_str::<Message>(r#""nope""#).is_err());
}
