//! Language selection and translation file locations.

use std::path::PathBuf;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::translation::LoadError;
use crate::types::Language;

fn default_directory() -> PathBuf {
    PathBuf::from("lang")
}

/// Which languages to load and where their files live.
///
/// # Example
///
/// ```
/// use sgfmt::LanguageConfig;
///
/// let config = LanguageConfig::from_toml_str(r#"
///     language = "nb_no"
///     directory = "plugins/Stargate/lang"
/// "#).unwrap();
///
/// assert_eq!(config.language.to_string(), "nb-NO");
/// assert_eq!(config.fallback_language.to_string(), "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageConfig {
    /// Language messages are shown in.
    #[builder(default)]
    pub language: Language,

    /// Language consulted when the active one lacks a message.
    #[builder(default)]
    pub fallback_language: Language,

    /// Directory containing `<language>.txt` files.
    #[builder(default = default_directory(), into)]
    pub directory: PathBuf,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        LanguageConfig::builder().build()
    }
}

/// The TOML shape before language codes are validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLanguageConfig {
    language: Option<String>,
    fallback_language: Option<String>,
    directory: Option<PathBuf>,
}

impl LanguageConfig {
    /// Parse a configuration from TOML text.
    ///
    /// Malformed TOML and unknown fields are [`LoadError::Config`]; a
    /// language code that does not parse is [`LoadError::InvalidLanguage`].
    pub fn from_toml_str(content: &str) -> Result<LanguageConfig, LoadError> {
        let raw: RawLanguageConfig = toml::from_str(content).map_err(|e| LoadError::Config {
            message: e.to_string(),
        })?;
        let mut config = LanguageConfig::default();
        if let Some(code) = raw.language {
            config.language = Language::parse(&code)?;
        }
        if let Some(code) = raw.fallback_language {
            config.fallback_language = Language::parse(&code)?;
        }
        if let Some(directory) = raw.directory {
            config.directory = directory;
        }
        Ok(config)
    }
}
