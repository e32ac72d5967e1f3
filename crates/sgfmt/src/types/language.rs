use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::{LanguageIdentifier, langid};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string is not a usable language identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("invalid language '{code}': {reason}")]
    Invalid { code: String, reason: String },
}

/// A language that translation tables are keyed by.
///
/// Language files in the wild use both `pt-br` and `zh_cn` spellings, so
/// underscores are accepted as subtag separators. The identifier is stored in
/// canonical BCP-47 form, which makes `nb_no`, `nb-NO` and `NB-no` equal.
///
/// # Example
///
/// ```
/// use sgfmt::Language;
///
/// let chinese: Language = "zh_cn".parse().unwrap();
/// assert_eq!(chinese.to_string(), "zh-CN");
/// assert_eq!(chinese, "zh-CN".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(LanguageIdentifier);

impl Language {
    /// English, the language every shipped message is written in first.
    pub fn english() -> Language {
        Language(langid!("en"))
    }

    /// Parse a language code, accepting `_` as a separator.
    pub fn parse(code: &str) -> Result<Language, LanguageError> {
        let normalized = code.trim().replace('_', "-");
        normalized
            .parse::<LanguageIdentifier>()
            .map(Language)
            .map_err(|err| LanguageError::Invalid {
                code: code.to_string(),
                reason: format!("{err:?}"),
            })
    }

    /// The underlying BCP-47 identifier.
    pub fn identifier(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::english()
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

impl TryFrom<String> for Language {
    type Error = LanguageError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Language::parse(&code)
    }
}

impl TryFrom<&str> for Language {
    type Error = LanguageError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Language::parse(code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.to_string()
    }
}

impl From<LanguageIdentifier> for Language {
    fn from(identifier: LanguageIdentifier) -> Self {
        Language(identifier)
    }
}
