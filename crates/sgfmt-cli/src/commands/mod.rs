//! CLI command implementations.

mod check;
mod coverage;
mod render;

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{miette, Result};
use sgfmt::{Language, LanguageConfig};

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use render::{run_render, RenderArgs};

/// Options shared by commands that load a translation directory.
#[derive(Debug, clap::Args)]
pub struct SourceArgs {
    /// TOML file with `language`, `fallback_language` and `directory`
    #[arg(long, env = "SGFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing language files (overrides config)
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Fallback language (overrides config)
    #[arg(long)]
    pub fallback: Option<Language>,
}

impl SourceArgs {
    /// Build the effective configuration: file first, then flags.
    pub fn language_config(&self, language: Option<&Language>) -> Result<LanguageConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = read_to_string(path)
                    .map_err(|e| miette!("Cannot read config file {}: {}", path.display(), e))?;
                LanguageConfig::from_toml_str(&content)
                    .map_err(|e| miette!("{}: {}", path.display(), e))?
            }
            None => LanguageConfig::default(),
        };
        if let Some(directory) = &self.translations {
            config.directory = directory.clone();
        }
        if let Some(fallback) = &self.fallback {
            config.fallback_language = fallback.clone();
        }
        if let Some(language) = language {
            config.language = language.clone();
        }
        Ok(config)
    }
}
