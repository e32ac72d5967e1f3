//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "de", "nb-NO").
    pub language: String,
    /// Number of messages translated.
    pub translated: usize,
    /// Keys of missing messages.
    pub missing: Vec<String>,
    /// Translator credit from the file, if any.
    pub author: Option<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(total: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing", "Author"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, total),
            lang.missing.len().to_string(),
            lang.author.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}
