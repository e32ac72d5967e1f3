//! Implementation of the `sgfmt render` command.

use miette::{miette, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use sgfmt::{
    compute_suggestions, global, FormatBuilder, Language, Message, Resolution, TranslationSnapshot,
    Value, DEFAULT_DELIMITER,
};
use tracing::debug;

use super::SourceArgs;
use crate::output::load_error_report;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Language to render in (overrides config)
    #[arg(long)]
    pub lang: Option<Language>,

    /// Joins the rendered items
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Items to render: `@key` is a message, `@@text` is the literal `@text`,
    /// anything else is literal text
    #[arg(required = true)]
    pub items: Vec<String>,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub result: String,
}

/// JSON output for render failures.
#[derive(Serialize)]
pub struct RenderFailure {
    pub error: String,
    pub message: Option<&'static str>,
}

/// Parse one command-line item into a value.
fn parse_item(item: &str) -> Result<Value> {
    if let Some(escaped) = item.strip_prefix("@@") {
        return Ok(Value::Literal(format!("@{escaped}")));
    }
    let Some(key) = item.strip_prefix('@') else {
        return Ok(Value::from(item));
    };
    match Message::from_key(key) {
        Some(message) => Ok(Value::Symbol(message)),
        None => {
            let known: Vec<String> = Message::ALL.iter().map(|m| m.key().to_string()).collect();
            let suggestions = compute_suggestions(key, &known);
            if suggestions.is_empty() {
                Err(miette!("unknown message key '{}'", key))
            } else {
                Err(miette!(
                    "unknown message key '{}', did you mean: {}?",
                    key,
                    suggestions.join(", ")
                ))
            }
        }
    }
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> Result<i32> {
    let mut values = args
        .items
        .iter()
        .map(|item| parse_item(item))
        .collect::<Result<Vec<Value>>>()?;
    let value = if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Sequence(values)
    };

    // Translations are only needed when a message is rendered
    if !value.symbols().is_empty() {
        let config = args.source.language_config(args.lang.as_ref())?;
        let loaded = TranslationSnapshot::load(&config).map_err(load_error_report)?;
        debug!(
            language = %config.language,
            directory = %config.directory.display(),
            warnings = loaded.warnings.len(),
            "translations loaded"
        );
        global::install(loaded.snapshot);
    }

    let builder = FormatBuilder::builder()
        .value(value)
        .delimiter(args.delimiter)
        .resolution(Resolution::translated())
        .build();

    match builder.render() {
        Ok(result) => {
            if args.json {
                let output = RenderResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = RenderFailure {
                    error: e.to_string(),
                    message: e.message().map(Message::key),
                };
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("{} {}", "Render error:".red().bold(), e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_prefix_selects_message() {
        assert_eq!(
            parse_item("@teleportMsg").unwrap(),
            Value::Symbol(Message::Teleport)
        );
    }

    #[test]
    fn double_at_escapes_literal() {
        assert_eq!(
            parse_item("@@teleportMsg").unwrap(),
            Value::Literal("@teleportMsg".to_string())
        );
    }

    #[test]
    fn plain_text_is_literal() {
        assert_eq!(parse_item("Abydos").unwrap(), Value::from("Abydos"));
    }

    #[test]
    fn unknown_key_suggests_close_match() {
        let err = parse_item("@teleportmsg").unwrap_err();
        assert!(err.to_string().contains("teleportMsg"));
    }
}
