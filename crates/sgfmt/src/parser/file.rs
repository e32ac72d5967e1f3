//! Language file format parser.
//!
//! Parses `<language>.txt` files of `key=value` lines.

use super::error::ParseError;
use winnow::ascii::space0;
use winnow::combinator::{alt, eof, opt};
use winnow::prelude::*;
use winnow::token::take_while;

/// One `key=value` line of a language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Text before the `=`.
    pub key: String,
    /// Everything after the first `=`, verbatim.
    pub value: String,
    /// 1-based line number.
    pub line: usize,
}

/// Parse an entire language file into entries, in file order.
///
/// Blank lines and `#` comments are skipped. Values keep their whitespace,
/// so `prefix=[Stargate] ` keeps its trailing space.
pub fn parse_language_file(input: &str) -> Result<Vec<Entry>, ParseError> {
    let source = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut remaining = source;
    let mut entries = Vec::new();
    while !remaining.is_empty() {
        let line_start = remaining;
        match line(&mut remaining) {
            Ok(Some((key, value))) => entries.push(Entry {
                key,
                value,
                line: calculate_position(source, line_start).0,
            }),
            Ok(None) => {}
            Err(_) => return Err(syntax_error(source, line_start)),
        }
    }
    Ok(entries)
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Describe why the line starting at `line_start` failed to parse.
fn syntax_error(source: &str, line_start: &str) -> ParseError {
    let (line, _) = calculate_position(source, line_start);
    let text = line_start.lines().next().unwrap_or_default();
    let indent = text.len() - text.trim_start_matches([' ', '\t']).len();
    let (offset, message) = match text.find('=') {
        None => (indent, "expected 'key=value'".to_string()),
        Some(eq) => {
            let key = text[indent..eq].trim_end();
            if key.is_empty() {
                (indent, "missing key before '='".to_string())
            } else {
                match key.char_indices().find(|(_, c)| !is_key_char(*c)) {
                    Some((bad, _)) => (indent + bad, format!("invalid character in key '{key}'")),
                    None => (indent, "malformed line".to_string()),
                }
            }
        }
    };
    ParseError::Syntax {
        line,
        column: text[..offset].chars().count() + 1,
        message,
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Parse one line: blank, comment, or entry.
fn line(input: &mut &str) -> ModalResult<Option<(String, String)>> {
    space0.parse_next(input)?;
    alt((
        (opt('\r'), alt(("\n".void(), eof.void()))).value(None),
        comment.value(None),
        entry.map(Some),
    ))
    .parse_next(input)
}

/// Rest of the line up to `\n`, without a trailing `\r`; consumes the `\n`.
///
/// A `\r` anywhere else is part of the text.
fn rest_of_line<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    let text = take_while(0.., |c: char| c != '\n').parse_next(input)?;
    opt('\n').parse_next(input)?;
    Ok(text.strip_suffix('\r').unwrap_or(text))
}

/// Parse a comment: # ... newline
fn comment(input: &mut &str) -> ModalResult<()> {
    ('#', rest_of_line).void().parse_next(input)
}

/// Parse an entry: key = value newline
fn entry(input: &mut &str) -> ModalResult<(String, String)> {
    let key = take_while(1.., is_key_char).parse_next(input)?;
    (space0, '=').parse_next(input)?;
    let value = rest_of_line.parse_next(input)?;
    Ok((key.to_string(), value.to_string()))
}
