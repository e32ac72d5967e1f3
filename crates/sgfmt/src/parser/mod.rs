//! Language file parser.
//!
//! Language files hold one `key=value` entry per line. This module turns
//! their text into [`Entry`] values without interpreting the keys; mapping
//! keys to messages happens when a table is built.

mod error;
mod file;

pub use error::ParseError;
pub use file::{Entry, parse_language_file};
