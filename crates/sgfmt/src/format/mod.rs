//! Rendering values to strings.
//!
//! A [`FormatBuilder`] holds a [`Value`](crate::Value) and renders it by
//! recursing over its variants. Messages are the only part that needs
//! outside help; the builder's [`Resolution`] decides where their text
//! comes from.

mod builder;
mod error;
mod resolution;

pub use builder::{DEFAULT_DELIMITER, FormatBuilder, render_value};
pub use error::FormatError;
pub use resolution::{ResolveFn, Resolution};
