//! The format builder and its recursive renderer.

use std::mem;

use bon::Builder;

use crate::format::FormatError;
use crate::format::resolution::Resolution;
use crate::types::{Message, Value};

/// Delimiter used to join sequence elements unless a builder overrides it.
pub const DEFAULT_DELIMITER: &str = ",";

/// Renders a [`Value`] to a single string.
///
/// A builder owns at most one value and the delimiter that joins sequence
/// elements. Literals render as themselves, sequences render each element and
/// join them, and messages are handed to the builder's [`Resolution`].
///
/// # Example
///
/// ```
/// use sgfmt::FormatBuilder;
///
/// let builder = FormatBuilder::from_value(vec!["north", "south"]);
/// assert_eq!(builder.render().unwrap(), "north,south");
///
/// let builder = FormatBuilder::builder()
///     .value(vec!["north", "south"])
///     .delimiter(" | ")
///     .build();
/// assert_eq!(builder.render().unwrap(), "north | south");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct FormatBuilder {
    /// The value to render; `None` until one is set.
    #[builder(into)]
    value: Option<Value>,

    /// Joins rendered sequence elements.
    #[builder(default = DEFAULT_DELIMITER.to_string())]
    delimiter: String,

    /// How messages become text.
    #[builder(default, into)]
    resolution: Resolution,
}

impl Default for FormatBuilder {
    fn default() -> Self {
        FormatBuilder::builder().build()
    }
}

impl FormatBuilder {
    /// Create a builder with no value.
    ///
    /// Rendering fails with [`FormatError::EmptyBuilder`] until a value is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for `value` using the default delimiter.
    pub fn from_value(value: impl Into<Value>) -> Self {
        FormatBuilder::builder().value(value).build()
    }

    /// Create a builder for `value` joined by `delimiter`.
    pub fn with_delimiter(value: impl Into<Value>, delimiter: impl Into<String>) -> Self {
        FormatBuilder::builder()
            .value(value)
            .delimiter(delimiter)
            .build()
    }

    /// Create a builder that translates messages through the process-wide
    /// translation store.
    pub fn translated(value: impl Into<Value>) -> Self {
        FormatBuilder::builder()
            .value(value)
            .resolution(Resolution::translated())
            .build()
    }

    /// Get the value, if one is set.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Check whether a value is set.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Get the delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Get the resolution strategy.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Replace the value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Add `value` to the end of the held value.
    ///
    /// An empty builder takes `value` as its value. A held sequence gains
    /// `value` as its last element. Any other held value becomes the first
    /// element of a two-element sequence.
    pub fn push(&mut self, value: impl Into<Value>) {
        let value = value.into();
        match &mut self.value {
            None => self.value = Some(value),
            Some(Value::Sequence(values)) => values.push(value),
            Some(existing) => {
                let first = mem::replace(existing, Value::Sequence(Vec::new()));
                *existing = Value::Sequence(vec![first, value]);
            }
        }
    }

    /// Remove and return the value, leaving the builder empty.
    pub fn take_value(&mut self) -> Option<Value> {
        mem::take(&mut self.value)
    }

    /// Render the value to a string.
    ///
    /// The translation snapshot, if any, is read once per call, so every
    /// message in one render comes from the same set of tables.
    pub fn render(&self) -> Result<String, FormatError> {
        let value = self.value.as_ref().ok_or(FormatError::EmptyBuilder)?;
        match &self.resolution {
            Resolution::Unresolved => render_value(value, &self.delimiter, &|message| {
                Err(FormatError::UnresolvedSymbol { message })
            }),
            Resolution::Custom(resolve) => render_value(value, &self.delimiter, resolve.as_ref()),
            Resolution::Translated(resolver) => match resolver.pin() {
                Some(pinned) => {
                    render_value(value, &self.delimiter, &|message| pinned.resolve(message))
                }
                None => render_value(value, &self.delimiter, &|message| {
                    Err(FormatError::UnresolvedSymbol { message })
                }),
            },
        }
    }
}

/// One unit of pending work in [`render_value`].
enum Step<'a> {
    /// Render a value and push its text.
    Render(&'a Value),
    /// Join the last `n` rendered texts into one.
    Join(usize),
}

/// Render `value`, resolving messages with `resolve` and joining sequence
/// elements with `delimiter`.
///
/// Nested sequences flatten into one delimited string at any depth; an empty
/// sequence renders as an empty string. Messages are resolved left to right
/// and the first failure stops the render.
pub fn render_value(
    value: &Value,
    delimiter: &str,
    resolve: &dyn Fn(Message) -> Result<String, FormatError>,
) -> Result<String, FormatError> {
    let mut pending = vec![Step::Render(value)];
    let mut rendered: Vec<String> = Vec::new();
    while let Some(step) = pending.pop() {
        match step {
            Step::Render(Value::Literal(text)) => rendered.push(text.clone()),
            Step::Render(Value::Symbol(message)) => rendered.push(resolve(*message)?),
            Step::Render(Value::Sequence(values)) => {
                pending.push(Step::Join(values.len()));
                pending.extend(values.iter().rev().map(Step::Render));
            }
            Step::Join(count) => {
                let parts = rendered.split_off(rendered.len() - count);
                rendered.push(parts.join(delimiter));
            }
        }
    }
    Ok(rendered.pop().unwrap_or_default())
}
