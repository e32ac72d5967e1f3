//! Error types for rendering.

use thiserror::Error;

use crate::types::{Language, Message};

/// An error that occurred while rendering a [`FormatBuilder`](crate::FormatBuilder).
///
/// Each variant names the exact failure so callers can decide what to show
/// instead. Rendering never substitutes a placeholder on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `render()` was called before any value was set.
    #[error("nothing to render: no value was set on the format builder")]
    EmptyBuilder,

    /// A message was rendered by a builder with no way to resolve messages.
    #[error("cannot resolve message '{message}': no resolver configured")]
    UnresolvedSymbol { message: Message },

    /// Neither the active nor the fallback language defines the message.
    #[error("no translation for '{message}' in '{language}' or fallback '{fallback}'")]
    MissingTranslation {
        message: Message,
        language: Language,
        fallback: Language,
    },
}

impl FormatError {
    /// The message that failed to resolve, if the error is about one.
    ///
    /// Useful for callers that prefer showing the raw key over failing.
    pub fn message(&self) -> Option<Message> {
        match self {
            FormatError::EmptyBuilder => None,
            FormatError::UnresolvedSymbol { message }
            | FormatError::MissingTranslation { message, .. } => Some(*message),
        }
    }
}
