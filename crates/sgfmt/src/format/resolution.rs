//! How a format builder turns messages into text.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::format::FormatError;
use crate::translation::LanguageResolver;
use crate::types::Message;

/// A consumer-supplied message resolution function.
pub type ResolveFn = dyn Fn(Message) -> Result<String, FormatError> + Send + Sync;

/// The message resolution strategy of a [`FormatBuilder`](crate::FormatBuilder).
///
/// Literals and sequences render the same way under every strategy; only
/// [`Value::Symbol`](crate::Value::Symbol) consults it.
///
/// # Example
///
/// ```
/// use sgfmt::{FormatBuilder, Message, Resolution, Value};
///
/// let builder = FormatBuilder::builder()
///     .value(vec![Value::from(Message::Prefix), "ready".into()])
///     .delimiter("")
///     .resolution(Resolution::custom(|message| Ok(format!("<{message}>"))))
///     .build();
///
/// assert_eq!(builder.render().unwrap(), "<prefix>ready");
/// ```
#[derive(Clone, Default)]
pub enum Resolution {
    /// No strategy: every message fails with
    /// [`FormatError::UnresolvedSymbol`].
    #[default]
    Unresolved,

    /// A consumer function decides what each message means.
    Custom(Arc<ResolveFn>),

    /// Messages are looked up in translation tables.
    Translated(LanguageResolver),
}

impl Resolution {
    /// Resolve messages with `f`.
    pub fn custom(
        f: impl Fn(Message) -> Result<String, FormatError> + Send + Sync + 'static,
    ) -> Resolution {
        Resolution::Custom(Arc::new(f))
    }

    /// Resolve messages through the process-wide translation store.
    pub fn translated() -> Resolution {
        Resolution::Translated(LanguageResolver::global())
    }
}

impl From<LanguageResolver> for Resolution {
    fn from(resolver: LanguageResolver) -> Self {
        Resolution::Translated(resolver)
    }
}

impl Debug for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Resolution::Unresolved => f.write_str("Unresolved"),
            Resolution::Custom(_) => f.write_str("Custom(..)"),
            Resolution::Translated(resolver) => f.debug_tuple("Translated").field(resolver).finish(),
        }
    }
}
