pub mod config;
pub mod format;
pub mod global;
pub mod parser;
pub mod translation;
pub mod types;

pub use config::LanguageConfig;
pub use format::{DEFAULT_DELIMITER, FormatBuilder, FormatError, Resolution};
pub use translation::{
    LanguageResolver, LoadError, LoadWarning, Loaded, TranslationResolver, TranslationSnapshot,
    TranslationStore, TranslationTable, compute_suggestions, translate,
};
pub use types::{Language, LanguageError, Message, UnknownMessage, Value};

/// Creates a [`Value::Sequence`] from a list of values.
///
/// Elements are converted via `Into<Value>`, so literals, numbers, messages
/// and nested sequences can be mixed freely.
///
/// # Example
///
/// ```
/// use sgfmt::{values, FormatBuilder, Message, Value};
///
/// let value = values!["cost", 5, Message::EconomyDeduct];
/// assert_eq!(value.len(), 3);
/// assert_eq!(value.as_sequence().unwrap()[2], Value::Symbol(Message::EconomyDeduct));
///
/// let nested = values![values!["a", "b"], "c"];
/// assert_eq!(FormatBuilder::from_value(nested).render().unwrap(), "a,b,c");
/// ```
#[macro_export]
macro_rules! values {
    [] => {
        $crate::Value::Sequence(::std::vec::Vec::new())
    };
    [ $($value:expr),+ $(,)? ] => {
        $crate::Value::Sequence(::std::vec![
            $( ::std::convert::Into::<$crate::Value>::into($value) ),+
        ])
    };
}
