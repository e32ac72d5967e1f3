mod language;
mod message;
mod value;

pub use language::{Language, LanguageError};
pub use message::{Message, UnknownMessage};
pub use value::Value;
