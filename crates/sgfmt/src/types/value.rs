use std::fmt::Display;
use std::mem;

use super::Message;

/// The payload a [`FormatBuilder`](crate::FormatBuilder) renders.
///
/// A value is literal text, a translatable message, or an ordered sequence of
/// further values. Anything printable becomes a literal through its
/// `Display` output, so callers rarely build variants by hand.
///
/// # Example
///
/// ```
/// use sgfmt::{Message, Value};
///
/// // Strings and numbers become Value::Literal
/// let name: Value = "Alice".into();
/// let cost: Value = 42.into();
///
/// // Messages become Value::Symbol
/// let deny: Value = Message::Deny.into();
///
/// // Vectors become Value::Sequence
/// let all: Value = vec![name, cost, deny].into();
/// assert_eq!(all.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text used as-is.
    Literal(String),

    /// A message resolved at render time.
    Symbol(Message),

    /// Elements rendered in order and joined with the builder's delimiter.
    Sequence(Vec<Value>),
}

impl Value {
    /// Create a literal from anything printable.
    pub fn display(value: impl Display) -> Value {
        Value::Literal(value.to_string())
    }

    /// Create a sequence from anything convertible to values.
    pub fn sequence<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Value {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }

    /// Get this value as literal text, if it is one.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(text) => Some(text),
            _ => None,
        }
    }

    /// Get this value as a message, if it is one.
    pub fn as_symbol(&self) -> Option<Message> {
        match self {
            Value::Symbol(message) => Some(*message),
            _ => None,
        }
    }

    /// Get the elements of this value, if it is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Number of elements in a sequence; 1 for anything else.
    pub fn len(&self) -> usize {
        match self {
            Value::Sequence(values) => values.len(),
            _ => 1,
        }
    }

    /// True only for a sequence with no elements.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Sequence(values) if values.is_empty())
    }

    /// Every message referenced anywhere in this value, in render order.
    pub fn symbols(&self) -> Vec<Message> {
        let mut found = Vec::new();
        let mut pending = vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Value::Literal(_) => {}
                Value::Symbol(message) => found.push(*message),
                Value::Sequence(values) => pending.extend(values.iter().rev()),
            }
        }
        found
    }
}

// Deeply nested sequences are torn down with a work list instead of the
// call stack.
impl Drop for Value {
    fn drop(&mut self) {
        let Value::Sequence(values) = self else {
            return;
        };
        if !values.iter().any(|value| matches!(value, Value::Sequence(_))) {
            return;
        }
        let mut pending = mem::take(values);
        while let Some(mut value) = pending.pop() {
            if let Value::Sequence(children) = &mut value {
                pending.append(children);
            }
        }
    }
}

// From implementations for common types

macro_rules! literal_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Literal(value.to_string())
                }
            }
        )+
    };
}

literal_from!(&str, &String, char, bool, i32, i64, u32, u64, usize, f32, f64);

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Literal(s)
    }
}

impl From<Message> for Value {
    fn from(message: Message) -> Self {
        Value::Symbol(message)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::sequence(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::sequence(values)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::sequence(iter)
    }
}
