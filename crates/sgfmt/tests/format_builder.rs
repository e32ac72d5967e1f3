//! Integration tests for rendering values with a FormatBuilder.

use sgfmt::{DEFAULT_DELIMITER, FormatBuilder, FormatError, Message, Resolution, Value, values};

fn shouting() -> Resolution {
    Resolution::custom(|message| Ok(message.key().to_uppercase()))
}

// =========================================================================
// Literals
// =========================================================================

#[test]
fn literal_renders_unchanged() {
    for text in ["", "plain", "  padded  ", "with,comma", "Привет"] {
        assert_eq!(FormatBuilder::from_value(text).render().unwrap(), text);
    }
}

#[test]
fn printable_types_render_as_their_display_form() {
    assert_eq!(FormatBuilder::from_value(42).render().unwrap(), "42");
    assert_eq!(FormatBuilder::from_value(-7i64).render().unwrap(), "-7");
    assert_eq!(FormatBuilder::from_value(2.5).render().unwrap(), "2.5");
    assert_eq!(FormatBuilder::from_value(true).render().unwrap(), "true");
    assert_eq!(FormatBuilder::from_value('x').render().unwrap(), "x");
    assert_eq!(
        FormatBuilder::from_value(Value::display(std::path::Path::new("a/b").display()))
            .render()
            .unwrap(),
        "a/b"
    );
}

// =========================================================================
// Sequences
// =========================================================================

#[test]
fn default_delimiter_is_comma() {
    assert_eq!(DEFAULT_DELIMITER, ",");
    let builder = FormatBuilder::from_value(["a", "b", "c"]);
    assert_eq!(builder.delimiter(), ",");
    assert_eq!(builder.render().unwrap(), "a,b,c");
}

#[test]
fn sequence_joins_rendered_elements_in_order() {
    let builder = FormatBuilder::with_delimiter(values!["c", "a", "b"], " - ");
    assert_eq!(builder.render().unwrap(), "c - a - b");
}

#[test]
fn sequence_matches_manual_concatenation() {
    let (a, b, c) = (Value::from("x"), Value::from(Message::Deny), Value::from(3));
    let delimiter = "::";
    let render_one = |value: &Value| {
        FormatBuilder::builder()
            .value(value.clone())
            .resolution(shouting())
            .build()
            .render()
            .unwrap()
    };
    let expected = [render_one(&a), render_one(&b), render_one(&c)].join(delimiter);

    let builder = FormatBuilder::builder()
        .value(vec![a, b, c])
        .delimiter(delimiter)
        .resolution(shouting())
        .build();
    assert_eq!(builder.render().unwrap(), expected);
    assert_eq!(expected, "x::DENYMSG::3");
}

#[test]
fn nested_sequences_flatten() {
    let builder = FormatBuilder::with_delimiter(values![values!["a", "b"], "c"], "/");
    assert_eq!(builder.render().unwrap(), "a/b/c");

    let deep = values![values![values![values!["a"], "b"]], values!["c", values!["d"]]];
    assert_eq!(FormatBuilder::from_value(deep).render().unwrap(), "a,b,c,d");
}

#[test]
fn very_deep_nesting_renders_and_drops() {
    let mut value = Value::from(Message::Prefix);
    for depth in 0..100_000 {
        value = if depth % 2 == 0 {
            Value::Sequence(vec![value])
        } else {
            Value::Sequence(vec![value, Value::from("x")])
        };
    }
    assert_eq!(value.symbols(), vec![Message::Prefix]);

    let builder = FormatBuilder::builder()
        .value(value)
        .delimiter("")
        .resolution(shouting())
        .build();
    let rendered = builder.render().unwrap();
    assert!(rendered.starts_with("PREFIXx"));
    assert_eq!(rendered.len(), "PREFIX".len() + 50_000);
}

#[test]
fn empty_sequence_renders_empty_string() {
    assert_eq!(FormatBuilder::from_value(values![]).render().unwrap(), "");
    assert_eq!(
        FormatBuilder::from_value(values!["a", values![], "b"]).render().unwrap(),
        "a,,b"
    );
}

#[test]
fn collected_iterator_becomes_sequence() {
    let value: Value = (1..=3).collect();
    assert_eq!(FormatBuilder::with_delimiter(value, "+").render().unwrap(), "1+2+3");
}

// =========================================================================
// Symbols and resolution strategies
// =========================================================================

#[test]
fn symbol_without_resolver_is_unresolved() {
    let err = FormatBuilder::from_value(Message::Teleport).render().unwrap_err();
    assert_eq!(
        err,
        FormatError::UnresolvedSymbol {
            message: Message::Teleport
        }
    );
    assert_eq!(err.message(), Some(Message::Teleport));
}

#[test]
fn unresolved_symbol_inside_sequence_fails_whole_render() {
    let err = FormatBuilder::from_value(values!["ok", values![Message::Destroy]])
        .render()
        .unwrap_err();
    assert!(matches!(err, FormatError::UnresolvedSymbol { message: Message::Destroy }));
}

#[test]
fn literal_only_values_need_no_resolver() {
    let builder = FormatBuilder::from_value(values!["no", "symbols"]);
    assert!(matches!(builder.resolution(), Resolution::Unresolved));
    assert_eq!(builder.render().unwrap(), "no,symbols");
}

#[test]
fn custom_resolver_is_consulted_for_every_symbol() {
    let builder = FormatBuilder::builder()
        .value(values![Message::Prefix, "then", values![Message::Reloaded]])
        .delimiter(" ")
        .resolution(shouting())
        .build();
    assert_eq!(builder.render().unwrap(), "PREFIX then RELOADED");
}

#[test]
fn custom_resolver_errors_propagate() {
    let builder = FormatBuilder::builder()
        .value(values!["a", Message::Blocked])
        .resolution(Resolution::custom(|message| {
            Err(FormatError::UnresolvedSymbol { message })
        }))
        .build();
    assert_eq!(
        builder.render(),
        Err(FormatError::UnresolvedSymbol {
            message: Message::Blocked
        })
    );
}

// =========================================================================
// Empty builders and programmatic filling
// =========================================================================

#[test]
fn empty_builder_fails_with_empty_builder() {
    let builder = FormatBuilder::new();
    assert!(!builder.has_value());
    assert_eq!(builder.render(), Err(FormatError::EmptyBuilder));
    assert_eq!(FormatError::EmptyBuilder.message(), None);
}

#[test]
fn empty_builder_renders_after_value_is_set() {
    let mut builder = FormatBuilder::new();
    builder.set_value(values!["late", "value"]);
    assert_eq!(builder.render().unwrap(), "late,value");
}

#[test]
fn push_extends_existing_sequence() {
    let mut builder = FormatBuilder::with_delimiter(values!["a"], " ");
    builder.push("b");
    builder.push(values!["c", "d"]);
    assert_eq!(builder.render().unwrap(), "a b c d");
}

// =========================================================================
// Purity
// =========================================================================

#[test]
fn render_is_idempotent() {
    let builder = FormatBuilder::builder()
        .value(values![Message::Create, "gate", 7])
        .resolution(shouting())
        .build();
    let first = builder.render().unwrap();
    let second = builder.render().unwrap();
    assert_eq!(first, second);
    assert_eq!(builder.value().unwrap().len(), 3);
}

#[test]
fn clones_render_identically_and_independently() {
    let original = FormatBuilder::with_delimiter(values!["a", "b"], ";");
    let mut copy = original.clone();
    copy.push("c");
    assert_eq!(original.render().unwrap(), "a;b");
    assert_eq!(copy.render().unwrap(), "a;b;c");
}
