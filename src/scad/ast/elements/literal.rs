//! Literal element definition
//!
//! A literal is a fragment wrapping one scalar. The scalar type follows from the node kind,
//! and every kind has its own coercion from a loosely-typed [`Field`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::error::AstError;
use super::super::fields::Field;
use super::super::fragment::Fragment;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(Infinity|[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Structural equality for literal values
///
/// Numbers compare by value except that every `NaN` equals every other `NaN`, so a number
/// node holding `NaN` still equals its own copy.
pub trait LiteralValue {
    fn same_value(&self, other: &Self) -> bool;
}

impl LiteralValue for f64 {
    fn same_value(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }
}

impl LiteralValue for String {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl LiteralValue for bool {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl LiteralValue for () {
    fn same_value(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct Literal<T> {
    value: T,
    pub(crate) fragment: Fragment,
}

impl<T> Literal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            fragment: Fragment::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}

impl<T: LiteralValue> PartialEq for Literal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value.same_value(&other.value) && self.fragment == other.fragment
    }
}

/// Parse the leading numeric text of a field
///
/// Mirrors a general floating-point prefix parse: trailing garbage is ignored, and input
/// with no numeric prefix yields `NaN` instead of failing.
pub fn coerce_number(field: &Field) -> f64 {
    match field {
        Field::Number(value) => *value,
        Field::Bool(value) => f64::from(u8::from(*value)),
        Field::Text(text) => parse_numeric_prefix(text),
        _ => f64::NAN,
    }
}

fn parse_numeric_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let Some(found) = NUMERIC_PREFIX.find(trimmed) else {
        return f64::NAN;
    };
    let digits = found.as_str();
    match digits.trim_start_matches(['+', '-']) {
        "Infinity" if digits.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => digits.parse().unwrap_or(f64::NAN),
    }
}

/// Coerce any field to text
pub fn coerce_text(field: &Field) -> String {
    match field {
        Field::Null => "null".to_string(),
        Field::Bool(value) => value.to_string(),
        Field::Number(value) => value.to_string(),
        Field::Text(text) => text.clone(),
        Field::List(items) => items.iter().map(coerce_text).collect::<Vec<_>>().join(","),
        Field::Node(node) => node.kind().to_string(),
        Field::Position(_) => "position".to_string(),
    }
}

/// Accept a boolean, or exactly the text "true" or "false"
pub fn coerce_boolean(field: &Field) -> Result<bool, AstError> {
    match field {
        Field::Bool(value) => Ok(*value),
        Field::Text(text) if text == "true" => Ok(true),
        Field::Text(text) if text == "false" => Ok(false),
        other => Err(AstError::InvalidBoolean(other.describe())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_parses_leading_numeric_text() {
        assert_eq!(coerce_number(&Field::from("42")), 42.0);
        assert_eq!(coerce_number(&Field::from("  3.5e2mm")), 350.0);
        assert_eq!(coerce_number(&Field::from(".5")), 0.5);
        assert_eq!(coerce_number(&Field::from("-Infinity")), f64::NEG_INFINITY);
        assert_eq!(coerce_number(&Field::Number(7.0)), 7.0);
    }

    #[test]
    fn test_number_without_prefix_is_nan() {
        assert!(coerce_number(&Field::from("abc")).is_nan());
        assert!(coerce_number(&Field::from("")).is_nan());
        assert!(coerce_number(&Field::Null).is_nan());
    }

    #[test]
    fn test_nan_literals_are_equal() {
        assert_eq!(Literal::new(f64::NAN), Literal::new(coerce_number(&Field::from("abc"))));
        assert_eq!(Literal::new(0.0), Literal::new(-0.0));
        assert_ne!(Literal::new(f64::NAN), Literal::new(1.0));
        assert_ne!(Literal::new(1.0), Literal::new(2.0));
    }

    #[test]
    fn test_boolean_accepts_exact_text() {
        assert_eq!(coerce_boolean(&Field::from("true")), Ok(true));
        assert_eq!(coerce_boolean(&Field::from("false")), Ok(false));
        assert_eq!(coerce_boolean(&Field::Bool(true)), Ok(true));
    }

    #[test]
    fn test_boolean_rejects_everything_else() {
        for field in [
            Field::from(""),
            Field::from("foo"),
            Field::from("True"),
            Field::Number(1.0),
            Field::Null,
        ] {
            assert!(matches!(
                coerce_boolean(&field),
                Err(AstError::InvalidBoolean(_))
            ));
        }
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(coerce_text(&Field::Number(42.0)), "42");
        assert_eq!(coerce_text(&Field::Bool(false)), "false");
        assert_eq!(coerce_text(&Field::from("foo")), "foo");
    }
}
