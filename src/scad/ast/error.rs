//! Construction and validation errors for AST nodes
//!
//! Every failure raised while building or copying a node is an [`AstError`]. Errors are
//! raised before any field is assigned, so a failed construction never yields a node.

use std::fmt;

/// Error raised when a node, field or position fails validation
#[derive(Debug, Clone, PartialEq)]
pub enum AstError {
    /// A line, column or offset is out of range or not an integer
    InvalidCoordinate { field: &'static str, value: String },
    /// A `start`/`end` override is not a position
    InvalidPosition { field: String, found: String },
    /// A write-once field was assigned a second time
    FieldAlreadySet(String),
    /// An endpoint was copied from something that is not a placed fragment
    ExpectedFragment(String),
    /// An embedded child is not of the node kind the parent requires
    InvalidChildType {
        kind: &'static str,
        field: String,
        expected: &'static str,
        found: String,
    },
    /// A boolean literal was neither a boolean nor the text "true"/"false"
    InvalidBoolean(String),
    /// A kind name did not resolve to any registered constructor
    UnknownNodeKind(String),
    /// The supplied constructor cannot build a node from a single token
    InvalidConstructor(String),
    /// More than one candidate where exactly one is required
    AmbiguousForward(usize),
    /// A kind was constructed without one of its declared fields
    MissingField { kind: &'static str, field: &'static str },
    /// An override named a field the kind does not declare
    UnknownField { kind: &'static str, field: String },
    /// A match-result did not reduce to any recognised shape
    UnexpectedShape { expected: &'static str, found: String },
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstError::InvalidCoordinate { field, value } => {
                write!(f, "Invalid {field} coordinate: {value}")
            }
            AstError::InvalidPosition { field, found } => {
                write!(f, "Field '{field}' expects a position, found {found}")
            }
            AstError::FieldAlreadySet(name) => write!(f, "Field '{name}' is already set"),
            AstError::ExpectedFragment(found) => {
                write!(f, "Expected a placed fragment, found {found}")
            }
            AstError::InvalidChildType {
                kind,
                field,
                expected,
                found,
            } => write!(
                f,
                "Field '{field}' of {kind} expects {expected}, found {found}"
            ),
            AstError::InvalidBoolean(found) => write!(f, "Invalid boolean literal: {found}"),
            AstError::UnknownNodeKind(name) => write!(f, "Unknown node kind '{name}'"),
            AstError::InvalidConstructor(name) => {
                write!(f, "'{name}' cannot be built from a terminal token")
            }
            AstError::AmbiguousForward(count) => {
                write!(f, "Expected at most one element to forward, found {count}")
            }
            AstError::MissingField { kind, field } => {
                write!(f, "Missing field '{field}' for {kind}")
            }
            AstError::UnknownField { kind, field } => {
                write!(f, "{kind} has no field '{field}'")
            }
            AstError::UnexpectedShape { expected, found } => {
                write!(f, "Expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for AstError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AstError::FieldAlreadySet("value".to_string()).to_string(),
            "Field 'value' is already set"
        );
        assert_eq!(
            AstError::AmbiguousForward(3).to_string(),
            "Expected at most one element to forward, found 3"
        );
        assert_eq!(
            AstError::InvalidCoordinate {
                field: "line",
                value: "0".to_string()
            }
            .to_string(),
            "Invalid line coordinate: 0"
        );
    }
}
