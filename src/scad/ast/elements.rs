//! Element definitions for every node kind
//!
//! Each element validates its embedded children at construction. The helpers here check
//! loosely-typed fields for the node shapes elements require.

pub mod assignment;
pub mod block;
pub mod comment;
pub mod literal;
pub mod operator;
pub mod statement;

pub use assignment::Assignment;
pub use block::Block;
pub use comment::{Comment, CommentText};
pub use literal::{Literal, LiteralValue};
pub use operator::{BinaryOperator, UnaryOperator};
pub use statement::PathStatement;

use super::error::AstError;
use super::fields::Field;
use super::node::{Node, NodeKind};

/// Require a field to hold a node
pub(crate) fn expect_node(
    kind: &'static str,
    field: &str,
    value: Field,
) -> Result<Node, AstError> {
    match value {
        Field::Node(node) => Ok(node),
        other => Err(AstError::InvalidChildType {
            kind,
            field: field.to_string(),
            expected: "a node",
            found: other.describe(),
        }),
    }
}

/// Require a node to be of one specific kind
pub(crate) fn expect_kind(
    kind: &'static str,
    field: &str,
    node: Node,
    required: NodeKind,
) -> Result<Node, AstError> {
    if node.kind() == required {
        Ok(node)
    } else {
        Err(AstError::InvalidChildType {
            kind,
            field: field.to_string(),
            expected: required.article_name(),
            found: format!("{} node", node.kind()),
        })
    }
}

/// Require a field to hold text
pub(crate) fn expect_text(
    kind: &'static str,
    field: &str,
    value: Field,
) -> Result<String, AstError> {
    match value {
        Field::Text(text) => Ok(text),
        other => Err(AstError::InvalidChildType {
            kind,
            field: field.to_string(),
            expected: "a string",
            found: other.describe(),
        }),
    }
}
