//! Match-result canonicalization
//!
//! Grammar rules hand back irregular nesting: choice productions wrap their pick in a
//! one-element group, optional productions leave absent slots, repetitions nest sequences.
//! [`flatten`] strips all of that down to the real elements (tokens and built nodes), and
//! [`canonicalize`] then recognises one of the fixed operator shapes.
//!
//! ```text
//! [[left], [[op]], right]  →  flatten  →  [left, op, right]  →  Shape::Binary
//! ```

use super::data::{Data, Token};
use crate::scad::ast::{AstError, Node};

/// A real element of a match-result
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Token(Token),
    Node(Node),
}

impl Element {
    pub fn describe(&self) -> String {
        match self {
            Element::Token(token) => format!("token {:?}", token.value),
            Element::Node(node) => format!("{} node", node.kind()),
        }
    }

    /// Whether this is the token with exactly this value
    pub fn is_token(&self, value: &str) -> bool {
        matches!(self, Element::Token(token) if token.value == value)
    }
}

impl From<Element> for Data {
    fn from(element: Element) -> Self {
        match element {
            Element::Token(token) => Data::Token(token),
            Element::Node(node) => Data::Node(node),
        }
    }
}

/// The fixed shapes an operator rule reduces to
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    NoOperand,
    AlreadyBuilt(Node),
    Unary {
        operator: Token,
        operand: Node,
    },
    Binary {
        left: Node,
        operator: Token,
        right: Node,
    },
}

/// Deep-flatten a match-result into its tokens and nodes, dropping absent slots
pub fn flatten(data: Data) -> Vec<Element> {
    let mut elements = Vec::new();
    collect(data, &mut elements);
    elements
}

fn collect(data: Data, elements: &mut Vec<Element>) {
    match data {
        Data::Absent => {}
        Data::Token(token) => elements.push(Element::Token(token)),
        Data::Node(node) => elements.push(Element::Node(node)),
        Data::Seq(items) => {
            for item in items {
                collect(item, elements);
            }
        }
    }
}

/// Reduce a match-result to one of the operator shapes
///
/// By flattened length: none is [`Shape::NoOperand`], one node is [`Shape::AlreadyBuilt`],
/// `[operator, operand]` is [`Shape::Unary`] and `[left, operator, right]` is
/// [`Shape::Binary`]. Anything else fails with [`AstError::UnexpectedShape`].
pub fn canonicalize(data: Data) -> Result<Shape, AstError> {
    let elements = flatten(data);
    match elements.len() {
        0 => Ok(Shape::NoOperand),
        1 => match into_array::<1>(elements)? {
            [Element::Node(node)] => Ok(Shape::AlreadyBuilt(node)),
            other => Err(unexpected("a built node", &other)),
        },
        2 => match into_array::<2>(elements)? {
            [Element::Token(operator), Element::Node(operand)] => {
                Ok(Shape::Unary { operator, operand })
            }
            other => Err(unexpected("an operator token then an operand", &other)),
        },
        3 => match into_array::<3>(elements)? {
            [Element::Node(left), Element::Token(operator), Element::Node(right)] => {
                Ok(Shape::Binary {
                    left,
                    operator,
                    right,
                })
            }
            other => Err(unexpected("an operand, an operator token, an operand", &other)),
        },
        _ => Err(unexpected("at most three elements", &elements)),
    }
}

/// Move exactly `N` elements into an array
pub(crate) fn into_array<const N: usize>(
    elements: Vec<Element>,
) -> Result<[Element; N], AstError> {
    elements
        .try_into()
        .map_err(|elements: Vec<Element>| unexpected("a fixed number of elements", &elements))
}

pub(crate) fn unexpected(expected: &'static str, elements: &[Element]) -> AstError {
    AstError::UnexpectedShape {
        expected,
        found: format!(
            "[{}]",
            elements
                .iter()
                .map(Element::describe)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
