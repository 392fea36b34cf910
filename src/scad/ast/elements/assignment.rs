//! Assignment element definition

use super::super::error::AstError;
use super::super::fragment::Fragment;
use super::super::node::{Node, NodeKind};
use super::expect_kind;

/// `identifier = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    identifier: Box<Node>,
    value: Box<Node>,
    pub(crate) fragment: Fragment,
}

impl Assignment {
    pub fn new(identifier: Node, value: Node) -> Result<Self, AstError> {
        let identifier = expect_kind("assignment", "identifier", identifier, NodeKind::Identifier)?;
        Ok(Self {
            identifier: Box::new(identifier),
            value: Box::new(value),
            fragment: Fragment::new(),
        })
    }

    pub fn identifier(&self) -> &Node {
        &self.identifier
    }

    /// The identifier's name
    pub fn name(&self) -> &str {
        match self.identifier.as_ref() {
            Node::Identifier(literal) => literal.value(),
            _ => "",
        }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_identifier() {
        let assignment = Assignment::new(Node::identifier("foo"), Node::number(42.0)).unwrap();
        assert_eq!(assignment.name(), "foo");
        assert_eq!(assignment.value(), &Node::number(42.0));
    }

    #[test]
    fn test_rejects_non_identifier() {
        let err = Assignment::new(Node::string("foo"), Node::number(42.0)).unwrap_err();
        assert!(matches!(
            err,
            AstError::InvalidChildType {
                kind: "assignment",
                ..
            }
        ));
    }
}
