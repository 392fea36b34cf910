//! Use and include statement definition
//!
//! Both statements wrap a single path literal.

use super::super::error::AstError;
use super::super::fragment::Fragment;
use super::super::node::{Node, NodeKind};
use super::expect_kind;

#[derive(Debug, Clone, PartialEq)]
pub struct PathStatement {
    path: Box<Node>,
    pub(crate) fragment: Fragment,
}

impl PathStatement {
    /// `kind` names the owning statement in validation errors
    pub fn new(kind: &'static str, path: Node) -> Result<Self, AstError> {
        let path = expect_kind(kind, "path", path, NodeKind::Path)?;
        Ok(Self {
            path: Box::new(path),
            fragment: Fragment::new(),
        })
    }

    pub fn path(&self) -> &Node {
        &self.path
    }

    /// The referenced path text
    pub fn target(&self) -> &str {
        match self.path.as_ref() {
            Node::Path(literal) => literal.value(),
            _ => "",
        }
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_path_literal() {
        let statement = PathStatement::new("use", Node::path("lib/shapes.scad")).unwrap();
        assert_eq!(statement.target(), "lib/shapes.scad");

        let err = PathStatement::new("include", Node::string("lib/shapes.scad")).unwrap_err();
        assert!(matches!(
            err,
            AstError::InvalidChildType {
                kind: "include",
                expected: "a path node",
                ..
            }
        ));
    }
}
