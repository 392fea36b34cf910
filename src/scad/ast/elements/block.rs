//! Block element definition

use super::super::fragment::Fragment;
use super::super::node::Node;

/// An ordered list of statements
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    statements: Vec<Node>,
    pub(crate) fragment: Fragment,
}

impl Block {
    pub fn new(statements: Vec<Node>) -> Self {
        Self {
            statements,
            fragment: Fragment::new(),
        }
    }

    pub fn statements(&self) -> &[Node] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}
