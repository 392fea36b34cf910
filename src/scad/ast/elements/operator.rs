//! Operator element definitions

use super::super::fragment::Fragment;
use super::super::node::Node;

/// `left operator right`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperator {
    operator: String,
    left: Box<Node>,
    right: Box<Node>,
    pub(crate) fragment: Fragment,
}

impl BinaryOperator {
    pub fn new(left: Node, operator: impl Into<String>, right: Node) -> Self {
        Self {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
            fragment: Fragment::new(),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}

/// `operator value`
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperator {
    operator: String,
    value: Box<Node>,
    pub(crate) fragment: Fragment,
}

impl UnaryOperator {
    pub fn new(operator: impl Into<String>, value: Node) -> Self {
        Self {
            operator: operator.into(),
            value: Box::new(value),
            fragment: Fragment::new(),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> &Node {
        &self.value
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}
