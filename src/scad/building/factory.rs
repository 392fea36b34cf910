//! Node factory
//!
//! The one place where node kinds are looked up by name. Builders mostly work with
//! [`NodeKind`] directly; names only arrive from the engine side, and are translated into a
//! kind immediately through the [`NodeRegistry`].
//!
//! Also home to the two reduction helpers every builder leans on: [`terminal`] promotes a
//! token to a placed node, and [`forward`] passes a single element through.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::data::{Data, Token};
use crate::scad::ast::{AstError, Field, Fields, Node, NodeKind};

static REGISTRY: Lazy<NodeRegistry> = Lazy::new(NodeRegistry::with_defaults);

/// The shared registry of node constructors
pub fn registry() -> &'static NodeRegistry {
    &REGISTRY
}

/// Maps kind names to node constructors
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    constructors: HashMap<String, NodeKind>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        NodeRegistry {
            constructors: HashMap::new(),
        }
    }

    /// Register a kind under a name
    ///
    /// If the name is already registered, it will be replaced.
    pub fn register(&mut self, name: impl Into<String>, kind: NodeKind) {
        self.constructors.insert(name.into(), kind);
    }

    pub fn resolve(&self, name: &str) -> Result<NodeKind, AstError> {
        self.constructors
            .get(name)
            .copied()
            .ok_or_else(|| AstError::UnknownNodeKind(name.to_string()))
    }

    /// Build a node from a kind name and a field bag
    pub fn construct(&self, name: &str, fields: Fields) -> Result<Node, AstError> {
        construct(self.resolve(name)?, fields)
    }

    /// All registered names (sorted)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.constructors.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    /// Create a registry with every node kind under its serialized name
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in NodeKind::ALL {
            registry.register(kind.name(), kind);
        }
        registry
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// How a caller names the node it wants built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constructor<'a> {
    Named(&'a str),
    Kind(NodeKind),
}

impl<'a> From<&'a str> for Constructor<'a> {
    fn from(name: &'a str) -> Self {
        Constructor::Named(name)
    }
}

impl From<NodeKind> for Constructor<'_> {
    fn from(kind: NodeKind) -> Self {
        Constructor::Kind(kind)
    }
}

/// Build a node of `kind`, validating every field
pub fn construct(kind: NodeKind, fields: Fields) -> Result<Node, AstError> {
    Node::from_fields(kind, fields)
}

/// Build a terminal node from a token
///
/// The node is built from `value`, then starts at the token and ends just past the token's
/// raw text (see [`Position::advanced_past`](crate::scad::ast::Position::advanced_past)).
pub fn terminal<'a>(
    token: &Token,
    value: impl Into<Field>,
    constructor: impl Into<Constructor<'a>>,
) -> Result<Node, AstError> {
    let kind = match constructor.into() {
        Constructor::Named(name) => registry().resolve(name)?,
        Constructor::Kind(kind) => kind,
    };
    if !kind.is_terminal() {
        return Err(AstError::InvalidConstructor(kind.name().to_string()));
    }

    let start = token.position()?;
    let end = token.end_position()?;
    construct(kind, Fields::new().with("value", value)?)?
        .start_at(start)?
        .end_at(end)
}

/// Pass a single element through
///
/// A sequence yields its sole element, or nothing when empty, and fails when it holds more
/// than one. Anything that is not a sequence is returned unchanged.
pub fn forward(data: Data) -> Result<Data, AstError> {
    match data {
        Data::Seq(mut items) => match items.len() {
            0 => Ok(Data::Absent),
            1 => Ok(items.remove(0)),
            count => Err(AstError::AmbiguousForward(count)),
        },
        other => Ok(other),
    }
}

/// Drop a match-result entirely
pub fn discard(_data: Data) -> Data {
    Data::Absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scad::ast::Position;

    fn pos(line: usize, column: usize, offset: usize) -> Position {
        Position::new(line, column, offset).unwrap()
    }

    #[test]
    fn test_terminal_stamps_positions() {
        let token = Token::new("foo", 2, 7, 12);
        let node = terminal(&token, "foo", "identifier").unwrap();
        assert_eq!(node.kind(), NodeKind::Identifier);
        assert_eq!(node.start(), Some(pos(2, 7, 12)));
        assert_eq!(node.end(), Some(pos(2, 10, 15)));
    }

    #[test]
    fn test_terminal_multi_line_token() {
        let token = Token::new("\nfoo\nbar", 2, 7, 12);
        let node = terminal(&token, "\nfoo\nbar", NodeKind::BlockComment).unwrap();
        assert_eq!(node.end(), Some(pos(4, 4, 20)));
    }

    #[test]
    fn test_terminal_unknown_name() {
        let token = Token::new("1", 1, 1, 0);
        assert_eq!(
            terminal(&token, "1", "Numbr"),
            Err(AstError::UnknownNodeKind("Numbr".to_string()))
        );
    }

    #[test]
    fn test_terminal_rejects_structural_kind() {
        let token = Token::new("x", 1, 1, 0);
        assert_eq!(
            terminal(&token, "x", NodeKind::Assignment),
            Err(AstError::InvalidConstructor("assignment".to_string()))
        );
        assert!(matches!(
            terminal(&token, "x", "block"),
            Err(AstError::InvalidConstructor(_))
        ));
    }

    #[test]
    fn test_terminal_propagates_value_errors() {
        let token = Token::new("maybe", 1, 1, 0);
        assert!(matches!(
            terminal(&token, "maybe", NodeKind::Boolean),
            Err(AstError::InvalidBoolean(_))
        ));
    }

    #[test]
    fn test_forward() {
        let node = Data::Node(Node::number(1.0));
        assert_eq!(forward(Data::Seq(vec![node.clone()])), Ok(node.clone()));
        assert_eq!(forward(Data::Seq(vec![])), Ok(Data::Absent));
        assert_eq!(forward(node.clone()), Ok(node.clone()));
        assert_eq!(
            forward(Data::Seq(vec![node.clone(), node])),
            Err(AstError::AmbiguousForward(2))
        );
    }

    #[test]
    fn test_discard() {
        assert_eq!(discard(Data::Node(Node::number(1.0))), Data::Absent);
    }

    #[test]
    fn test_registry_names() {
        let registry = NodeRegistry::with_defaults();
        assert_eq!(registry.names().len(), NodeKind::ALL.len());
        assert_eq!(registry.resolve("use"), Ok(NodeKind::Use));

        let mut custom = NodeRegistry::new();
        custom.register("Number", NodeKind::Number);
        let node = custom
            .construct("Number", Fields::new().with("value", "7").unwrap())
            .unwrap();
        assert_eq!(node, Node::number(7.0));
    }
}
