//! The node sum type
//!
//! [`Node`] is a closed tagged union over every node kind. Nodes are immutable once built:
//! endpoints are placed through consuming, write-once methods, and the only way to change a
//! field is [`Node::copy_with`], which builds a new node through the same validation as
//! construction.

use std::fmt;
use std::str::FromStr;

use super::elements::{
    expect_node, expect_text, literal, Assignment, BinaryOperator, Block, Comment, Literal,
    PathStatement, UnaryOperator,
};
use super::error::AstError;
use super::fields::{Field, Fields};
use super::fragment::Fragment;
use super::position::Position;

/// Discriminant of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Number,
    String,
    Path,
    Boolean,
    Identifier,
    Undefined,
    LineComment,
    BlockComment,
    Assignment,
    Block,
    BinaryOperator,
    UnaryOperator,
    Use,
    Include,
}

impl NodeKind {
    pub const ALL: [NodeKind; 14] = [
        NodeKind::Number,
        NodeKind::String,
        NodeKind::Path,
        NodeKind::Boolean,
        NodeKind::Identifier,
        NodeKind::Undefined,
        NodeKind::LineComment,
        NodeKind::BlockComment,
        NodeKind::Assignment,
        NodeKind::Block,
        NodeKind::BinaryOperator,
        NodeKind::UnaryOperator,
        NodeKind::Use,
        NodeKind::Include,
    ];

    /// Serialized `type` name
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Path => "path",
            NodeKind::Boolean => "boolean",
            NodeKind::Identifier => "identifier",
            NodeKind::Undefined => "undefined",
            NodeKind::LineComment => "line_comment",
            NodeKind::BlockComment => "block_comment",
            NodeKind::Assignment => "assignment",
            NodeKind::Block => "block",
            NodeKind::BinaryOperator => "binary_operator",
            NodeKind::UnaryOperator => "unary_operator",
            NodeKind::Use => "use",
            NodeKind::Include => "include",
        }
    }

    pub(crate) fn article_name(self) -> &'static str {
        match self {
            NodeKind::Number => "a number node",
            NodeKind::String => "a string node",
            NodeKind::Path => "a path node",
            NodeKind::Boolean => "a boolean node",
            NodeKind::Identifier => "an identifier node",
            NodeKind::Undefined => "an undefined node",
            NodeKind::LineComment => "a line_comment node",
            NodeKind::BlockComment => "a block_comment node",
            NodeKind::Assignment => "an assignment node",
            NodeKind::Block => "a block node",
            NodeKind::BinaryOperator => "a binary_operator node",
            NodeKind::UnaryOperator => "a unary_operator node",
            NodeKind::Use => "a use node",
            NodeKind::Include => "an include node",
        }
    }

    /// Kinds that can be built from a single token's value
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NodeKind::Number
                | NodeKind::String
                | NodeKind::Path
                | NodeKind::Boolean
                | NodeKind::Identifier
                | NodeKind::Undefined
                | NodeKind::LineComment
                | NodeKind::BlockComment
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = AstError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| AstError::UnknownNodeKind(name.to_string()))
    }
}

/// A validated, position-annotated AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(Literal<f64>),
    String(Literal<String>),
    Path(Literal<String>),
    Boolean(Literal<bool>),
    Identifier(Literal<String>),
    Undefined(Literal<()>),
    LineComment(Comment),
    BlockComment(Comment),
    Assignment(Assignment),
    Block(Block),
    BinaryOperator(BinaryOperator),
    UnaryOperator(UnaryOperator),
    Use(PathStatement),
    Include(PathStatement),
}

impl Node {
    pub fn number(value: f64) -> Self {
        Node::Number(Literal::new(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::String(Literal::new(value.into()))
    }

    pub fn path(value: impl Into<String>) -> Self {
        Node::Path(Literal::new(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Node::Boolean(Literal::new(value))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(Literal::new(name.into()))
    }

    pub fn undefined() -> Self {
        Node::Undefined(Literal::new(()))
    }

    pub fn line_comment(text: impl Into<String>) -> Self {
        Node::LineComment(Comment::single(text))
    }

    pub fn block_comment(text: &str) -> Self {
        Node::BlockComment(Comment::split(text))
    }

    pub fn assignment(identifier: Node, value: Node) -> Result<Self, AstError> {
        Ok(Node::Assignment(Assignment::new(identifier, value)?))
    }

    pub fn block(statements: Vec<Node>) -> Self {
        Node::Block(Block::new(statements))
    }

    pub fn binary_operator(left: Node, operator: impl Into<String>, right: Node) -> Self {
        Node::BinaryOperator(BinaryOperator::new(left, operator, right))
    }

    pub fn unary_operator(operator: impl Into<String>, value: Node) -> Self {
        Node::UnaryOperator(UnaryOperator::new(operator, value))
    }

    pub fn use_path(path: Node) -> Result<Self, AstError> {
        Ok(Node::Use(PathStatement::new("use", path)?))
    }

    pub fn include_path(path: Node) -> Result<Self, AstError> {
        Ok(Node::Include(PathStatement::new("include", path)?))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::Path(_) => NodeKind::Path,
            Node::Boolean(_) => NodeKind::Boolean,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::Undefined(_) => NodeKind::Undefined,
            Node::LineComment(_) => NodeKind::LineComment,
            Node::BlockComment(_) => NodeKind::BlockComment,
            Node::Assignment(_) => NodeKind::Assignment,
            Node::Block(_) => NodeKind::Block,
            Node::BinaryOperator(_) => NodeKind::BinaryOperator,
            Node::UnaryOperator(_) => NodeKind::UnaryOperator,
            Node::Use(_) => NodeKind::Use,
            Node::Include(_) => NodeKind::Include,
        }
    }

    pub fn fragment(&self) -> &Fragment {
        match self {
            Node::Number(literal) => &literal.fragment,
            Node::String(literal) | Node::Path(literal) | Node::Identifier(literal) => {
                &literal.fragment
            }
            Node::Boolean(literal) => &literal.fragment,
            Node::Undefined(literal) => &literal.fragment,
            Node::LineComment(comment) | Node::BlockComment(comment) => &comment.fragment,
            Node::Assignment(assignment) => &assignment.fragment,
            Node::Block(block) => &block.fragment,
            Node::BinaryOperator(operator) => &operator.fragment,
            Node::UnaryOperator(operator) => &operator.fragment,
            Node::Use(statement) | Node::Include(statement) => &statement.fragment,
        }
    }

    fn fragment_mut(&mut self) -> &mut Fragment {
        match self {
            Node::Number(literal) => &mut literal.fragment,
            Node::String(literal) | Node::Path(literal) | Node::Identifier(literal) => {
                &mut literal.fragment
            }
            Node::Boolean(literal) => &mut literal.fragment,
            Node::Undefined(literal) => &mut literal.fragment,
            Node::LineComment(comment) | Node::BlockComment(comment) => &mut comment.fragment,
            Node::Assignment(assignment) => &mut assignment.fragment,
            Node::Block(block) => &mut block.fragment,
            Node::BinaryOperator(operator) => &mut operator.fragment,
            Node::UnaryOperator(operator) => &mut operator.fragment,
            Node::Use(statement) | Node::Include(statement) => &mut statement.fragment,
        }
    }

    pub fn start(&self) -> Option<Position> {
        self.fragment().start()
    }

    pub fn end(&self) -> Option<Position> {
        self.fragment().end()
    }

    /// Place the start endpoint at explicit coordinates
    pub fn start_at(mut self, position: Position) -> Result<Self, AstError> {
        self.fragment_mut().place_start(position)?;
        Ok(self)
    }

    /// Place the end endpoint at explicit coordinates
    pub fn end_at(mut self, position: Position) -> Result<Self, AstError> {
        self.fragment_mut().place_end(position)?;
        Ok(self)
    }

    /// Share the start position of another fragment
    pub fn start_from(self, other: &Fragment) -> Result<Self, AstError> {
        let position = other.placed_start()?;
        self.start_at(position)
    }

    /// Share the end position of another fragment
    pub fn end_from(self, other: &Fragment) -> Result<Self, AstError> {
        let position = other.placed_end()?;
        self.end_at(position)
    }

    /// The node's fields in canonical order, with `start`/`end` last when placed
    pub fn fields(&self) -> Fields {
        let mut fields = Fields::new();
        for (name, value) in self.declared_fields() {
            fields.replace(name.to_string(), value);
        }
        if let Some(start) = self.start() {
            fields.replace("start".to_string(), Field::Position(start));
        }
        if let Some(end) = self.end() {
            fields.replace("end".to_string(), Field::Position(end));
        }
        fields
    }

    fn declared_fields(&self) -> Vec<(&'static str, Field)> {
        match self {
            Node::Number(literal) => vec![("value", Field::Number(*literal.value()))],
            Node::String(literal) | Node::Path(literal) | Node::Identifier(literal) => {
                vec![("value", Field::Text(literal.value().clone()))]
            }
            Node::Boolean(literal) => vec![("value", Field::Bool(*literal.value()))],
            Node::Undefined(_) => vec![("value", Field::Null)],
            Node::LineComment(comment) | Node::BlockComment(comment) => {
                vec![("value", comment.to_field())]
            }
            Node::Assignment(assignment) => vec![
                ("identifier", Field::Node(assignment.identifier().clone())),
                ("value", Field::Node(assignment.value().clone())),
            ],
            Node::Block(block) => vec![("statements", Field::from(block.statements().to_vec()))],
            Node::BinaryOperator(operator) => vec![
                ("operator", Field::Text(operator.operator().to_string())),
                ("leftValue", Field::Node(operator.left().clone())),
                ("rightValue", Field::Node(operator.right().clone())),
            ],
            Node::UnaryOperator(operator) => vec![
                ("operator", Field::Text(operator.operator().to_string())),
                ("value", Field::Node(operator.value().clone())),
            ],
            Node::Use(statement) | Node::Include(statement) => {
                vec![("path", Field::Node(statement.path().clone()))]
            }
        }
    }

    /// Build a node of `kind` from a field bag, validating every field
    ///
    /// `start` and `end`, when present, must be positions. Any field the kind does not
    /// declare is rejected.
    pub fn from_fields(kind: NodeKind, mut fields: Fields) -> Result<Self, AstError> {
        let start = take_position(&mut fields, "start")?;
        let end = take_position(&mut fields, "end")?;
        let name = kind.name();

        let mut node = match kind {
            NodeKind::Number => {
                Node::number(literal::coerce_number(&fields.require(name, "value")?))
            }
            NodeKind::String => Node::string(literal::coerce_text(&fields.require(name, "value")?)),
            NodeKind::Path => Node::path(literal::coerce_text(&fields.require(name, "value")?)),
            NodeKind::Identifier => {
                Node::identifier(literal::coerce_text(&fields.require(name, "value")?))
            }
            NodeKind::Boolean => {
                Node::boolean(literal::coerce_boolean(&fields.require(name, "value")?)?)
            }
            NodeKind::Undefined => {
                fields.take("value");
                Node::undefined()
            }
            NodeKind::LineComment => Node::LineComment(Comment::from_field(
                name,
                fields.require(name, "value")?,
                false,
            )?),
            NodeKind::BlockComment => Node::BlockComment(Comment::from_field(
                name,
                fields.require(name, "value")?,
                true,
            )?),
            NodeKind::Assignment => {
                let identifier = expect_node(name, "identifier", fields.require(name, "identifier")?)?;
                let value = expect_node(name, "value", fields.require(name, "value")?)?;
                Node::assignment(identifier, value)?
            }
            NodeKind::Block => Node::block(statements(fields.require(name, "statements")?)?),
            NodeKind::BinaryOperator => {
                let operator = expect_text(name, "operator", fields.require(name, "operator")?)?;
                let left = expect_node(name, "leftValue", fields.require(name, "leftValue")?)?;
                let right = expect_node(name, "rightValue", fields.require(name, "rightValue")?)?;
                Node::binary_operator(left, operator, right)
            }
            NodeKind::UnaryOperator => {
                let operator = expect_text(name, "operator", fields.require(name, "operator")?)?;
                let value = expect_node(name, "value", fields.require(name, "value")?)?;
                Node::unary_operator(operator, value)
            }
            NodeKind::Use => {
                Node::use_path(expect_node(name, "path", fields.require(name, "path")?)?)?
            }
            NodeKind::Include => {
                Node::include_path(expect_node(name, "path", fields.require(name, "path")?)?)?
            }
        };

        if let Some(field) = fields.names().next() {
            return Err(AstError::UnknownField {
                kind: name,
                field: field.to_string(),
            });
        }

        let fragment = node.fragment_mut();
        *fragment = fragment.with_overrides(start, end);
        Ok(node)
    }

    /// A new node with `overrides` replacing the named fields
    ///
    /// Every field is re-validated exactly as at construction; fields not overridden are
    /// carried over unchanged. An empty override bag returns an equal, separate node.
    pub fn copy_with(&self, overrides: Fields) -> Result<Self, AstError> {
        let mut merged = self.fields();
        for (name, value) in overrides {
            merged.replace(name, value);
        }
        Node::from_fields(self.kind(), merged)
    }

    /// Direct child nodes, in field order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Assignment(assignment) => vec![assignment.identifier(), assignment.value()],
            Node::Block(block) => block.statements().iter().collect(),
            Node::BinaryOperator(operator) => vec![operator.left(), operator.right()],
            Node::UnaryOperator(operator) => vec![operator.value()],
            Node::Use(statement) | Node::Include(statement) => vec![statement.path()],
            _ => Vec::new(),
        }
    }
}

fn take_position(fields: &mut Fields, name: &'static str) -> Result<Option<Position>, AstError> {
    match fields.take(name) {
        None => Ok(None),
        Some(Field::Position(position)) => Ok(Some(position)),
        Some(other) => Err(AstError::InvalidPosition {
            field: name.to_string(),
            found: other.describe(),
        }),
    }
}

/// Statements of a block; a single node is wrapped into a one-element list
fn statements(value: Field) -> Result<Vec<Node>, AstError> {
    match value {
        Field::Node(node) => Ok(vec![node]),
        Field::List(items) => items
            .into_iter()
            .map(|item| expect_node("block", "statements", item))
            .collect(),
        other => Err(AstError::InvalidChildType {
            kind: "block",
            field: "statements".to_string(),
            expected: "a node or list of nodes",
            found: other.describe(),
        }),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(literal) => write!(f, "Number({})", literal.value()),
            Node::String(literal) => write!(f, "String({:?})", literal.value()),
            Node::Path(literal) => write!(f, "Path(<{}>)", literal.value()),
            Node::Boolean(literal) => write!(f, "Boolean({})", literal.value()),
            Node::Identifier(literal) => write!(f, "Identifier({})", literal.value()),
            Node::Undefined(_) => write!(f, "Undefined"),
            Node::LineComment(comment) | Node::BlockComment(comment) => {
                write!(f, "Comment({} lines)", comment.lines().len())
            }
            Node::Assignment(assignment) => {
                write!(f, "Assignment({} = {})", assignment.name(), assignment.value())
            }
            Node::Block(block) => write!(f, "Block({} statements)", block.statements().len()),
            Node::BinaryOperator(operator) => write!(
                f,
                "BinaryOperator({} {} {})",
                operator.left(),
                operator.operator(),
                operator.right()
            ),
            Node::UnaryOperator(operator) => {
                write!(f, "UnaryOperator({}{})", operator.operator(), operator.value())
            }
            Node::Use(statement) => write!(f, "Use(<{}>)", statement.target()),
            Node::Include(statement) => write!(f, "Include(<{}>)", statement.target()),
        }
    }
}
