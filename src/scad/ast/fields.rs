//! Field values at the dynamic boundary
//!
//! Builders and external callers hand nodes loosely-typed values: a [`Field`] is one such
//! value, and [`Fields`] is an ordered, write-once bag of named fields. A node kind reads its
//! declared fields out of a bag and validates them; the same bag shape carries the overrides
//! for [`Node::copy_with`](super::Node::copy_with).

use super::error::AstError;
use super::node::Node;
use super::position::Position;

/// A loosely-typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Field>),
    Node(Node),
    Position(Position),
}

impl Field {
    /// Short description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Field::Null => "null".to_string(),
            Field::Bool(value) => format!("boolean {value}"),
            Field::Number(value) => format!("number {value}"),
            Field::Text(text) => format!("text {text:?}"),
            Field::List(items) => format!("list of {} items", items.len()),
            Field::Node(node) => format!("{} node", node.kind()),
            Field::Position(_) => "position".to_string(),
        }
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<Node> for Field {
    fn from(node: Node) -> Self {
        Field::Node(node)
    }
}

impl From<Position> for Field {
    fn from(position: Position) -> Self {
        Field::Position(position)
    }
}

impl From<Vec<Node>> for Field {
    fn from(nodes: Vec<Node>) -> Self {
        Field::List(nodes.into_iter().map(Field::Node).collect())
    }
}

impl From<Vec<String>> for Field {
    fn from(lines: Vec<String>) -> Self {
        Field::List(lines.into_iter().map(Field::Text).collect())
    }
}

/// An ordered bag of named fields, each settable once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, Field)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; a name may only be added once
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<Field>) -> Result<(), AstError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(AstError::FieldAlreadySet(name));
        }
        self.entries.push((name, value.into()));
        Ok(())
    }

    /// Chaining form of [`Fields::add`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Field>) -> Result<Self, AstError> {
        self.add(name, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn take(&mut self, name: &str) -> Option<Field> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub(crate) fn require(&mut self, kind: &'static str, name: &'static str) -> Result<Field, AstError> {
        self.take(name)
            .ok_or(AstError::MissingField { kind, field: name })
    }

    /// Replace a field in place, or append it when absent
    pub(crate) fn replace(&mut self, name: String, value: Field) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, Field);
    type IntoIter = std::vec::IntoIter<(String, Field)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
