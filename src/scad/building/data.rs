//! Raw match-results
//!
//! A grammar engine hands each builder a [`Data`] value: a token, an already-built node,
//! nothing at all, or an irregularly nested sequence of those (the shape optional, choice and
//! repetition productions leave behind).

use serde::Deserialize;

use crate::scad::ast::{AstError, Fragment, Node, Position};

/// A token as supplied by the grammar engine
///
/// `value` is the token's value and `text` the raw source text it was matched from; when the
/// two differ, positions advance over `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(default)]
    pub text: Option<String>,
    pub line: usize,
    #[serde(alias = "col")]
    pub column: usize,
    pub offset: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            value: value.into(),
            text: None,
            line,
            column,
            offset,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The raw source text, falling back to the value
    pub fn raw_text(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.value)
    }

    /// Where the token starts
    pub fn position(&self) -> Result<Position, AstError> {
        Position::new(self.line, self.column, self.offset)
    }

    /// Just past the token's raw text
    pub fn end_position(&self) -> Result<Position, AstError> {
        Ok(self.position()?.advanced_past(self.raw_text()))
    }
}

/// A raw, possibly nested match-result
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Absent,
    Token(Token),
    Node(Node),
    Seq(Vec<Data>),
}

impl Data {
    pub fn describe(&self) -> String {
        match self {
            Data::Absent => "nothing".to_string(),
            Data::Token(token) => format!("token {:?}", token.value),
            Data::Node(node) => format!("{} node", node.kind()),
            Data::Seq(items) => format!("sequence of {} items", items.len()),
        }
    }

    /// The fragment of a built node; anything else is not a fragment
    pub fn fragment(&self) -> Result<&Fragment, AstError> {
        match self {
            Data::Node(node) => Ok(node.fragment()),
            other => Err(AstError::ExpectedFragment(other.describe())),
        }
    }

    pub fn into_node(self) -> Result<Node, AstError> {
        match self {
            Data::Node(node) => Ok(node),
            other => Err(AstError::UnexpectedShape {
                expected: "a node",
                found: other.describe(),
            }),
        }
    }

    pub fn into_token(self) -> Result<Token, AstError> {
        match self {
            Data::Token(token) => Ok(token),
            other => Err(AstError::UnexpectedShape {
                expected: "a token",
                found: other.describe(),
            }),
        }
    }
}

impl From<Node> for Data {
    fn from(node: Node) -> Self {
        Data::Node(node)
    }
}

impl From<Token> for Data {
    fn from(token: Token) -> Self {
        Data::Token(token)
    }
}

impl From<Vec<Data>> for Data {
    fn from(items: Vec<Data>) -> Self {
        Data::Seq(items)
    }
}

impl<T: Into<Data>> From<Option<T>> for Data {
    fn from(item: Option<T>) -> Self {
        item.map_or(Data::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_deserializes_col_alias() {
        let token: Token =
            serde_json::from_str(r#"{"value":"foo","line":1,"col":5,"offset":4}"#).unwrap();
        assert_eq!(token, Token::new("foo", 1, 5, 4));
        assert_eq!(token.raw_text(), "foo");
    }

    #[test]
    fn test_token_end_position_uses_raw_text() {
        let token = Token::new("a\nb", 1, 1, 0).with_text("\"a\nb\"");
        assert_eq!(
            token.end_position().unwrap(),
            Position::new(2, 3, 5).unwrap()
        );
    }

    #[test]
    fn test_bad_token_coordinates() {
        assert!(matches!(
            Token::new("x", 0, 1, 0).position(),
            Err(AstError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_only_nodes_are_fragments() {
        assert!(Data::Node(Node::number(1.0)).fragment().is_ok());
        assert!(matches!(
            Data::Token(Token::new("+", 1, 1, 0)).fragment(),
            Err(AstError::ExpectedFragment(_))
        ));
        assert!(Data::Absent.fragment().is_err());
    }
}
