//! Parsing errors

use std::fmt;

use chumsky::error::Simple;

use crate::scad::ast::{AstError, Position};
use crate::scad::lexing::{LexError, Lexeme};

/// Error raised while turning source text into a tree
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Lex(LexError),
    /// The token stream does not match the grammar; `found` is `None` at end of input
    Syntax {
        found: Option<String>,
        position: Option<Position>,
    },
    /// Brackets or prefix operators nest deeper than `limit`
    TooDeep {
        limit: usize,
        position: Option<Position>,
    },
    /// A builder rejected a matched production
    Build(AstError),
}

impl ParseError {
    pub(crate) fn from_simple(error: &Simple<Lexeme>) -> Self {
        match error.found() {
            Some((_, token)) => ParseError::Syntax {
                found: Some(token.value.clone()),
                position: token.position().ok(),
            },
            None => ParseError::Syntax {
                found: None,
                position: None,
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::Syntax {
                found: Some(found),
                position: Some(position),
            } => write!(
                f,
                "Unexpected token {:?} at line {}, column {}",
                found,
                position.line(),
                position.column()
            ),
            ParseError::Syntax {
                found: Some(found),
                position: None,
            } => write!(f, "Unexpected token {:?}", found),
            ParseError::Syntax { found: None, .. } => write!(f, "Unexpected end of input"),
            ParseError::TooDeep {
                limit,
                position: Some(position),
            } => write!(
                f,
                "Nesting deeper than {} levels at line {}, column {}",
                limit,
                position.line(),
                position.column()
            ),
            ParseError::TooDeep {
                limit,
                position: None,
            } => write!(f, "Nesting deeper than {} levels", limit),
            ParseError::Build(err) => write!(f, "Failed to build node: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            ParseError::Build(err) => Some(err),
            ParseError::Syntax { .. } | ParseError::TooDeep { .. } => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<AstError> for ParseError {
    fn from(err: AstError) -> Self {
        ParseError::Build(err)
    }
}
