//! Lexer implementation
//!
//! Runs logos over the source and attaches positions. The token value is the exact source
//! slice; builders strip delimiters later.

use std::fmt;

use logos::Logos;
use tracing::debug;

use super::tokens::TokenKind;
use crate::scad::ast::{Position, SourceLocation};
use crate::scad::building::Token;

/// A token kind paired with its positioned token
pub type Lexeme = (TokenKind, Token);

/// Error raised when the source contains text no token matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnexpectedCharacter { text: String, position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { text, position } => write!(
                f,
                "Unexpected character {:?} at line {}, column {}",
                text,
                position.line(),
                position.column()
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Byte length of the whitespace before a `<file>` path, and of the path itself
fn path_after_keyword(remainder: &str) -> Option<(usize, usize)> {
    let trimmed = remainder.trim_start_matches([' ', '\t', '\r', '\n', '\x0C']);
    let inner = trimmed.strip_prefix('<')?;
    let close = inner.find(|c| matches!(c, '<' | '>' | ';' | '\r' | '\n'))?;
    if close == 0 || !inner[close..].starts_with('>') {
        return None;
    }
    Some((remainder.len() - trimmed.len(), close + 2))
}

/// Tokenize `source` into positioned lexemes
pub fn lex(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let location = SourceLocation::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let position = location.position_at(source, span.start);
        match result {
            Ok(kind) => {
                let token = Token::new(
                    lexer.slice(),
                    position.line(),
                    position.column(),
                    position.offset(),
                );
                lexemes.push((kind, token));

                if matches!(kind, TokenKind::Use | TokenKind::Include) {
                    if let Some((skipped, length)) = path_after_keyword(lexer.remainder()) {
                        let start = span.end + skipped;
                        let position = location.position_at(source, start);
                        let token = Token::new(
                            &source[start..start + length],
                            position.line(),
                            position.column(),
                            position.offset(),
                        );
                        lexemes.push((TokenKind::Path, token));
                        lexer.bump(skipped + length);
                    }
                }
            }
            Err(()) => {
                return Err(LexError::UnexpectedCharacter {
                    text: lexer.slice().to_string(),
                    position,
                })
            }
        }
    }

    debug!(
        tokens = lexemes.len(),
        lines = location.line_count(),
        "lexed source"
    );
    Ok(lexemes)
}
