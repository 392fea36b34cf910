//! Lexer
//!
//! Tokenization is done by logos (see [`tokens`]); [`lexer`] walks the logos output, stamps
//! each token with its source position and hands the grammar a flat lexeme stream. The one
//! context-sensitive token, a `<file>` path, is cut out by [`lexer`] right after `use` or
//! `include`, so `a<b>c` elsewhere stays a pair of comparisons.
//!
//! Coordinates follow the AST's conventions: lines and columns are 1-based, offsets 0-based,
//! and every count is in characters. `\r\n`, `\r` and `\n` all end a line, so a token's start
//! plus [`Position::advanced_past`](crate::scad::ast::Position::advanced_past) over its text
//! always lands on the start of whatever follows it.

pub mod lexer;
pub mod tokens;

pub use lexer::{lex, LexError, Lexeme};
pub use tokens::TokenKind;
