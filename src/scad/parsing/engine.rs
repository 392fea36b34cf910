//! Reduction engine
//!
//! Walks a [`Match`] tree bottom-up. Children are reduced first, then the rule's builder runs
//! over the reduced parts, so every builder sees already-built nodes in place of its
//! sub-rules. The first builder error aborts the whole reduction.
//!
//! Grammar and reduction both recurse once per nesting level, so [`parse`] rejects input whose
//! brackets or prefix-operator runs nest deeper than [`MAX_NESTING`] before either runs.

use chumsky::Parser;
use tracing::{debug, trace};

use super::error::ParseError;
use super::grammar;
use super::rule::Match;
use crate::scad::ast::{AstError, Node};
use crate::scad::building::Data;
use crate::scad::lexing::{lex, Lexeme, TokenKind};

/// Deepest bracket or prefix-operator nesting [`parse`] accepts
pub const MAX_NESTING: usize = 32;

/// Reduce a raw match to data, invoking each rule's builder
pub fn reduce(matched: Match) -> Result<Data, AstError> {
    match matched {
        Match::Absent => Ok(Data::Absent),
        Match::Token(token) => Ok(Data::Token(token)),
        Match::Seq(parts) => Ok(Data::Seq(reduce_all(parts)?)),
        Match::Rule(rule, parts) => {
            let data = Data::Seq(reduce_all(parts)?);
            trace!(rule = rule.name(), input = %data.describe(), "reducing");
            (rule.builder())(data)
        }
    }
}

fn reduce_all(parts: Vec<Match>) -> Result<Vec<Data>, AstError> {
    parts.into_iter().map(reduce).collect()
}

/// Reject the first lexeme that opens a level past [`MAX_NESTING`]
fn check_nesting(lexemes: &[Lexeme]) -> Result<(), ParseError> {
    let mut brackets = 0usize;
    let mut prefix_run = 0usize;
    for (kind, token) in lexemes {
        match kind {
            TokenKind::OpenParen | TokenKind::OpenBrace => brackets += 1,
            TokenKind::CloseParen | TokenKind::CloseBrace => brackets = brackets.saturating_sub(1),
            _ => {}
        }
        // A binary `-` before a prefix `-` counts too; the limit only needs an upper bound
        if matches!(kind, TokenKind::Bang | TokenKind::Minus | TokenKind::Plus) {
            prefix_run += 1;
        } else {
            prefix_run = 0;
        }
        if brackets + prefix_run > MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                position: token.position().ok(),
            });
        }
    }
    Ok(())
}

/// Parse source text into its program block
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let lexemes = lex(source)?;
    check_nesting(&lexemes)?;
    debug!(tokens = lexemes.len(), "parsing");

    let matched = grammar::program().parse(lexemes).map_err(|errors| {
        debug!(errors = errors.len(), "grammar rejected input");
        errors
            .first()
            .map(ParseError::from_simple)
            .unwrap_or(ParseError::Syntax {
                found: None,
                position: None,
            })
    })?;

    let node = reduce(matched)?.into_node()?;
    debug!(statements = node.children().len(), "reduced program");
    Ok(node)
}
