//! Grammar for the OpenSCAD subset using chumsky
//!
//! Statements are assignments, `use`/`include` directives, braced blocks and comments.
//! Expressions climb the precedence table loosest first:
//!
//! ```text
//! ||   &&   == !=   < <= > >=   + -   * / %   prefix ! - +   primary
//! ```
//!
//! Every level emits an `operation` match even when no operator follows, so a lone literal
//! arrives wrapped once per level and is forwarded back out by the builder. Binary levels fold
//! left; prefix operators fold right.

use chumsky::prelude::*;
use chumsky::BoxedParser;

use super::rule::{Match, Rule};
use crate::scad::lexing::{Lexeme, TokenKind};

/// Type alias for parser error
pub type ParserError = Simple<Lexeme>;

type MatchParser = BoxedParser<'static, Lexeme, Match, ParserError>;

const LOGICAL_OR: &[TokenKind] = &[TokenKind::Or];
const LOGICAL_AND: &[TokenKind] = &[TokenKind::And];
const EQUALITY: &[TokenKind] = &[TokenKind::Equal, TokenKind::NotEqual];
const COMPARISON: &[TokenKind] = &[
    TokenKind::Less,
    TokenKind::LessEqual,
    TokenKind::Greater,
    TokenKind::GreaterEqual,
];
const ADDITIVE: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
const MULTIPLICATIVE: &[TokenKind] = &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent];
const PREFIX: &[TokenKind] = &[TokenKind::Bang, TokenKind::Minus, TokenKind::Plus];

/// Helper: match a token of one kind
fn token(kind: TokenKind) -> impl Parser<Lexeme, Match, Error = ParserError> + Clone {
    filter(move |(found, _): &Lexeme| *found == kind).map(|(_, token)| Match::Token(token))
}

/// Helper: match any of `kinds` as a grouped operator
fn operator(kinds: &'static [TokenKind]) -> impl Parser<Lexeme, Match, Error = ParserError> + Clone {
    filter(move |(found, _): &Lexeme| kinds.contains(found))
        .map(|(_, token)| Match::Token(token).grouped())
}

/// Helper: a single-token rule
fn terminal(kind: TokenKind, rule: Rule) -> impl Parser<Lexeme, Match, Error = ParserError> + Clone {
    token(kind).map(move |matched| Match::rule(rule, vec![matched]))
}

/// One left-associative binary level over `operand`
fn binary_level(operand: MatchParser, operators: &'static [TokenKind]) -> MatchParser {
    operand
        .clone()
        .map(|first| Match::rule(Rule::Operation, vec![first]))
        .then(operator(operators).then(operand).repeated())
        .foldl(|left, (operator, right)| Match::rule(Rule::Operation, vec![left, operator, right]))
        .boxed()
}

/// Parse an expression
pub fn expression() -> MatchParser {
    recursive(|expression| {
        let parenthesized = token(TokenKind::OpenParen)
            .then(expression)
            .then(token(TokenKind::CloseParen))
            .map(|((open, inner), close)| {
                Match::rule(Rule::Parenthesized, vec![open, inner, close])
            });

        let boolean = terminal(TokenKind::True, Rule::Boolean)
            .or(terminal(TokenKind::False, Rule::Boolean));

        let primary = choice((
            terminal(TokenKind::Number, Rule::Number),
            terminal(TokenKind::String, Rule::String),
            boolean,
            terminal(TokenKind::Undef, Rule::Undefined),
            terminal(TokenKind::Identifier, Rule::Identifier),
            parenthesized,
        ))
        .map(Match::grouped);

        let unary = recursive(|unary| {
            operator(PREFIX)
                .then(unary)
                .map(|(operator, operand)| Match::rule(Rule::Operation, vec![operator, operand]))
                .or(primary.map(|operand| Match::rule(Rule::Operation, vec![operand])))
        })
        .boxed();

        [MULTIPLICATIVE, ADDITIVE, COMPARISON, EQUALITY, LOGICAL_AND, LOGICAL_OR]
            .into_iter()
            .fold(unary, binary_level)
    })
    .boxed()
}

/// Parse one statement
pub fn statement() -> MatchParser {
    recursive(|statement| {
        let semicolon = || token(TokenKind::Semicolon);

        let assignment = terminal(TokenKind::Identifier, Rule::Identifier)
            .then(token(TokenKind::Assign))
            .then(expression())
            .then(semicolon())
            .map(|(((identifier, equals), value), semi)| {
                Match::rule(Rule::Assignment, vec![identifier, equals, value, semi])
            });

        let use_statement = token(TokenKind::Use)
            .then(terminal(TokenKind::Path, Rule::Path))
            .then(semicolon().or_not())
            .map(|((keyword, path), semi)| Match::rule(Rule::Use, vec![keyword, path, semi.into()]));

        let include_statement = token(TokenKind::Include)
            .then(terminal(TokenKind::Path, Rule::Path))
            .then(semicolon().or_not())
            .map(|((keyword, path), semi)| {
                Match::rule(Rule::Include, vec![keyword, path, semi.into()])
            });

        let block = token(TokenKind::OpenBrace)
            .then(statement.repeated())
            .then(token(TokenKind::CloseBrace))
            .map(|((open, statements), close)| {
                Match::rule(Rule::Block, vec![open, Match::Seq(statements), close])
            });

        let comment = terminal(TokenKind::LineComment, Rule::LineComment)
            .or(terminal(TokenKind::BlockComment, Rule::BlockComment));

        choice((use_statement, include_statement, assignment, block, comment))
            .map(|matched| Match::rule(Rule::Statement, vec![matched.grouped()]))
    })
    .boxed()
}

/// Parse a whole program
pub fn program() -> impl Parser<Lexeme, Match, Error = ParserError> {
    statement()
        .repeated()
        .then_ignore(end())
        .map(|statements| Match::rule(Rule::Program, vec![Match::Seq(statements)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scad::lexing::lex;

    fn parse_program(source: &str) -> Match {
        program().parse(lex(source).unwrap()).unwrap()
    }

    #[test]
    fn test_program_shape() {
        let matched = parse_program("a = 1;");
        let Match::Rule(Rule::Program, parts) = matched else {
            panic!("expected a program match");
        };
        assert_eq!(parts.len(), 1);
        assert!(matches!(&parts[0], Match::Seq(statements) if statements.len() == 1));
    }

    #[test]
    fn test_use_without_semicolon_leaves_absent_slot() {
        let Match::Rule(Rule::Program, parts) = parse_program("use <a.scad>") else {
            panic!("expected a program match");
        };
        let Match::Seq(statements) = &parts[0] else {
            panic!("expected statements");
        };
        let Match::Rule(Rule::Statement, inner) = &statements[0] else {
            panic!("expected a statement");
        };
        let Match::Seq(group) = &inner[0] else {
            panic!("expected a grouped choice");
        };
        let Match::Rule(Rule::Use, use_parts) = &group[0] else {
            panic!("expected a use statement");
        };
        assert_eq!(use_parts[2], Match::Absent);
    }

    #[test]
    fn test_rejects_incomplete_assignment() {
        assert!(program().parse(lex("a = ;").unwrap()).is_err());
        assert!(program().parse(lex("a = 1").unwrap()).is_err());
        assert!(program().parse(lex("{ a = 1;").unwrap()).is_err());
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(
            parse_program(""),
            Match::rule(Rule::Program, vec![Match::Seq(vec![])])
        );
    }
}
