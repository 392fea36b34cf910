//! Per-rule builders
//!
//! One function per grammar rule, each `fn(Data) -> Result<Data, AstError>`. A builder
//! canonicalizes its rule's raw match-result, then either forwards an already-built node,
//! discards the result, or builds a new node and chains its endpoints from its first and
//! last parts.
//!
//! Terminal builders refine the token value (stripping quotes, angle brackets or comment
//! markers) and hand it to [`factory::terminal`] by kind name.

use super::data::{Data, Token};
use super::factory::{self, forward};
use super::reduction::{canonicalize, flatten, into_array, unexpected, Element, Shape};
use crate::scad::ast::{AstError, Field, Node, Position};

/// Signature shared by every builder
pub type Builder = fn(Data) -> Result<Data, AstError>;

// ============================================================================
// TERMINALS
// ============================================================================

fn single_token(data: Data) -> Result<Token, AstError> {
    forward(data)?.into_token()
}

fn strip_delimiters<'a>(text: &'a str, open: &str, close: &str) -> &'a str {
    text.strip_prefix(open)
        .and_then(|inner| inner.strip_suffix(close))
        .unwrap_or(text)
}

pub fn number(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    let value = Field::Text(token.value.clone());
    Ok(factory::terminal(&token, value, "number")?.into())
}

/// String literal; the surrounding double quotes are stripped
pub fn string(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    let value = strip_delimiters(&token.value, "\"", "\"").to_string();
    Ok(factory::terminal(&token, value, "string")?.into())
}

/// Path literal; the surrounding angle brackets are stripped
pub fn path(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    let value = strip_delimiters(&token.value, "<", ">").to_string();
    Ok(factory::terminal(&token, value, "path")?.into())
}

pub fn boolean(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    let value = Field::Text(token.value.clone());
    Ok(factory::terminal(&token, value, "boolean")?.into())
}

pub fn undefined(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    Ok(factory::terminal(&token, Field::Null, "undefined")?.into())
}

pub fn identifier(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    let value = Field::Text(token.value.clone());
    Ok(factory::terminal(&token, value, "identifier")?.into())
}

/// `// text`; the leading marker is stripped
pub fn line_comment(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    let value = token
        .value
        .strip_prefix("//")
        .unwrap_or(&token.value)
        .to_string();
    Ok(factory::terminal(&token, value, "line_comment")?.into())
}

/// `/* text */`; both markers are stripped and the text is split into lines
pub fn block_comment(data: Data) -> Result<Data, AstError> {
    let token = single_token(data)?;
    let value = strip_delimiters(&token.value, "/*", "*/").to_string();
    Ok(factory::terminal(&token, value, "block_comment")?.into())
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// Any precedence level: unary, binary, or a lower level passed through
pub fn operation(data: Data) -> Result<Data, AstError> {
    match canonicalize(data)? {
        Shape::NoOperand => Ok(Data::Absent),
        Shape::AlreadyBuilt(node) => Ok(Data::Node(node)),
        Shape::Unary { operator, operand } => {
            let start = operator.position()?;
            let end = operand.fragment().placed_end()?;
            Ok(Node::unary_operator(operator.value, operand)
                .start_at(start)?
                .end_at(end)?
                .into())
        }
        Shape::Binary {
            left,
            operator,
            right,
        } => {
            let start = left.fragment().placed_start()?;
            let end = right.fragment().placed_end()?;
            Ok(Node::binary_operator(left, operator.value, right)
                .start_at(start)?
                .end_at(end)?
                .into())
        }
    }
}

/// `( expression )`; the parentheses are dropped and the inner node forwarded
pub fn parenthesized(data: Data) -> Result<Data, AstError> {
    let inner: Vec<Data> = flatten(data)
        .into_iter()
        .filter(|element| !element.is_token("(") && !element.is_token(")"))
        .map(Data::from)
        .collect();
    let node = forward(Data::Seq(inner))?.into_node()?;
    Ok(node.into())
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// Flatten and drop a trailing `;`
fn statement_elements(data: Data) -> Vec<Element> {
    let mut elements = flatten(data);
    if elements.last().is_some_and(|last| last.is_token(";")) {
        elements.pop();
    }
    elements
}

/// First start and last end over a run of statements
fn statements_span(statements: &[Node]) -> Result<Option<(Position, Position)>, AstError> {
    match (statements.first(), statements.last()) {
        (Some(first), Some(last)) => Ok(Some((
            first.fragment().placed_start()?,
            last.fragment().placed_end()?,
        ))),
        _ => Ok(None),
    }
}

fn only_nodes(elements: Vec<Element>) -> Result<Vec<Node>, AstError> {
    elements
        .into_iter()
        .map(|element| match element {
            Element::Node(node) => Ok(node),
            other => Err(unexpected("a statement", &[other])),
        })
        .collect()
}

/// Any statement; choice grouping is dropped and the single statement forwarded
pub fn statement(data: Data) -> Result<Data, AstError> {
    forward(Data::Seq(flatten(data).into_iter().map(Data::from).collect()))
}

/// `identifier = value;`, spanning from the identifier to the value
pub fn assignment(data: Data) -> Result<Data, AstError> {
    let elements = statement_elements(data);
    match into_array::<3>(elements)? {
        [Element::Node(identifier), equals, Element::Node(value)] if equals.is_token("=") => {
            let start = identifier.fragment().placed_start()?;
            let end = value.fragment().placed_end()?;
            Ok(Node::assignment(identifier, value)?
                .start_at(start)?
                .end_at(end)?
                .into())
        }
        other => Err(unexpected("an identifier, '=', a value", &other)),
    }
}

fn path_statement(
    data: Data,
    keyword: &str,
    build: fn(Node) -> Result<Node, AstError>,
) -> Result<Data, AstError> {
    let elements = statement_elements(data);
    match into_array::<2>(elements)? {
        [Element::Token(token), Element::Node(path)] if token.value == keyword => {
            let start = token.position()?;
            let end = path.fragment().placed_end()?;
            Ok(build(path)?.start_at(start)?.end_at(end)?.into())
        }
        other => Err(unexpected("a keyword then a path", &other)),
    }
}

/// `use <path>`
pub fn use_statement(data: Data) -> Result<Data, AstError> {
    path_statement(data, "use", Node::use_path)
}

/// `include <path>`
pub fn include_statement(data: Data) -> Result<Data, AstError> {
    path_statement(data, "include", Node::include_path)
}

/// `{ statements }`, spanning from the opening to past the closing brace
pub fn block(data: Data) -> Result<Data, AstError> {
    let mut elements = flatten(data);
    let close = match elements.pop() {
        Some(Element::Token(token)) if token.value == "}" => token,
        other => return Err(unexpected("a closing brace", &Vec::from_iter(other))),
    };
    if elements.is_empty() || !elements[0].is_token("{") {
        return Err(unexpected("an opening brace", &elements));
    }
    let open = match elements.remove(0) {
        Element::Token(token) => token,
        other => return Err(unexpected("an opening brace", &[other])),
    };

    let statements = only_nodes(elements)?;
    Ok(Node::block(statements)
        .start_at(open.position()?)?
        .end_at(close.end_position()?)?
        .into())
}

/// Top level: every statement in order, spanning from the first to the last
pub fn program(data: Data) -> Result<Data, AstError> {
    let statements = only_nodes(flatten(data))?;
    let span = statements_span(&statements)?;
    let block = Node::block(statements);
    let block = match span {
        Some((start, end)) => block.start_at(start)?.end_at(end)?,
        None => block,
    };
    Ok(block.into())
}
