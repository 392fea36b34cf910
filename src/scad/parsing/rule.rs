//! Grammar rules and raw matches
//!
//! The grammar does not build nodes. It produces a [`Match`] tree tagged with the [`Rule`]
//! each production belongs to, keeping the irregular nesting that optional and choice
//! productions leave behind. The engine reduces that tree through each rule's builder.

use std::fmt;

use crate::scad::building::{builders, Builder, Token};

/// A grammar rule with a builder attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Program,
    Statement,
    Block,
    Assignment,
    Use,
    Include,
    Operation,
    Parenthesized,
    Number,
    String,
    Path,
    Boolean,
    Undefined,
    Identifier,
    LineComment,
    BlockComment,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Program => "program",
            Rule::Statement => "statement",
            Rule::Block => "block",
            Rule::Assignment => "assignment",
            Rule::Use => "use",
            Rule::Include => "include",
            Rule::Operation => "operation",
            Rule::Parenthesized => "parenthesized",
            Rule::Number => "number",
            Rule::String => "string",
            Rule::Path => "path",
            Rule::Boolean => "boolean",
            Rule::Undefined => "undefined",
            Rule::Identifier => "identifier",
            Rule::LineComment => "line_comment",
            Rule::BlockComment => "block_comment",
        }
    }

    /// The reduction invoked when this rule matches
    pub fn builder(self) -> Builder {
        match self {
            Rule::Program => builders::program,
            Rule::Statement => builders::statement,
            Rule::Block => builders::block,
            Rule::Assignment => builders::assignment,
            Rule::Use => builders::use_statement,
            Rule::Include => builders::include_statement,
            Rule::Operation => builders::operation,
            Rule::Parenthesized => builders::parenthesized,
            Rule::Number => builders::number,
            Rule::String => builders::string,
            Rule::Path => builders::path,
            Rule::Boolean => builders::boolean,
            Rule::Undefined => builders::undefined,
            Rule::Identifier => builders::identifier,
            Rule::LineComment => builders::line_comment,
            Rule::BlockComment => builders::block_comment,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw match produced by the grammar
#[derive(Debug, Clone, PartialEq)]
pub enum Match {
    /// An optional production that matched nothing
    Absent,
    Token(Token),
    /// A grouping with no rule of its own
    Seq(Vec<Match>),
    /// A production of `Rule`, with its parts in source order
    Rule(Rule, Vec<Match>),
}

impl Match {
    pub fn rule(rule: Rule, parts: Vec<Match>) -> Self {
        Match::Rule(rule, parts)
    }

    /// Wrap in a one-element group, the way a choice production does
    pub fn grouped(self) -> Self {
        Match::Seq(vec![self])
    }
}

impl From<Option<Match>> for Match {
    fn from(value: Option<Match>) -> Self {
        value.unwrap_or(Match::Absent)
    }
}
