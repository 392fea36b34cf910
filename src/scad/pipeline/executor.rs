//! Pipeline executor that runs grammar configurations

use std::fmt;

use tracing::{debug, info_span};

use super::config::{GrammarRegistry, GrammarSpec, OutputSettings};
use crate::scad::ast::{AstError, Node};
use crate::scad::formats::{FormatError, FormatRegistry};
use crate::scad::lexing::LexError;
use crate::scad::parsing::{self, ParseError};

/// Errors during pipeline execution
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    UnknownGrammar(String),
    /// Settings could not be read or parsed
    Config(String),
    Parse(ParseError),
    Format(FormatError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::UnknownGrammar(name) => write!(f, "Grammar '{}' not found", name),
            PipelineError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            PipelineError::Parse(err) => write!(f, "{}", err),
            PipelineError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Parse(err) => Some(err),
            PipelineError::Format(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for PipelineError {
    fn from(err: ParseError) -> Self {
        PipelineError::Parse(err)
    }
}

impl From<LexError> for PipelineError {
    fn from(err: LexError) -> Self {
        PipelineError::Parse(ParseError::Lex(err))
    }
}

impl From<AstError> for PipelineError {
    fn from(err: AstError) -> Self {
        PipelineError::Parse(ParseError::Build(err))
    }
}

impl From<FormatError> for PipelineError {
    fn from(err: FormatError) -> Self {
        PipelineError::Format(err)
    }
}

/// Executes grammar configurations
pub struct PipelineExecutor {
    grammars: GrammarRegistry,
    formats: FormatRegistry,
}

impl PipelineExecutor {
    /// Create executor with the built-in grammars and formats
    pub fn new() -> Self {
        Self {
            grammars: GrammarRegistry::with_defaults(),
            formats: FormatRegistry::with_defaults(),
        }
    }

    pub fn grammars(&self) -> &GrammarRegistry {
        &self.grammars
    }

    /// Parse `source` with the named grammar
    pub fn execute(&self, grammar: &str, source: &str) -> Result<Node, PipelineError> {
        let config = self
            .grammars
            .get(grammar)
            .ok_or_else(|| PipelineError::UnknownGrammar(grammar.to_string()))?;

        let _span = info_span!("execute", grammar = %config.name).entered();
        debug!(bytes = source.len(), "parsing source");
        let node = match config.grammar {
            GrammarSpec::OpenScad => parsing::parse(source)?,
        };
        Ok(node)
    }

    /// Parse `source` and serialize the tree with `settings`
    pub fn execute_and_serialize(
        &self,
        grammar: &str,
        source: &str,
        settings: &OutputSettings,
    ) -> Result<String, PipelineError> {
        let node = self.execute(grammar, source)?;
        debug!(format = %settings.format, pretty = settings.pretty, "serializing tree");
        Ok(self.formats.serialize(&node, settings)?)
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scad::ast::NodeKind;

    #[test]
    fn test_execute_default_grammar() {
        let node = PipelineExecutor::new()
            .execute("openscad", "use <a.scad>\nx = 1;")
            .unwrap();
        assert_eq!(node.kind(), NodeKind::Block);
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_unknown_grammar() {
        let result = PipelineExecutor::new().execute("python", "x = 1;");
        assert_eq!(result, Err(PipelineError::UnknownGrammar("python".to_string())));
        assert_eq!(
            PipelineError::UnknownGrammar("python".to_string()).to_string(),
            "Grammar 'python' not found"
        );
    }

    #[test]
    fn test_execute_and_serialize() {
        let output = PipelineExecutor::new()
            .execute_and_serialize("openscad", "x=1;", &OutputSettings::default())
            .unwrap();
        assert!(output.starts_with(r#"{"type":"block","statements":[{"type":"assignment""#));
    }

    #[test]
    fn test_unknown_format() {
        let settings = OutputSettings {
            format: "xml".to_string(),
            ..OutputSettings::default()
        };
        assert_eq!(
            PipelineExecutor::new().execute_and_serialize("openscad", "x=1;", &settings),
            Err(PipelineError::Format(FormatError::FormatNotFound("xml".to_string())))
        );
    }

    #[test]
    fn test_errors_convert() {
        let err: PipelineError = AstError::AmbiguousForward(2).into();
        assert_eq!(
            err,
            PipelineError::Parse(ParseError::Build(AstError::AmbiguousForward(2)))
        );
    }
}
