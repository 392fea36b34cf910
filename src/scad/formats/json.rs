//! JSON output
//!
//! Compact by default. Pretty output indents with `settings.indent` spaces.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::registry::{FormatError, Formatter};
use crate::scad::ast::Node;
use crate::scad::pipeline::config::OutputSettings;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, node: &Node, settings: &OutputSettings) -> Result<String, FormatError> {
        if !settings.pretty {
            return serde_json::to_string(node)
                .map_err(|err| FormatError::SerializationError(err.to_string()));
        }

        let indent = " ".repeat(settings.indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        node.serialize(&mut serializer)
            .map_err(|err| FormatError::SerializationError(err.to_string()))?;
        String::from_utf8(buffer).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Canonical JSON tree"
    }
}
