//! YAML output

use super::registry::{FormatError, Formatter};
use crate::scad::ast::Node;
use crate::scad::pipeline::config::OutputSettings;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, node: &Node, _settings: &OutputSettings) -> Result<String, FormatError> {
        serde_yaml::to_string(node).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Canonical tree as YAML"
    }
}
