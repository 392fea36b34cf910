//! Pipeline configuration
//!
//! Named grammar configurations, plus the output settings a run serializes with. Output
//! settings can be loaded from YAML; any field left out keeps its default.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::executor::PipelineError;

/// A named grammar configuration
#[derive(Debug, Clone)]
pub struct GrammarConfig {
    pub name: String,
    pub description: String,
    pub grammar: GrammarSpec,
}

/// Which grammar to parse with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarSpec {
    /// Assignments, use/include directives, blocks, comments and expressions
    OpenScad,
}

/// Registry of grammar configurations
pub struct GrammarRegistry {
    configs: HashMap<String, GrammarConfig>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        GrammarRegistry {
            configs: HashMap::new(),
        }
    }

    pub fn register(&mut self, config: GrammarConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    pub fn get(&self, name: &str) -> Option<&GrammarConfig> {
        self.configs.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// List all configurations (sorted by name)
    pub fn list_all(&self) -> Vec<&GrammarConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create registry with the built-in grammars
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GrammarConfig {
            name: "openscad".into(),
            description: "OpenSCAD subset: assignments, use/include, blocks, comments".into(),
            grammar: GrammarSpec::OpenScad,
        });
        registry
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// How a tree is written out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Registered format name
    pub format: String,
    pub pretty: bool,
    /// Spaces per level when pretty-printing
    pub indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: "json".to_string(),
            pretty: false,
            indent: 4,
        }
    }
}

impl OutputSettings {
    /// Load settings from a YAML string
    pub fn from_yaml(yaml_str: &str) -> Result<Self, PipelineError> {
        serde_yaml::from_str(yaml_str).map_err(|err| PipelineError::Config(err.to_string()))
    }

    /// Load settings from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| PipelineError::Config(format!("{}: {}", path.display(), err)))?;
        Self::from_yaml(&content)
    }
}
