//! Processing pipeline
//!
//! Ties a named grammar to the output formats: [`config`] holds the grammar registry and
//! output settings, [`executor`] runs source text through both.

pub mod config;
pub mod executor;

pub use config::{GrammarConfig, GrammarRegistry, GrammarSpec, OutputSettings};
pub use executor::{PipelineError, PipelineExecutor};
