//! Output formats for serialized trees
//!
//! Every format serializes through the canonical `Serialize` impl of
//! [`Node`](crate::scad::ast::Node), so field order is the same in all of them.

pub mod json;
pub mod registry;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use yaml::YamlFormatter;
