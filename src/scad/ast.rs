//! Abstract syntax tree
//!
//! The typed node model: source [`Position`]s, located [`Fragment`]s, and the closed
//! [`Node`] sum type over every node kind. Nodes validate their children at construction and
//! at every [`Node::copy_with`]; see [`node`] for the construction rules and [`serialize`] for
//! the canonical serialized shape.

pub mod elements;
pub mod error;
pub mod fields;
pub mod fragment;
pub mod node;
pub mod position;
pub mod serialize;

pub use elements::{
    Assignment, BinaryOperator, Block, Comment, CommentText, Literal, PathStatement,
    UnaryOperator,
};
pub use error::AstError;
pub use fields::{Field, Fields};
pub use fragment::Fragment;
pub use node::{Node, NodeKind};
pub use position::{split_lines, Position, PositionPatch, SourceLocation};
