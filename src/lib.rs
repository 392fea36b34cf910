//! # scad-ast
//!
//! Builds typed, position-annotated syntax trees for an OpenSCAD-style language and writes
//! them out in a canonical serialized shape.
//!
//! Source is lexed with logos, matched by a chumsky grammar and reduced bottom-up through one
//! builder per grammar rule:
//!
//! ```text
//! source → lexing::lex → parsing::grammar → parsing::engine::reduce → ast::Node
//! ```
//!
//! See [`scad::ast`] for the node model and [`scad::building`] for the reduction layer.

pub mod scad;
