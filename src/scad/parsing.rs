//! Parsing
//!
//! Source text goes through three stages:
//!
//! 1. [`lex`](crate::scad::lexing::lex) turns it into positioned lexemes.
//! 2. The chumsky [`grammar`] matches lexemes into a raw [`Match`] tree tagged with [`Rule`]s.
//! 3. The [`engine`] reduces that tree bottom-up through each rule's builder.
//!
//! The grammar never builds nodes itself; every node is built by a builder, which keeps
//! position propagation in one place.

pub mod engine;
pub mod error;
pub mod grammar;
pub mod rule;

pub use engine::{parse, reduce};
pub use error::ParseError;
pub use rule::{Match, Rule};
