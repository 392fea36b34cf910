//! AST building
//!
//! Turns grammar match-results into nodes. [`data`] is the dynamic value flowing out of the
//! grammar, [`factory`] looks kinds up by name and promotes tokens, [`reduction`] normalizes
//! match-result nesting, and [`builders`] holds one reduction function per grammar rule.

pub mod builders;
pub mod data;
pub mod factory;
pub mod reduction;

pub use builders::Builder;
pub use data::{Data, Token};
pub use factory::{construct, discard, forward, registry, terminal, Constructor, NodeRegistry};
pub use reduction::{canonicalize, flatten, Element, Shape};
