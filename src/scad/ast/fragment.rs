//! Located spans of source text
//!
//! Every node carries a [`Fragment`]: an optional start and end [`Position`]. Each endpoint
//! is write-once. Endpoints are usually placed right after construction, either from explicit
//! coordinates or by copying the matching endpoint of another fragment.

use super::error::AstError;
use super::position::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fragment {
    start: Option<Position>,
    end: Option<Position>,
}

impl Fragment {
    /// An unplaced fragment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    /// The start position, failing when it has not been placed
    pub fn placed_start(&self) -> Result<Position, AstError> {
        self.start
            .ok_or_else(|| AstError::ExpectedFragment("a fragment without a start".to_string()))
    }

    /// The end position, failing when it has not been placed
    pub fn placed_end(&self) -> Result<Position, AstError> {
        self.end
            .ok_or_else(|| AstError::ExpectedFragment("a fragment without an end".to_string()))
    }

    pub(crate) fn place_start(&mut self, position: Position) -> Result<(), AstError> {
        if self.start.is_some() {
            return Err(AstError::FieldAlreadySet("start".to_string()));
        }
        self.start = Some(position);
        Ok(())
    }

    pub(crate) fn place_end(&mut self, position: Position) -> Result<(), AstError> {
        if self.end.is_some() {
            return Err(AstError::FieldAlreadySet("end".to_string()));
        }
        self.end = Some(position);
        Ok(())
    }

    /// Replace endpoints wholesale; only used when copying a node with overrides
    pub(crate) fn with_overrides(self, start: Option<Position>, end: Option<Position>) -> Self {
        Self {
            start: start.or(self.start),
            end: end.or(self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_write_once() {
        let mut fragment = Fragment::new();
        let here = Position::new(1, 1, 0).unwrap();
        fragment.place_start(here).unwrap();
        assert_eq!(
            fragment.place_start(here),
            Err(AstError::FieldAlreadySet("start".to_string()))
        );
        fragment.place_end(here).unwrap();
        assert!(fragment.place_end(here).is_err());
    }

    #[test]
    fn test_unplaced_endpoint_is_not_copyable() {
        let fragment = Fragment::new();
        assert!(matches!(
            fragment.placed_start(),
            Err(AstError::ExpectedFragment(_))
        ));
        assert!(fragment.placed_end().is_err());
    }
}
