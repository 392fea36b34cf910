//! Source positions
//!
//! A [`Position`] is an immutable point in source text: a 1-based line and column plus a
//! 0-based offset. Lengths, columns and offsets are counted in characters. Positions are only
//! ever replaced, never mutated; [`Position::copy_with`] and [`Position::advanced_past`] both
//! build new values.
//!
//! [`SourceLocation`] converts lexer byte offsets into positions, and agrees with
//! [`Position::advanced_past`] on what counts as a line break (`\r\n`, `\r` and `\n`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::error::AstError;

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Split text on every line-break variant, one entry per physical line
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

/// A validated point in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    line: usize,
    column: usize,
    offset: usize,
}

/// Field overrides for [`Position::copy_with`]; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionPatch {
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub offset: Option<usize>,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Result<Self, AstError> {
        Ok(Self {
            line: check_at_least_one("line", line)?,
            column: check_at_least_one("column", column)?,
            offset,
        })
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Build a new position, re-validating only the supplied fields
    pub fn copy_with(&self, patch: PositionPatch) -> Result<Self, AstError> {
        let line = match patch.line {
            Some(line) => check_at_least_one("line", line)?,
            None => self.line,
        };
        let column = match patch.column {
            Some(column) => check_at_least_one("column", column)?,
            None => self.column,
        };
        Ok(Self {
            line,
            column,
            offset: patch.offset.unwrap_or(self.offset),
        })
    }

    /// The position just past `text` when `text` starts at this position
    ///
    /// Single-line text advances the column; text spanning several lines moves to the last
    /// line, and the column restarts after that line's content.
    pub fn advanced_past(&self, text: &str) -> Self {
        let segments = split_lines(text);
        let breaks = segments.len().saturating_sub(1);
        let length = text.chars().count();

        if breaks == 0 {
            Self {
                line: self.line,
                column: self.column + length,
                offset: self.offset + length,
            }
        } else {
            let last = segments.last().map_or(0, |segment| segment.chars().count());
            Self {
                line: self.line + breaks,
                column: 1 + last,
                offset: self.offset + length,
            }
        }
    }
}

fn check_at_least_one(field: &'static str, value: usize) -> Result<usize, AstError> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(AstError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
    }
}

/// Untrusted coordinates as they arrive from a serialized form
#[derive(Deserialize)]
struct RawPosition {
    line: f64,
    #[serde(alias = "col")]
    column: f64,
    offset: f64,
}

fn integral(field: &'static str, value: f64, min: f64) -> Result<usize, AstError> {
    if value.is_finite() && value.fract() == 0.0 && value >= min {
        Ok(value as usize)
    } else {
        Err(AstError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
    }
}

impl TryFrom<RawPosition> for Position {
    type Error = AstError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(
            integral("line", raw.line, 1.0)?,
            integral("column", raw.column, 1.0)?,
            integral("offset", raw.offset, 0.0)?,
        )
    }
}

/// Provides conversion from byte offsets to positions
pub struct SourceLocation {
    /// Byte offset and character offset where each line starts
    line_starts: Vec<(usize, usize)>,
    source_len: usize,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![(0, 0)];
        let mut chars = source.char_indices().enumerate().peekable();

        while let Some((char_index, (byte_pos, ch))) = chars.next() {
            let is_break = match ch {
                '\n' => true,
                '\r' => !matches!(chars.peek(), Some((_, (_, '\n')))),
                _ => false,
            };
            if is_break {
                line_starts.push((byte_pos + 1, char_index + 1));
            }
        }

        Self {
            line_starts,
            source_len: source.len(),
        }
    }

    /// Convert a byte offset into `source` to a position
    ///
    /// `source` must be the text this location was built from. Offsets past the end clamp to
    /// the end of the source.
    pub fn position_at(&self, source: &str, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source_len);
        let line = match self
            .line_starts
            .binary_search_by(|(start, _)| start.cmp(&byte_offset))
        {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        let (line_byte, line_char) = self.line_starts[line];
        let column = source
            .get(line_byte..byte_offset)
            .map_or(0, |prefix| prefix.chars().count());

        Position {
            line: line + 1,
            column: column + 1,
            offset: line_char + column,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
