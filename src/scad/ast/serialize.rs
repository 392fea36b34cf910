//! Canonical serialization
//!
//! Field order is part of the output contract: `type` first, then the kind's declared
//! fields, then `start` and `end` when placed. Positions serialize as
//! `{"type":"position","line":L,"column":C,"offset":O}`.
//!
//! Integral numbers are written as integers so `42` does not come out as `42.0`;
//! non-finite numbers follow the serializer (serde_json writes `NaN` as `null`).

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::elements::CommentText;
use super::fields::Field;
use super::node::Node;
use super::position::Position;

/// Largest magnitude at which every integer is exactly representable as `f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

struct Number(f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("type", "position")?;
        map.serialize_entry("line", &self.line())?;
        map.serialize_entry("column", &self.column())?;
        map.serialize_entry("offset", &self.offset())?;
        map.end()
    }
}

struct Lines<'a>(&'a CommentText);

impl Serialize for Lines<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            CommentText::Single(text) => serializer.serialize_str(text),
            CommentText::Lines(lines) => {
                let mut seq = serializer.serialize_seq(Some(lines.len()))?;
                for line in lines {
                    seq.serialize_element(line)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.kind().name())?;

        match self {
            Node::Number(literal) => map.serialize_entry("value", &Number(*literal.value()))?,
            Node::String(literal) | Node::Path(literal) | Node::Identifier(literal) => {
                map.serialize_entry("value", literal.value())?
            }
            Node::Boolean(literal) => map.serialize_entry("value", literal.value())?,
            Node::Undefined(_) => map.serialize_entry("value", &())?,
            Node::LineComment(comment) | Node::BlockComment(comment) => {
                map.serialize_entry("value", &Lines(comment.text()))?
            }
            Node::Assignment(assignment) => {
                map.serialize_entry("identifier", assignment.identifier())?;
                map.serialize_entry("value", assignment.value())?;
            }
            Node::Block(block) => map.serialize_entry("statements", block.statements())?,
            Node::BinaryOperator(operator) => {
                map.serialize_entry("operator", operator.operator())?;
                map.serialize_entry("leftValue", operator.left())?;
                map.serialize_entry("rightValue", operator.right())?;
            }
            Node::UnaryOperator(operator) => {
                map.serialize_entry("operator", operator.operator())?;
                map.serialize_entry("value", operator.value())?;
            }
            Node::Use(statement) | Node::Include(statement) => {
                map.serialize_entry("path", statement.path())?
            }
        }

        if let Some(start) = self.start() {
            map.serialize_entry("start", &start)?;
        }
        if let Some(end) = self.end() {
            map.serialize_entry("end", &end)?;
        }
        map.end()
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Null => serializer.serialize_unit(),
            Field::Bool(value) => serializer.serialize_bool(*value),
            Field::Number(value) => Number(*value).serialize(serializer),
            Field::Text(text) => serializer.serialize_str(text),
            Field::List(items) => items.serialize(serializer),
            Field::Node(node) => node.serialize(serializer),
            Field::Position(position) => position.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: usize, column: usize, offset: usize) -> Position {
        Position::new(line, column, offset).unwrap()
    }

    #[test]
    fn test_position_shape() {
        let json = serde_json::to_string(&pos(1, 6, 5)).unwrap();
        assert_eq!(json, r#"{"type":"position","line":1,"column":6,"offset":5}"#);
    }

    #[test]
    fn test_unplaced_node_omits_positions() {
        let json = serde_json::to_string(&Node::number(42.0)).unwrap();
        assert_eq!(json, r#"{"type":"number","value":42}"#);
    }

    #[test]
    fn test_fractional_and_nan_numbers() {
        assert_eq!(
            serde_json::to_string(&Node::number(1.5)).unwrap(),
            r#"{"type":"number","value":1.5}"#
        );
        assert_eq!(
            serde_json::to_string(&Node::number(f64::NAN)).unwrap(),
            r#"{"type":"number","value":null}"#
        );
    }

    #[test]
    fn test_operator_field_order() {
        let node = Node::binary_operator(Node::number(1.0), "+", Node::number(2.0))
            .start_at(pos(1, 1, 0))
            .and_then(|n| n.end_at(pos(1, 6, 5)))
            .unwrap();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"type":"binary_operator","operator":"+","#,
                r#""leftValue":{"type":"number","value":1},"#,
                r#""rightValue":{"type":"number","value":2},"#,
                r#""start":{"type":"position","line":1,"column":1,"offset":0},"#,
                r#""end":{"type":"position","line":1,"column":6,"offset":5}}"#
            )
        );
    }

    #[test]
    fn test_block_comment_lines() {
        let json = serde_json::to_string(&Node::block_comment("a\nb")).unwrap();
        assert_eq!(json, r#"{"type":"block_comment","value":["a","b"]}"#);
        let json = serde_json::to_string(&Node::undefined()).unwrap();
        assert_eq!(json, r#"{"type":"undefined","value":null}"#);
    }

    #[test]
    fn test_fields_serialize_like_nodes() {
        let node = Node::identifier("foo");
        let via_field = serde_json::to_string(&Field::Node(node.clone())).unwrap();
        assert_eq!(via_field, serde_json::to_string(&node).unwrap());
    }
}
