//! Copy-with-overrides behaviour across every node kind
//!
//! Overrides are re-validated exactly as construction is, and a copy without overrides is an
//! equal but separate node.

use rstest::rstest;
use scad_ast::scad::ast::{AstError, Field, Fields, Node, NodeKind, Position};
use scad_ast::scad::building::{terminal, Token};

fn pos(line: usize, column: usize, offset: usize) -> Position {
    Position::new(line, column, offset).unwrap()
}

fn placed(node: Node, start: Position, end: Position) -> Node {
    node.start_at(start).and_then(|n| n.end_at(end)).unwrap()
}

fn path_node() -> Node {
    placed(Node::path("lib.scad"), pos(1, 5, 4), pos(1, 15, 14))
}

#[rstest]
#[case::number(Node::number(42.0))]
#[case::nan_number(Node::number(f64::NAN))]
#[case::string(Node::string("hello"))]
#[case::path(Node::path("lib.scad"))]
#[case::boolean(Node::boolean(false))]
#[case::identifier(Node::identifier("x"))]
#[case::undefined(Node::undefined())]
#[case::line_comment(Node::line_comment(" note"))]
#[case::block_comment(Node::block_comment("a\nb"))]
#[case::assignment(Node::assignment(Node::identifier("x"), Node::number(1.0)).unwrap())]
#[case::block(Node::block(vec![Node::number(1.0), Node::string("s")]))]
#[case::binary(Node::binary_operator(Node::number(1.0), "+", Node::number(2.0)))]
#[case::unary(Node::unary_operator("-", Node::number(2.0)))]
#[case::use_path(Node::use_path(path_node()).unwrap())]
#[case::include_path(Node::include_path(path_node()).unwrap())]
fn copy_without_overrides_is_equal(#[case] node: Node) {
    let copy = node.copy_with(Fields::new()).unwrap();
    assert_eq!(copy, node);
    assert_eq!(copy.copy_with(Fields::new()).unwrap(), node);

    let placed_node = placed(node, pos(1, 1, 0), pos(3, 2, 20));
    assert_eq!(placed_node.copy_with(Fields::new()).unwrap(), placed_node);
}

#[test]
fn copy_of_non_numeric_number_is_equal() {
    let node = terminal(&Token::new("abc", 1, 1, 0), "abc", "number").unwrap();
    assert!(matches!(&node, Node::Number(literal) if literal.value().is_nan()));
    assert_eq!(node.copy_with(Fields::new()).unwrap(), node);
    assert_ne!(node, Node::number(1.0));
}

#[test]
fn copy_with_merges_overrides() {
    let node = placed(
        Node::binary_operator(Node::number(1.0), "+", Node::number(2.0)),
        pos(1, 1, 0),
        pos(1, 6, 5),
    );
    let first = Fields::new().with("operator", "*").unwrap();
    let second = Fields::new()
        .with("rightValue", Node::identifier("y"))
        .unwrap();
    let merged = Fields::new()
        .with("operator", "*")
        .and_then(|f| f.with("rightValue", Node::identifier("y")))
        .unwrap();

    let chained = node.copy_with(first).unwrap().copy_with(second).unwrap();
    assert_eq!(chained, node.copy_with(merged).unwrap());
    assert_eq!(chained.fields().get("operator"), Some(&Field::from("*")));
    assert_eq!(chained.start(), Some(pos(1, 1, 0)));
}

#[test]
fn copy_with_replaces_positions() {
    let node = placed(Node::number(1.0), pos(1, 1, 0), pos(1, 2, 1));
    let moved = node
        .copy_with(Fields::new().with("start", pos(2, 1, 10)).unwrap())
        .unwrap();
    assert_eq!(moved.start(), Some(pos(2, 1, 10)));
    assert_eq!(moved.end(), Some(pos(1, 2, 1)));
    assert_eq!(node.start(), Some(pos(1, 1, 0)));
}

#[rstest]
#[case::start_not_position(
    Node::number(1.0),
    "start",
    Field::from("1:1"),
    AstError::InvalidPosition { field: "start".to_string(), found: "text \"1:1\"".to_string() }
)]
#[case::unknown_field(
    Node::number(1.0),
    "colour",
    Field::from("red"),
    AstError::UnknownField { kind: "number", field: "colour".to_string() }
)]
#[case::bad_boolean(
    Node::boolean(true),
    "value",
    Field::from("yes"),
    AstError::InvalidBoolean("text \"yes\"".to_string())
)]
fn copy_with_rejects_invalid_override(
    #[case] node: Node,
    #[case] name: &str,
    #[case] value: Field,
    #[case] expected: AstError,
) {
    let overrides = Fields::new().with(name, value).unwrap();
    assert_eq!(node.copy_with(overrides), Err(expected));
}

#[rstest]
#[case::assignment_identifier(
    Node::assignment(Node::identifier("x"), Node::number(1.0)).unwrap(),
    "identifier",
    Field::from(Node::string("x"))
)]
#[case::use_path(Node::use_path(path_node()).unwrap(), "path", Field::from(Node::string("lib")))]
#[case::binary_operand(
    Node::binary_operator(Node::number(1.0), "+", Node::number(2.0)),
    "leftValue",
    Field::from(3.0)
)]
#[case::unary_operand(Node::unary_operator("!", Node::boolean(true)), "value", Field::Null)]
#[case::block_statement(Node::block(vec![]), "statements", Field::List(vec![Field::from("x")]))]
#[case::comment_lines(
    Node::block_comment("a"),
    "value",
    Field::List(vec![Field::from("a"), Field::from(1.0)])
)]
fn copy_with_rejects_wrong_child(#[case] node: Node, #[case] name: &str, #[case] value: Field) {
    let overrides = Fields::new().with(name, value).unwrap();
    assert!(matches!(
        node.copy_with(overrides),
        Err(AstError::InvalidChildType { .. })
    ));
}

#[test]
fn block_wraps_single_statement() {
    let block = Node::block(vec![])
        .copy_with(Fields::new().with("statements", Node::number(1.0)).unwrap())
        .unwrap();
    assert_eq!(block, Node::block(vec![Node::number(1.0)]));
}

#[test]
fn add_field_is_single_use() {
    let mut fields = Fields::new();
    fields.add("value", 1.0).unwrap();
    assert_eq!(
        fields.add("value", 2.0),
        Err(AstError::FieldAlreadySet("value".to_string()))
    );
    assert_eq!(fields.get("value"), Some(&Field::Number(1.0)));
}

#[test]
fn placement_is_write_once() {
    let node = Node::identifier("x").start_at(pos(1, 1, 0)).unwrap();
    assert_eq!(
        node.start_at(pos(2, 1, 5)),
        Err(AstError::FieldAlreadySet("start".to_string()))
    );
}

#[test]
fn factory_names_cover_every_kind() {
    for kind in NodeKind::ALL {
        assert_eq!(kind.name().parse::<NodeKind>(), Ok(kind));
    }
}
