//! Lexer + Parser Integration Tests
//!
//! Drives source text through tokenization, parsing and serialization and
//! checks the properties every caller relies on.

use integration_tests::to_literal;
use num_bigint::BigInt;
use parser::{parse, tokenize, Node, NodeKind, TokenKind};
use serde_json::json;

const SAMPLE: &str = r#"
# A configuration-like document
%{
  name: :server,
  :port => 8_080,
  enabled: true,
  tags: [:web, :api],
  limits: {1_000, -1},
  nested: %{deep: %{}}
}

[1, [2, [3, []]]]
{}
"#;

/// Test: one node per top-level literal, in source order
#[test]
fn test_top_level_literals_in_order() {
    let nodes = parse(SAMPLE).expect("sample should parse");
    let kinds: Vec<NodeKind> = nodes.iter().map(Node::kind).collect();
    assert_eq!(kinds, vec![NodeKind::Map, NodeKind::List, NodeKind::Tuple]);
}

/// Test: literal -> AST -> literal -> AST is stable
#[test]
fn test_round_trip_through_literal_text() {
    let nodes = parse(SAMPLE).unwrap();
    for node in &nodes {
        let text = to_literal(node);
        let reparsed = parse(&text).unwrap_or_else(|e| panic!("{}\n{}", text, e.render()));
        assert_eq!(reparsed, vec![node.clone()], "round trip of {}", text);
    }
}

/// Test: map keys are always normalized atoms in the sample
#[test]
fn test_map_keys_are_normalized_atoms() {
    let nodes = parse(SAMPLE).unwrap();
    let Node::Map(pairs) = &nodes[0] else {
        panic!("Expected map, got {:?}", nodes[0]);
    };
    let keys: Vec<&str> = pairs.iter().filter_map(|(k, _)| k.as_atom()).collect();
    assert_eq!(keys, vec![":name", ":port", ":enabled", ":tags", ":limits", ":nested"]);
}

/// Test: serialized form of the sample
#[test]
fn test_serialized_shapes() {
    let nodes = parse("%{port: 8_080} {-1, false}").unwrap();
    let value = serde_json::to_value(&nodes).unwrap();
    assert_eq!(
        value,
        json!([
            {"%k": "map", "%v": [
                [{"%k": "atom", "%v": ":port"}, {"%k": "int", "%v": 8080}]
            ]},
            {"%k": "tuple", "%v": [
                {"%k": "int", "%v": -1},
                {"%k": "bool", "%v": false}
            ]}
        ])
    );
}

/// Test: integers are unbounded
#[test]
fn test_large_integer_survives_serialization() {
    let nodes = parse("[340282366920938463463374607431768211456]").unwrap();
    let expected: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
    assert_eq!(nodes, vec![Node::List(vec![Node::Int(expected)])]);

    let json = serde_json::to_string(&nodes).unwrap();
    assert!(json.contains("340282366920938463463374607431768211456"));
}

/// Test: the lexer absorbs all newlines before the parser sees them
#[test]
fn test_no_newline_tokens_reach_parser() {
    let tokens = tokenize(SAMPLE);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Punct('\n')));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
}

/// Test: errors on later lines point into the right line
#[test]
fn test_error_in_multiline_document() {
    let source = "%{\n  a: 1,\n  b: [2,]\n}";
    let err = parse(source).unwrap_err();
    assert_eq!(err.position.line, 3);
    assert_eq!(err.line, "  b: [2,]");
    assert_eq!(
        err.render(),
        "error: expecting 'primitive literal' but got ']'\n  b: [2,]\n        ^"
    );
}

/// Test: an error at end of input lands on the last visible character
#[test]
fn test_error_at_end_of_input_with_trailing_newline() {
    let err = parse("{1, 2\n").unwrap_err();
    assert_eq!(err.found, "EOF");
    assert_eq!(err.line, "{1, 2");
    assert_eq!(err.position.column, 5);
}
