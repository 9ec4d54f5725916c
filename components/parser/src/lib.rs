//! Data Literal Parser Component
//!
//! Provides the lexer, parser and AST for a small literal data language of
//! integers, atoms, booleans, lists, tuples and maps.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes source text
//! - [`Token`] - Token with kind, lexeme and byte offset
//! - [`Parser`] - Recursive descent parser producing AST nodes
//! - [`Node`] - Tagged AST node, serializable with serde
//!
//! # Example
//!
//! ```
//! use parser::{parse, Node};
//!
//! let nodes = parse("%{name: 1}").unwrap();
//! assert_eq!(nodes, vec![Node::Map(vec![(Node::atom(":name"), Node::int(1))])]);
//!
//! let json = serde_json::to_string(&nodes[0]).unwrap();
//! assert!(json.starts_with(r#"{"%k":"map""#));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Node, NodeKind};
pub use core_types::SyntaxError;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

/// Tokenize `source`, ending with an EOF token
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Parse `source` into its top-level literals
pub fn parse(source: &str) -> Result<Vec<Node>, SyntaxError> {
    Parser::new(source).parse()
}
