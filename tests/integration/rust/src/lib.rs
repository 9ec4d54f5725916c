//! Integration test suite for the data literal toolchain
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use lit_cli;
    pub use parser;
}

use parser::Node;

/// Render a node back into literal source text that parses to the same node.
///
/// Map keys that are atoms are written in `:name` form, which is also how the
/// parser stores them.
pub fn to_literal(node: &Node) -> String {
    match node {
        Node::Int(n) => n.to_string(),
        Node::Atom(s) => s.clone(),
        Node::Bool(b) => b.to_string(),
        Node::List(items) => format!("[{}]", join(items)),
        Node::Tuple(items) => format!("{{{}}}", join(items)),
        Node::Map(pairs) => {
            let pairs: Vec<String> = pairs
                .iter()
                .map(|(k, v)| format!("{} => {}", to_literal(k), to_literal(v)))
                .collect();
            format!("%{{{}}}", pairs.join(", "))
        }
    }
}

fn join(items: &[Node]) -> String {
    items.iter().map(to_literal).collect::<Vec<_>>().join(", ")
}
