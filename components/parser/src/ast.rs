//! Abstract Syntax Tree node definitions
//!
//! Nodes serialize as `{"%k": <kind>, "%v": <value>}` objects.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use std::fmt;

/// A parsed data literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Signed integer of any size
    Int(BigInt),
    /// Atom, e.g. `:name`
    Atom(String),
    /// Boolean
    Bool(bool),
    /// `[a, b, ...]`
    List(Vec<Node>),
    /// `{a, b, ...}`
    Tuple(Vec<Node>),
    /// `%{key => value, ...}` as ordered key/value pairs
    Map(Vec<(Node, Node)>),
}

/// Tag naming the variant of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Integer node
    Int,
    /// Atom node
    Atom,
    /// Boolean node
    Bool,
    /// List node
    List,
    /// Tuple node
    Tuple,
    /// Map node
    Map,
}

impl NodeKind {
    /// Lowercase tag used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Int => "int",
            NodeKind::Atom => "atom",
            NodeKind::Bool => "bool",
            NodeKind::List => "list",
            NodeKind::Tuple => "tuple",
            NodeKind::Map => "map",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Build an integer node from anything convertible to `BigInt`
    pub fn int(value: impl Into<BigInt>) -> Self {
        Node::Int(value.into())
    }

    /// Build an atom node
    pub fn atom(value: impl Into<String>) -> Self {
        Node::Atom(value.into())
    }

    /// Kind tag of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Int(_) => NodeKind::Int,
            Node::Atom(_) => NodeKind::Atom,
            Node::Bool(_) => NodeKind::Bool,
            Node::List(_) => NodeKind::List,
            Node::Tuple(_) => NodeKind::Tuple,
            Node::Map(_) => NodeKind::Map,
        }
    }

    /// Integer value narrowed to `i64`, if this is an int that fits
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Int(n) => n.to_i64(),
            _ => None,
        }
    }

    /// Atom text, if this is an atom
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Node::Atom(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Child nodes of a list or tuple
    pub fn items(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) | Node::Tuple(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("%k", &self.kind())?;
        match self {
            Node::Int(n) => map.serialize_entry("%v", &IntValue(n))?,
            Node::Atom(s) => map.serialize_entry("%v", s)?,
            Node::Bool(b) => map.serialize_entry("%v", b)?,
            Node::List(items) | Node::Tuple(items) => map.serialize_entry("%v", items)?,
            Node::Map(pairs) => map.serialize_entry("%v", pairs)?,
        }
        map.end()
    }
}

/// Integers outside `i64` are written as exact JSON numbers.
struct IntValue<'a>(&'a BigInt);

impl Serialize for IntValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(n) = self.0.to_i64() {
            return serializer.serialize_i64(n);
        }
        let number: serde_json::Number =
            serde_json::from_str(&self.0.to_string()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}
