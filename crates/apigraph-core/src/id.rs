//! Node identifiers and edge references.
//!
//! API designer exports use either integer or string ids, so [`NodeId`] keeps
//! both forms distinct: `1` and `"1"` never refer to the same node.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stable node identifier as it appears in the input graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Integer id, e.g. `"id": 3`.
    Num(i64),
    /// String id, e.g. `"id": "login-route"`.
    Name(String),
}

impl NodeId {
    /// Returns `true` for ids that count as "no edge" when used as a target
    /// (`0` and the empty string).
    pub fn is_falsy(&self) -> bool {
        match self {
            NodeId::Num(n) => *n == 0,
            NodeId::Name(s) => s.is_empty(),
        }
    }

    /// Reads an id out of an arbitrary JSON value. Integral floats (`2.0`)
    /// count as integers; anything that is not a number or string has no id.
    pub fn from_value(value: &Value) -> Option<NodeId> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(NodeId::Num(i)),
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| NodeId::Num(f as i64)),
            },
            Value::String(s) => Some(NodeId::Name(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Num(n) => write!(f, "{}", n),
            NodeId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Num(n)
    }
}

impl From<i32> for NodeId {
    fn from(n: i32) -> Self {
        NodeId::Num(i64::from(n))
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Name(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Name(s)
    }
}

impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        match id {
            NodeId::Num(n) => Value::from(n),
            NodeId::Name(s) => Value::String(s),
        }
    }
}

/// A `target` reference: a single id or an ordered list of ids.
///
/// Decoding never fails. Values that cannot name a node (`true`, objects,
/// nested lists) contribute no edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Link {
    One(NodeId),
    Many(Vec<NodeId>),
}

impl Link {
    pub fn from_value(value: &Value) -> Link {
        match value {
            Value::Array(items) => Link::Many(items.iter().filter_map(NodeId::from_value).collect()),
            other => match NodeId::from_value(other) {
                Some(id) => Link::One(id),
                None => Link::Many(Vec::new()),
            },
        }
    }

    /// Ids this link points at, in declaration order.
    ///
    /// A falsy scalar (`0`, `""`) yields nothing; list elements are yielded
    /// as-is.
    pub fn ids(&self) -> Vec<NodeId> {
        match self {
            Link::One(id) if id.is_falsy() => Vec::new(),
            Link::One(id) => vec![id.clone()],
            Link::Many(ids) => ids.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Link::from_value(&value))
    }
}

impl From<NodeId> for Link {
    fn from(id: NodeId) -> Self {
        Link::One(id)
    }
}
