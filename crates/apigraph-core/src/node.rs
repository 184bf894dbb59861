//! Graph nodes and their free-form property bags.
//!
//! A [`Node`] is exactly what the designer exported: an id, optional
//! `source`/`target` links, an optional display name, and a [`Properties`]
//! map whose keys drive routing and middleware policy. Nodes are never
//! mutated after load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::id::{Link, NodeId};

/// Name given to routes whose node has no `name`.
pub const UNNAMED_ROUTE: &str = "Unnamed Route";

/// Value of `properties.type` that marks a node as an entry point.
pub const ENTRY_TYPE: &str = "entry";

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// String-keyed property map attached to every node.
///
/// Keys with policy meaning: `type`, `allowed_origins`, `log_requests`,
/// `auth_required`, `admin_required`, `endpoint`, `method`. Any other key is
/// carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    pub fn new() -> Self {
        Properties(Map::new())
    }

    /// Builder-style insert, mostly for tests and programmatic graphs.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Key present, whatever its value (including `null` or `false`).
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Key present and its value is truthy.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(truthy)
    }

    /// `None` when absent, otherwise the truthiness of the value.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).map(truthy)
    }

    /// Textual value of a key. Strings come back verbatim; other values as
    /// compact JSON.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(value_text)
    }

    /// `properties.type`, when it is a string.
    pub fn kind(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(map: Map<String, Value>) -> Self {
        Properties(map)
    }
}

/// Text form of a JSON value: strings verbatim, anything else as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn name_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .map(value_text))
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Whether a node seeds a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// No `source`, or `properties.type == "entry"`.
    Entry,
    NonEntry,
}

/// A single node of the API graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Presence is all that matters; any non-null value is kept as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    /// Outgoing edge(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Link>,
    /// Non-string names are kept in their JSON text form.
    #[serde(
        default,
        deserialize_with = "name_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
}

impl Node {
    /// A bare node with no links, name, or properties. Being source-less it
    /// starts out as an entry node.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            source: None,
            target: None,
            name: None,
            properties: Properties::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<NodeId>) -> Self {
        self.source = Some(Value::from(source.into()));
        self
    }

    pub fn with_target(mut self, target: impl Into<NodeId>) -> Self {
        self.target = Some(Link::One(target.into()));
        self
    }

    pub fn with_targets<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.target = Some(Link::Many(targets.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn kind(&self) -> NodeKind {
        if self.source.is_none() || self.properties.kind() == Some(ENTRY_TYPE) {
            NodeKind::Entry
        } else {
            NodeKind::NonEntry
        }
    }

    /// Ids this node has edges to, in declaration order.
    pub fn targets(&self) -> Vec<NodeId> {
        self.target.as_ref().map(Link::ids).unwrap_or_default()
    }

    /// Name used for the route record this node may define.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_ROUTE)
    }

    /// Route nodes declare both `endpoint` and `method`.
    pub fn is_route(&self) -> bool {
        self.properties.contains("endpoint") && self.properties.contains("method")
    }
}
