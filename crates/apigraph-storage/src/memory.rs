//! In-memory backend for tests and programmatic callers.

use crate::error::StorageError;
use crate::traits::GraphSource;
use crate::types::GraphConfig;

/// Holds a configuration as raw JSON text or an already decoded value.
#[derive(Debug, Clone)]
pub enum InMemorySource {
    Json(String),
    Config(GraphConfig),
}

impl InMemorySource {
    pub fn new(json: impl Into<String>) -> Self {
        InMemorySource::Json(json.into())
    }

    pub fn from_config(config: GraphConfig) -> Self {
        InMemorySource::Config(config)
    }
}

impl GraphSource for InMemorySource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> Result<GraphConfig, StorageError> {
        match self {
            InMemorySource::Json(raw) => Ok(serde_json::from_str(raw)?),
            InMemorySource::Config(config) => Ok(config.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::load_nodes;
    use apigraph_core::{Node, NodeId, NodeKind};

    #[test]
    fn json_source_decodes() {
        let source = InMemorySource::new(r#"{"nodes": [{"id": "a"}]}"#);
        let nodes = load_nodes(&source).unwrap();
        assert_eq!(nodes[0].id, NodeId::from("a"));
    }

    #[test]
    fn config_source_is_cloned_out() {
        let source = InMemorySource::from_config(GraphConfig::new(vec![Node::new(1)]));
        assert_eq!(load_nodes(&source).unwrap().len(), 1);
        assert_eq!(load_nodes(&source).unwrap().len(), 1);
    }

    #[test]
    fn loosely_typed_fields_still_load() {
        let source = InMemorySource::new(
            r#"{"nodes": [
                {"id": 1, "target": true},
                {"id": 2, "source": true, "name": 5,
                 "properties": {"endpoint": "/x", "method": "GET"}}
            ]}"#,
        );
        let nodes = load_nodes(&source).unwrap();
        assert!(nodes[0].targets().is_empty());
        assert_eq!(nodes[1].kind(), NodeKind::NonEntry);
        assert_eq!(nodes[1].display_name(), "5");
    }

    #[test]
    fn no_nodes_is_empty_graph() {
        let source = InMemorySource::new("{}");
        assert!(matches!(load_nodes(&source), Err(StorageError::EmptyGraph)));
    }
}
