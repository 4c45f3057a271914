use super::IntoTestTree;
use crate::error::DefinitionError;
use crate::node::{NodeKind, OperationKind, TestStepNode};
use serde::{Deserialize, Serialize};
use std::fs;

/// The JSON interchange shape of an already-parsed test tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStepNode {
    #[serde(rename = "nodeType", alias = "node_type")]
    pub node_type: String,
    #[serde(rename = "operationType", alias = "operation_type")]
    pub operation_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
    #[serde(default, rename = "childNodes", alias = "child_nodes")]
    pub child_nodes: Vec<RawStepNode>,
}

impl IntoTestTree for RawStepNode {
    fn into_tree(self) -> Result<TestStepNode, DefinitionError> {
        convert(self, &mut Vec::new())
    }
}

fn convert(raw: RawStepNode, path: &mut Vec<usize>) -> Result<TestStepNode, DefinitionError> {
    let node_kind: NodeKind =
        raw.node_type
            .parse()
            .map_err(|_| DefinitionError::UnknownNodeKind {
                path: path.clone(),
                value: raw.node_type.clone(),
            })?;

    let mut node = TestStepNode::new(node_kind, OperationKind::parse(&raw.operation_type));
    if let Some(values) = raw.values {
        node = node.with_values(values);
    }

    let mut children = Vec::with_capacity(raw.child_nodes.len());
    for (index, child) in raw.child_nodes.into_iter().enumerate() {
        path.push(index);
        children.push(convert(child, path)?);
        path.pop();
    }
    Ok(node.with_children(children))
}

/// Parses a JSON document in the `RawStepNode` shape into a test tree.
pub fn load_tree_json(json: &str) -> Result<TestStepNode, DefinitionError> {
    let raw: RawStepNode = serde_json::from_str(json)?;
    raw.into_tree()
}

/// Reads and parses a JSON test tree from disk.
pub fn load_tree_file(path: &str) -> Result<TestStepNode, DefinitionError> {
    let content = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.to_string(),
        source,
    })?;
    load_tree_json(&content)
}
