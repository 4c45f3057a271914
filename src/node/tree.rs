use super::{NodeKind, OperationKind};
use std::fmt;

/// A node in the parsed tree form of a test definition.
///
/// The model is a plain data holder: it never checks structural well-formedness.
/// Children are owned, so a node can appear only once and cycles are unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct TestStepNode {
    node_kind: NodeKind,
    operation_kind: OperationKind,
    values: Option<serde_json::Value>,
    children: Vec<TestStepNode>,
}

impl TestStepNode {
    pub fn new(node_kind: NodeKind, operation_kind: impl Into<OperationKind>) -> Self {
        Self {
            node_kind,
            operation_kind: operation_kind.into(),
            values: None,
            children: Vec::new(),
        }
    }

    pub fn terminal(operation: impl Into<OperationKind>) -> Self {
        Self::new(NodeKind::Terminal, operation)
    }

    pub fn non_terminal(operation: impl Into<OperationKind>) -> Self {
        Self::new(NodeKind::NonTerminal, operation)
    }

    pub fn non_executable(operation: impl Into<OperationKind>) -> Self {
        Self::new(NodeKind::TerminalNonExecutable, operation)
    }

    pub fn with_values(mut self, values: impl Into<serde_json::Value>) -> Self {
        self.values = Some(values.into());
        self
    }

    pub fn with_child(mut self, child: TestStepNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TestStepNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn node_kind(&self) -> NodeKind {
        self.node_kind
    }

    pub fn operation_kind(&self) -> &OperationKind {
        &self.operation_kind
    }

    pub fn values(&self) -> Option<&serde_json::Value> {
        self.values.as_ref()
    }

    pub fn children(&self) -> &[TestStepNode] {
        &self.children
    }

    /// Follows a child-index path from this node.
    pub fn get(&self, path: &[usize]) -> Option<&TestStepNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}

impl fmt::Display for TestStepNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_as_tree(f, "", true)
    }
}

impl TestStepNode {
    fn fmt_as_tree(&self, f: &mut fmt::Formatter<'_>, prefix: &str, is_last: bool) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}{} [{}]", prefix, node_marker, self.operation_kind, self.node_kind)?;
        match &self.values {
            Some(values) => writeln!(f, " = {}", values)?,
            None => writeln!(f)?,
        }

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let last_index = self.children.len().saturating_sub(1);
        for (index, child) in self.children.iter().enumerate() {
            child.fmt_as_tree(f, &child_prefix, index == last_index)?;
        }
        Ok(())
    }
}
