use crate::node::{NodeKind, OperationKind, TestStepNode};
use crate::plan::ScheduledStep;

/// What the traversal does with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Skip the node and its whole subtree.
    Prune,
    /// Append the node, then descend into its children.
    Schedule,
}

/// The single decision table for scheduling. Reserved operations and
/// non-executable leaves prune, whatever their children hold.
pub fn classify(node: &TestStepNode) -> Disposition {
    match (node.operation_kind(), node.node_kind()) {
        (OperationKind::Type | OperationKind::Validate | OperationKind::FollowRedirect, _) => {
            Disposition::Prune
        }
        (OperationKind::Operation(_), NodeKind::TerminalNonExecutable) => Disposition::Prune,
        (OperationKind::Operation(_), NodeKind::Terminal | NodeKind::NonTerminal) => {
            Disposition::Schedule
        }
    }
}

/// Pre-order, left-to-right flattening of `node`'s subtree into `out`,
/// keeping only schedulable nodes.
pub fn expand<'a>(node: &'a TestStepNode, out: &mut Vec<&'a TestStepNode>) {
    let mut steps = Vec::new();
    expand_at(node, &mut Vec::new(), &mut steps);
    out.extend(steps.into_iter().map(|step| step.node));
}

/// Same walk as [`expand`], recording each step's path. `path` is the path of
/// `node` itself and is restored before returning.
pub(crate) fn expand_at<'a>(
    node: &'a TestStepNode,
    path: &mut Vec<usize>,
    out: &mut Vec<ScheduledStep<'a>>,
) {
    match classify(node) {
        Disposition::Prune => {
            if !node.children().is_empty() {
                tracing::debug!(
                    path = ?path,
                    operation = %node.operation_kind(),
                    pruned = node.children().len(),
                    "Pruned subtree"
                );
            }
        }
        Disposition::Schedule => {
            out.push(ScheduledStep {
                path: path.clone(),
                node,
            });
            for (index, child) in node.children().iter().enumerate() {
                path.push(index);
                expand_at(child, path, out);
                path.pop();
            }
        }
    }
}
