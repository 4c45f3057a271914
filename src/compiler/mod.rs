use crate::error::PlanError;
use crate::node::{OperationKind, TestStepNode};
use crate::plan::{ExecutionPlan, ScheduledStep};

mod directive;
pub mod traversal;

pub use traversal::{Disposition, classify, expand};

/// Index of the operations section among the root's children.
pub const OPERATIONS_SECTION: usize = 1;

/// Compiles a test tree into an ordered execution plan.
///
/// Shape violations never panic: a root with fewer than two sections, or an
/// empty operations section, yields a plan whose `error` is set and whose
/// steps are empty. The input tree is only borrowed, so the same tree always
/// compiles to the same plan and compilations may run on any number of threads.
///
/// # Example
///
/// ```rust
/// use junban::prelude::*;
///
/// let root = TestStepNode::non_terminal("root").with_children([
///     TestStepNode::non_executable("id").with_values("REMOVE_TOKENS"),
///     TestStepNode::non_terminal("execute").with_children([
///         TestStepNode::non_executable("type").with_values("false"),
///         TestStepNode::terminal("modify_header"),
///         TestStepNode::terminal("send_request"),
///     ]),
/// ]);
///
/// let plan = compile(&root);
/// assert!(plan.is_executable());
/// assert!(!plan.follow_redirects());
/// assert_eq!(plan.len(), 2);
/// ```
pub fn compile(root: &TestStepNode) -> ExecutionPlan<'_> {
    let sections = root.children();
    if sections.len() <= OPERATIONS_SECTION {
        return reject(PlanError::TooFewSections {
            found: sections.len(),
        });
    }

    let operations = &sections[OPERATIONS_SECTION];
    let Some(first) = operations.children().first() else {
        return reject(PlanError::EmptyOperationsSection);
    };

    let mut warnings = Vec::new();
    let leads_with_directive = matches!(first.operation_kind(), OperationKind::Type);
    let follow_redirects = if leads_with_directive {
        directive::read_follow_redirects(first, &mut warnings)
    } else {
        ExecutionPlan::DEFAULT_FOLLOW_REDIRECTS
    };

    // A leading directive node is consumed above and pruned by the walk, so the
    // operations that follow it are walked as well.
    let walked = if leads_with_directive {
        operations.children().len()
    } else {
        1
    };

    let mut steps: Vec<ScheduledStep<'_>> = Vec::new();
    for (index, node) in operations.children().iter().enumerate().take(walked) {
        let mut path = vec![OPERATIONS_SECTION, index];
        traversal::expand_at(node, &mut path, &mut steps);
    }

    tracing::debug!(
        steps = steps.len(),
        follow_redirects,
        warnings = warnings.len(),
        "Compiled execution plan"
    );
    ExecutionPlan::new(steps, follow_redirects, warnings)
}

/// Compiles independent trees, one plan per input and in input order.
/// A malformed tree only marks its own plan as non-executable.
pub fn compile_batch<'a, I>(roots: I) -> Vec<ExecutionPlan<'a>>
where
    I: IntoIterator<Item = &'a TestStepNode>,
{
    roots.into_iter().map(compile).collect()
}

fn reject(error: PlanError) -> ExecutionPlan<'static> {
    tracing::error!("{}, returning empty execution plan", error);
    ExecutionPlan::rejected(error)
}
