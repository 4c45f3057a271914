use crate::error::{PlanError, PlanWarning};
use crate::node::TestStepNode;

pub mod artifact;
pub mod fingerprint;
pub mod formatter;

pub use artifact::*;
pub use fingerprint::*;
pub use formatter::*;

/// A step selected for execution: a borrowed node plus its child-index path from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledStep<'a> {
    pub path: Vec<usize>,
    pub node: &'a TestStepNode,
}

/// The ordered steps and global directives produced by compiling a test tree.
///
/// A plan borrows from the tree it was compiled from; it is a read-only view,
/// built fresh per compilation and dropped once the runtime has consumed it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan<'a> {
    steps: Vec<ScheduledStep<'a>>,
    follow_redirects: bool,
    error: Option<PlanError>,
    warnings: Vec<PlanWarning>,
}

impl<'a> ExecutionPlan<'a> {
    pub const DEFAULT_FOLLOW_REDIRECTS: bool = true;

    pub(crate) fn new(
        steps: Vec<ScheduledStep<'a>>,
        follow_redirects: bool,
        warnings: Vec<PlanWarning>,
    ) -> Self {
        Self {
            steps,
            follow_redirects,
            error: None,
            warnings,
        }
    }

    pub(crate) fn rejected(error: PlanError) -> Self {
        Self {
            steps: Vec::new(),
            follow_redirects: Self::DEFAULT_FOLLOW_REDIRECTS,
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    /// Steps in execution order. Always empty when the plan carries an error.
    pub fn steps(&self) -> &[ScheduledStep<'a>] {
        if self.error.is_some() {
            &[]
        } else {
            &self.steps
        }
    }

    /// The scheduled nodes without their paths.
    pub fn nodes(&self) -> impl Iterator<Item = &'a TestStepNode> + '_ {
        self.steps().iter().map(|step| step.node)
    }

    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    pub fn error(&self) -> Option<&PlanError> {
        self.error.as_ref()
    }

    pub fn warnings(&self) -> &[PlanWarning] {
        &self.warnings
    }

    /// Whether the runtime may execute this plan.
    pub fn is_executable(&self) -> bool {
        self.error.is_none()
    }

    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps().is_empty()
    }
}
