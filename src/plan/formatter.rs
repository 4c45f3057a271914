use super::ExecutionPlan;
use itertools::Itertools;

/// Formats execution plans into human-readable strings
pub struct PlanFormatter;

impl PlanFormatter {
    /// One numbered line per step, followed by the directive and any warnings.
    pub fn format_plan(plan: &ExecutionPlan<'_>) -> String {
        if let Some(error) = plan.error() {
            return format!("Not executable: {}\n", error);
        }

        let mut result = String::new();
        if plan.is_empty() {
            result.push_str("(no executable steps)\n");
        }
        for (index, step) in plan.steps().iter().enumerate() {
            result.push_str(&format!(
                "{:>3}. {} [{}] @ {}",
                index + 1,
                step.node.operation_kind(),
                step.node.node_kind(),
                Self::format_path(&step.path)
            ));
            if let Some(values) = step.node.values() {
                result.push_str(&format!(" = {}", values));
            }
            result.push('\n');
        }

        result.push_str(&format!("follow_redirects: {}\n", plan.follow_redirects()));
        for warning in plan.warnings() {
            result.push_str(&format!("warning: {}\n", warning));
        }
        result
    }

    /// Renders a child-index path as `1/0/2`.
    pub fn format_path(path: &[usize]) -> String {
        path.iter().join("/")
    }
}
