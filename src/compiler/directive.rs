use crate::error::PlanWarning;
use crate::node::TestStepNode;
use crate::plan::ExecutionPlan;
use serde_json::Value;

/// Reads the follow-redirects flag from a `type` node's value.
///
/// Best effort: anything that is not a JSON boolean or a `true`/`false` string
/// keeps the default and leaves a warning behind.
pub(super) fn read_follow_redirects(node: &TestStepNode, warnings: &mut Vec<PlanWarning>) -> bool {
    match node.values().and_then(parse_bool) {
        Some(flag) => flag,
        None => {
            let warning = PlanWarning::UnreadableRedirectDirective {
                value: node
                    .values()
                    .map_or_else(|| "null".to_string(), render_value),
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
            ExecutionPlan::DEFAULT_FOLLOW_REDIRECTS
        }
    }
}

fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) if text.eq_ignore_ascii_case("true") => Some(true),
        Value::String(text) if text.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
