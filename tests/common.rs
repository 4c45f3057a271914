//! Common test utilities for building test trees.
use junban::prelude::*;

/// Wraps an operations section into a root with a metadata section in front.
#[allow(dead_code)]
pub fn root_with_operations(operations: Vec<TestStepNode>) -> TestStepNode {
    TestStepNode::non_terminal("root").with_children([
        create_metadata_section(),
        TestStepNode::non_terminal("execute").with_children(operations),
    ])
}

#[allow(dead_code)]
pub fn create_metadata_section() -> TestStepNode {
    TestStepNode::non_terminal("info").with_children([
        TestStepNode::non_executable("name").with_values("Remove auth token"),
        TestStepNode::non_executable("severity").with_values("HIGH"),
    ])
}

/// The reference scenario:
///
/// `execute = [type(false), StepA, validate[StepHidden], StepB[StepC]]`
#[allow(dead_code)]
pub fn create_reference_tree() -> TestStepNode {
    root_with_operations(vec![
        TestStepNode::non_executable("type").with_values("false"),
        TestStepNode::terminal("StepA"),
        TestStepNode::non_terminal("validate").with_child(TestStepNode::terminal("StepHidden")),
        TestStepNode::non_terminal("StepB").with_child(TestStepNode::terminal("StepC")),
    ])
}

/// A nested operations section with no reserved nodes.
///
/// `execute = [requests[modify_header[add_header, delete_header], send_request]]`
#[allow(dead_code)]
pub fn create_nested_tree() -> TestStepNode {
    root_with_operations(vec![
        TestStepNode::non_terminal("requests").with_children([
            TestStepNode::non_terminal("modify_header").with_children([
                TestStepNode::terminal("add_header").with_values(serde_json::json!({"x-a": "1"})),
                TestStepNode::terminal("delete_header").with_values("authorization"),
            ]),
            TestStepNode::terminal("send_request"),
        ]),
    ])
}

/// Operation names of the scheduled steps, in order.
#[allow(dead_code)]
pub fn scheduled_operations(plan: &ExecutionPlan<'_>) -> Vec<String> {
    plan.nodes()
        .map(|node| node.operation_kind().to_string())
        .collect()
}

/// The reference scenario in the JSON interchange shape.
#[allow(dead_code)]
pub const REFERENCE_TREE_JSON: &str = r#"{
    "nodeType": "NonTerminal",
    "operationType": "root",
    "childNodes": [
        {
            "nodeType": "NonTerminal",
            "operationType": "info",
            "childNodes": [
                { "nodeType": "TerminalNonExecutable", "operationType": "name", "values": "Remove auth token" }
            ]
        },
        {
            "nodeType": "NonTerminal",
            "operationType": "execute",
            "childNodes": [
                { "nodeType": "TerminalNonExecutable", "operationType": "TYPE", "values": "FALSE" },
                { "nodeType": "terminal", "operationType": "StepA" },
                {
                    "nodeType": "NonTerminal",
                    "operationType": "Validate",
                    "childNodes": [ { "nodeType": "Terminal", "operationType": "StepHidden" } ]
                },
                {
                    "node_type": "NONTERMINAL",
                    "operation_type": "StepB",
                    "child_nodes": [ { "nodeType": "Terminal", "operationType": "StepC", "values": null } ]
                }
            ]
        }
    ]
}"#;
