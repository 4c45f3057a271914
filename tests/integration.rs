//! Integration tests for Junban
//!
//! End-to-end: JSON tree -> node model -> plan -> stored artifact.
//!
mod common;
use common::*;
use junban::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_json_tree_compiles_like_built_tree() {
        let loaded = load_tree_json(REFERENCE_TREE_JSON).expect("Failed to load tree");
        let plan = compile(&loaded);

        assert!(plan.is_executable());
        assert!(!plan.follow_redirects());
        assert_eq!(scheduled_operations(&plan), ["StepA", "StepB", "StepC"]);
        assert_eq!(loaded.children()[1].children()[0].operation_kind(), &OperationKind::Type);
    }

    #[test]
    fn test_unknown_node_kind_reports_path() {
        let json = r#"{
            "nodeType": "NonTerminal",
            "operationType": "root",
            "childNodes": [
                { "nodeType": "NonTerminal", "operationType": "info" },
                {
                    "nodeType": "NonTerminal",
                    "operationType": "execute",
                    "childNodes": [ { "nodeType": "Data", "operationType": "send_request" } ]
                }
            ]
        }"#;

        match load_tree_json(json) {
            Err(DefinitionError::UnknownNodeKind { path, value }) => {
                assert_eq!(path, vec![1, 0]);
                assert_eq!(value, "Data");
            }
            other => panic!("Expected UnknownNodeKind error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = load_tree_json("{ \"nodeType\": ");
        assert!(matches!(result, Err(DefinitionError::JsonParseError(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_tree_file("does/not/exist.json");
        assert!(matches!(result, Err(DefinitionError::Io { .. })));
    }

    #[test]
    fn test_raw_tree_serializes_back_to_interchange_shape() {
        let raw: RawStepNode = serde_json::from_str(REFERENCE_TREE_JSON).expect("Failed to parse");
        let value = serde_json::to_value(&raw).expect("Failed to serialize");

        assert_eq!(value["childNodes"][1]["operationType"], "execute");
        assert_eq!(value["childNodes"][1]["childNodes"][3]["nodeType"], "NONTERMINAL");
    }

    #[test]
    fn test_compiled_plan_survives_bytes() {
        let root = load_tree_json(REFERENCE_TREE_JSON).expect("Failed to load tree");
        let plan = compile(&root);
        let artifact = CompiledPlan::from_plan(&root, &plan);

        assert_eq!(artifact.steps.len(), 3);
        assert_eq!(artifact.steps[2].path, vec![1, 3, 0]);
        assert!(artifact.error.is_none());
        assert!(artifact.is_current_for(&root));

        let bytes = artifact.to_bytes().expect("Failed to encode");
        let restored = CompiledPlan::from_bytes(&bytes).expect("Failed to decode");
        assert_eq!(restored, artifact);
        assert!(!restored.follow_redirects);
    }

    #[test]
    fn test_compiled_plan_file_and_staleness() {
        let root = create_nested_tree();
        let plan = compile(&root);
        let artifact = CompiledPlan::from_plan(&root, &plan);

        let dir = std::env::temp_dir().join("junban_integration");
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        let path = dir.join(format!("nested_plan_{}.bin", std::process::id()));
        let path = path.to_str().expect("temp path should be UTF-8");

        artifact.save(path).expect("Failed to save plan");
        let loaded = CompiledPlan::from_file(path).expect("Failed to load plan");
        assert_eq!(loaded, artifact);
        assert_eq!(loaded.steps[2].values.as_deref(), Some(r#"{"x-a":"1"}"#));

        assert!(!loaded.is_current_for(&create_reference_tree()));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_rejected_plan_artifact_keeps_error() {
        let root = TestStepNode::non_terminal("root").with_child(create_metadata_section());
        let plan = compile(&root);
        let artifact = CompiledPlan::from_plan(&root, &plan);

        assert!(artifact.steps.is_empty());
        assert!(artifact.error.is_some());
        assert!(artifact.follow_redirects);
    }

    #[test]
    fn test_custom_tree_conversion() {
        struct Scenario {
            follow: bool,
            requests: Vec<&'static str>,
        }

        impl IntoTestTree for Scenario {
            fn into_tree(self) -> std::result::Result<TestStepNode, DefinitionError> {
                let mut operations = vec![TestStepNode::non_executable("type").with_values(self.follow)];
                operations.extend(self.requests.into_iter().map(TestStepNode::terminal));
                Ok(root_with_operations(operations))
            }
        }

        let root = Scenario {
            follow: false,
            requests: vec!["replay", "compare"],
        }
        .into_tree()
        .expect("Conversion failed");
        let plan = compile(&root);

        assert!(!plan.follow_redirects());
        assert_eq!(scheduled_operations(&plan), ["replay", "compare"]);
    }

    #[test]
    fn test_compiled_plan_from_other_version_is_stale() {
        let root = create_reference_tree();
        let plan = compile(&root);
        let mut artifact = CompiledPlan::from_plan(&root, &plan);

        assert_eq!(artifact.crate_version, env!("CARGO_PKG_VERSION"));
        assert!(artifact.is_current_for(&root));

        artifact.crate_version = "0.0.0-older".to_string();
        assert!(!artifact.is_current_for(&root));
    }
}
