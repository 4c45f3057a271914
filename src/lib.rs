//! # Junban - Execution-Order Compiler for Test Definitions
//!
//! **Junban** turns a parsed, hierarchical API security test definition into a
//! flat, ordered list of executable steps plus the execution-wide directives the
//! runtime has to honour (currently whether HTTP redirects are followed).
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Tree**: Parse your test definition into a `TestStepNode` tree, either by
//!     implementing `IntoTestTree` for your own parsed model or by loading the JSON
//!     interchange shape with `definition::load_tree_json`.
//! 2.  **Compile**: Call `compile` on the root. The result is an `ExecutionPlan` that borrows
//!     the scheduled nodes from the tree.
//! 3.  **Execute or Store**: Hand `plan.steps()` to your runtime in order, or snapshot the plan
//!     into a `CompiledPlan` and store it next to the definition.
//!
//! ## Tree Shape
//!
//! The root's children are top-level sections. Section `0` holds metadata, section `1`
//! holds the operations. Inside the operations, `type`, `validate` and `follow_redirect`
//! nodes, as well as `TerminalNonExecutable` nodes, are never scheduled and neither is
//! anything beneath them.
//!
//! ## Quick Start
//!
//! ```rust
//! use junban::prelude::*;
//!
//! let root = TestStepNode::non_terminal("root").with_children([
//!     TestStepNode::non_executable("info").with_values("BOLA by replacing the auth token"),
//!     TestStepNode::non_terminal("execute").with_children([
//!         TestStepNode::non_executable("type").with_values("false"),
//!         TestStepNode::terminal("replace_auth_header"),
//!         TestStepNode::non_terminal("validate")
//!             .with_child(TestStepNode::terminal("response_code")),
//!         TestStepNode::non_terminal("modify_body")
//!             .with_child(TestStepNode::terminal("add_body_param")),
//!     ]),
//! ]);
//!
//! let plan = compile(&root);
//! assert!(plan.is_executable());
//! assert!(!plan.follow_redirects());
//!
//! let operations: Vec<_> = plan.nodes().map(|n| n.operation_kind().to_string()).collect();
//! assert_eq!(operations, ["replace_auth_header", "modify_body", "add_body_param"]);
//!
//! println!("{}", PlanFormatter::format_plan(&plan));
//! ```

pub mod compiler;
pub mod definition;
pub mod error;
pub mod node;
pub mod plan;
pub mod prelude;

pub use compiler::{compile, compile_batch};
