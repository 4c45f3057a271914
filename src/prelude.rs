//! Prelude module for convenient imports
//!
//! Re-exports the types needed to build a tree, compile it and inspect the plan.
//!
//! # Example
//!
//! ```rust,no_run
//! use junban::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let root = load_tree_file("path/to/test_tree.json")?;
//! let plan = compile(&root);
//!
//! if let Some(error) = plan.error() {
//!     eprintln!("Skipping test case: {}", error);
//! } else {
//!     for step in plan.steps() {
//!         println!("{}", step.node.operation_kind());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{compile, compile_batch};

// Tree model
pub use crate::definition::{IntoTestTree, RawStepNode, load_tree_file, load_tree_json};
pub use crate::node::{NodeKind, OperationKind, TestStepNode};

// Plans
pub use crate::plan::{
    CompiledPlan, ExecutionPlan, PlanFormatter, PlannedStep, ScheduledStep, fingerprint,
};

// Error types
pub use crate::error::{ArtifactError, DefinitionError, PlanError, PlanWarning};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
