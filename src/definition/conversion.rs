use crate::error::DefinitionError;
use crate::node::TestStepNode;

/// A trait for parsed test definitions that can be converted into a `TestStepNode` tree.
///
/// This is the boundary to whatever parser reads the authored test definition.
/// Implement it on your own parsed representation to hand the tree to the compiler.
///
/// # Example
///
/// ```rust
/// use junban::prelude::*;
/// use junban::definition::IntoTestTree;
/// use junban::error::DefinitionError;
///
/// struct MyStep { name: String }
/// struct MyTest { id: String, steps: Vec<MyStep> }
///
/// impl IntoTestTree for MyTest {
///     fn into_tree(self) -> std::result::Result<TestStepNode, DefinitionError> {
///         if self.steps.is_empty() {
///             return Err(DefinitionError::ValidationError(format!("{} has no steps", self.id)));
///         }
///         Ok(TestStepNode::non_terminal("root").with_children([
///             TestStepNode::non_executable("id").with_values(self.id),
///             TestStepNode::non_terminal("execute")
///                 .with_children(self.steps.into_iter().map(|s| TestStepNode::terminal(s.name.as_str()))),
///         ]))
///     }
/// }
/// ```
pub trait IntoTestTree {
    /// Consumes the object and converts it into a test tree.
    fn into_tree(self) -> Result<TestStepNode, DefinitionError>;
}

impl IntoTestTree for TestStepNode {
    fn into_tree(self) -> Result<TestStepNode, DefinitionError> {
        Ok(self)
    }
}
