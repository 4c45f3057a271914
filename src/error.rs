use thiserror::Error;

/// Structural problems that make a test tree non-executable.
///
/// These are carried inside an `ExecutionPlan` rather than returned as `Err`,
/// so a batch of test cases keeps going when one of them is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error(
        "Test tree root has {found} top-level section(s), at least 2 are required; nothing to execute"
    )]
    TooFewSections { found: usize },

    #[error("Operations section (root child 1) has no children; nothing to execute")]
    EmptyOperationsSection,
}

/// Non-fatal findings raised while compiling a plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanWarning {
    #[error(
        "Redirect directive value '{value}' is not a boolean, keeping follow_redirects = true"
    )]
    UnreadableRedirectDirective { value: String },
}

/// Errors that can occur when converting a serialized or custom tree into a `TestStepNode`.
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Failed to parse test tree JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to read test tree file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Node at path {path:?} has an unknown node type: '{value}'")]
    UnknownNodeKind { path: Vec<usize>, value: String },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while saving or loading a compiled plan artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),
}
