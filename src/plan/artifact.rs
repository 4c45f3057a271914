use super::{ExecutionPlan, fingerprint};
use crate::error::ArtifactError;
use crate::node::{NodeKind, OperationKind, TestStepNode};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An owned snapshot of one scheduled step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub path: Vec<usize>,
    pub node_kind: NodeKind,
    pub operation: OperationKind,
    /// The node's value rendered as JSON text.
    pub values: Option<String>,
}

/// A compiled plan detached from its source tree, suitable for storing next
/// to a test definition and reloading while the definition is unchanged.
///
/// The fingerprint is only comparable within one build of this crate, so the
/// crate version is stored with it. A plan written by another version is
/// treated as stale and simply recompiled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompiledPlan {
    pub crate_version: String,
    pub fingerprint: u64,
    pub follow_redirects: bool,
    pub error: Option<String>,
    pub steps: Vec<PlannedStep>,
}

impl CompiledPlan {
    /// Snapshots `plan`, which must have been compiled from `root`.
    pub fn from_plan(root: &TestStepNode, plan: &ExecutionPlan<'_>) -> Self {
        let steps = plan
            .steps()
            .iter()
            .map(|step| PlannedStep {
                path: step.path.clone(),
                node_kind: step.node.node_kind(),
                operation: step.node.operation_kind().clone(),
                values: step.node.values().map(|v| v.to_string()),
            })
            .collect();

        Self {
            crate_version: CRATE_VERSION.to_string(),
            fingerprint: fingerprint(root),
            follow_redirects: plan.follow_redirects(),
            error: plan.error().map(|e| e.to_string()),
            steps,
        }
    }

    /// Whether this snapshot was compiled by this crate version from a tree equal to `root`.
    pub fn is_current_for(&self, root: &TestStepNode) -> bool {
        self.crate_version == CRATE_VERSION && self.fingerprint == fingerprint(root)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Saves the compiled plan to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a compiled plan from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not open file '{}': {}", path, e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(plan, _)| plan)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }
}
