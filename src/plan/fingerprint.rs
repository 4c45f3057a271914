use crate::node::TestStepNode;
use ahash::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};

// Fixed seeds keep fingerprints stable between processes of the same build.
// ahash output may change with its version or enabled CPU features, so a
// fingerprint must not be compared across builds.
const SEEDS: (u64, u64, u64, u64) = (
    0x6a75_6e62_616e_0001,
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
);

/// Structural hash of a test tree: kinds, operations, values and child order.
///
/// Equal trees share a fingerprint within the same build, which lets callers
/// reuse a stored plan for an unchanged test definition. `CompiledPlan` pairs
/// it with the crate version for that reason.
pub fn fingerprint(root: &TestStepNode) -> u64 {
    let mut hasher = RandomState::with_seeds(SEEDS.0, SEEDS.1, SEEDS.2, SEEDS.3).build_hasher();
    hash_node(root, &mut hasher);
    hasher.finish()
}

fn hash_node<H: Hasher>(node: &TestStepNode, state: &mut H) {
    node.node_kind().hash(state);
    node.operation_kind().hash(state);
    match node.values() {
        Some(values) => {
            true.hash(state);
            values.to_string().hash(state);
        }
        None => false.hash(state),
    }
    node.children().len().hash(state);
    for child in node.children() {
        hash_node(child, state);
    }
}
