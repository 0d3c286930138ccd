use indexmap::IndexMap;

use serde::{Deserialize, Serialize};

/// A node in the frequency model's prefix-tree.
///
/// A `TreeNode` is either the occurrence count of a full word sequence or
/// a nested mapping from the next word to its subtree. Training at a fixed
/// window depth keeps counts at a uniform level in practice, but the type
/// does not enforce that: counts and mappings may sit side by side, and
/// every traversal handles both kinds.
///
/// ## Invariants
/// - Stored counts are strictly positive
/// - Mappings preserve insertion order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum TreeNode {
	/// Occurrence count of a full word sequence.
	Leaf(u64),
	/// Mapping from the next word to its subtree.
	Node(IndexMap<String, TreeNode>),
}

impl TreeNode {
	/// Returns the aggregated weight of this node.
	///
	/// A count weighs itself; a mapping weighs the sum over its whole
	/// subtree. The traversal keeps an explicit worklist, so the depth of
	/// the tree never translates into call-stack depth.
	pub fn weight(&self) -> u64 {
		let mut total = 0;
		let mut pending = vec![self];

		while let Some(node) = pending.pop() {
			match node {
				TreeNode::Leaf(count) => total += count,
				TreeNode::Node(children) => pending.extend(children.values()),
			}
		}

		total
	}
}
