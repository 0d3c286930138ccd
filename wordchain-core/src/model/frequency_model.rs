use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::node::TreeNode;

/// Weighted prefix-tree of word adjacency, trained from a token stream.
///
/// The model records every window of `depth` consecutive tokens seen
/// during training: the first `depth - 1` tokens of a window form a path
/// of nested mappings, the final token an occurrence count at the end of
/// that path.
///
/// # Responsibilities
/// - Fold a token stream into sliding windows and count them
/// - Look up the weighted continuations of a context
///
/// # Invariants
/// - `depth` is always >= 1
/// - Every stored count is strictly positive
/// - Mappings preserve insertion order, so candidate iteration order is
///   the order tokens were first seen during training
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FrequencyModel {
	/// Number of tokens per training window (context plus next word).
	depth: usize, // must be >= 1

	/// Top level of the prefix-tree.
	root: IndexMap<String, TreeNode>,
}

impl FrequencyModel {
	/// Creates an empty model with the given window depth.
	///
	/// # Errors
	/// Returns an error if `depth < 1`.
	pub fn new(depth: usize) -> Result<Self, String> {
		if depth < 1 {
			return Err("depth must be >= 1".to_owned());
		}
		Ok(Self { depth, root: IndexMap::new() })
	}

	/// Returns the configured window depth.
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Returns `true` if no window has been trained yet.
	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}

	/// Returns the total weight of the model.
	///
	/// Equals the number of training windows folded in so far.
	pub fn total_weight(&self) -> u64 {
		self.root.values().map(TreeNode::weight).sum()
	}

	/// Trains the model on a token stream.
	///
	/// Slides a window of `depth` tokens over the stream, one token at a
	/// time, and counts every full window. A stream shorter than `depth`
	/// leaves the model unchanged.
	///
	/// # Notes
	/// - The stream is consumed lazily; nothing is collected up front.
	/// - A second call keeps counting into the same model, but the window
	///   restarts: two streams are not spliced together.
	pub fn train<I>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = String>,
	{
		let mut window: VecDeque<String> = VecDeque::with_capacity(self.depth);
		for token in tokens {
			window.push_back(token);
			if window.len() < self.depth {
				continue;
			}
			self.update(window.make_contiguous());
			window.pop_front();
		}
	}

	/// Counts one full window.
	///
	/// Walks the tree keyed by every window token but the last, creating
	/// empty mappings for missing keys, then increments the count stored
	/// under the final token (or initializes it to 1). With `depth == 1`
	/// the walk is empty and the model is a flat word-frequency table.
	fn update(&mut self, window: &[String]) {
		let Some((last, context)) = window.split_last() else {
			return;
		};

		let mut sub = &mut self.root;
		for token in context {
			match sub.entry(token.clone()).or_insert_with(|| TreeNode::Node(IndexMap::new())) {
				TreeNode::Node(children) => sub = children,
				// A count on the walk would mean a shallower window was
				// trained before; should not happen, kept for safety.
				TreeNode::Leaf(_) => return,
			}
		}

		match sub.entry(last.clone()).or_insert(TreeNode::Leaf(0)) {
			TreeNode::Leaf(count) => *count += 1,
			// Same mismatch in the other direction, kept for safety.
			TreeNode::Node(_) => (),
		}
	}

	/// Looks up the weighted continuations of a context.
	///
	/// Walks the tree keyed by each context token in order and returns the
	/// direct children of the mapping the walk lands on, each weighted by
	/// the aggregate of its subtree. The returned mapping preserves
	/// training insertion order.
	///
	/// Returns `None` the moment any key is absent, and also when the walk
	/// ends on a count instead of a mapping: a count has no continuations
	/// to offer. An empty context returns the weighted top level.
	pub fn candidates(&self, context: &[String]) -> Option<IndexMap<String, u64>> {
		let mut sub = &self.root;
		for token in context {
			match sub.get(token)? {
				TreeNode::Node(children) => sub = children,
				TreeNode::Leaf(_) => return None,
			}
		}

		Some(sub.iter().map(|(token, node)| (token.clone(), node.weight())).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tokenizer::START_TOKEN;

	fn stream(words: &[&str]) -> Vec<String> {
		words.iter().map(|word| (*word).to_owned()).collect()
	}

	#[test]
	fn rejects_a_zero_depth() {
		assert!(FrequencyModel::new(0).is_err());
	}

	#[test]
	fn total_weight_counts_training_windows() {
		let mut model = FrequencyModel::new(3).unwrap();
		model.train(stream(&["a", "b", "c", "d", "e"]));
		// 5 tokens at depth 3: three windows.
		assert_eq!(model.total_weight(), 3);
	}

	#[test]
	fn streams_shorter_than_the_depth_train_nothing() {
		let mut model = FrequencyModel::new(4).unwrap();
		model.train(stream(&["a", "b", "c"]));
		assert!(model.is_empty());
		assert_eq!(model.total_weight(), 0);
	}

	#[test]
	fn depth_one_degenerates_to_a_unigram_table() {
		let mut model = FrequencyModel::new(1).unwrap();
		model.train(stream(&["a", "b", "a"]));

		let weighted = model.candidates(&[]).unwrap();
		assert_eq!(weighted.get("a"), Some(&2));
		assert_eq!(weighted.get("b"), Some(&1));
	}

	#[test]
	fn counts_every_window_of_a_repeating_stream() {
		let mut model = FrequencyModel::new(2).unwrap();
		model.train(stream(&[START_TOKEN, "x", "y", "x", "y"]));

		let expected_x: IndexMap<String, u64> = [("x".to_owned(), 1)].into_iter().collect();
		let expected_y: IndexMap<String, u64> = [("y".to_owned(), 2)].into_iter().collect();
		let expected_back: IndexMap<String, u64> = [("x".to_owned(), 1)].into_iter().collect();

		assert_eq!(model.candidates(&stream(&[START_TOKEN])).unwrap(), expected_x);
		assert_eq!(model.candidates(&stream(&["x"])).unwrap(), expected_y);
		assert_eq!(model.candidates(&stream(&["y"])).unwrap(), expected_back);
		assert_eq!(model.total_weight(), 4);
	}

	#[test]
	fn candidate_order_follows_training_insertion_order() {
		let mut model = FrequencyModel::new(2).unwrap();
		model.train(stream(&[START_TOKEN, "x", "y", "x", "y"]));

		let top: Vec<String> = model.candidates(&[]).unwrap().keys().cloned().collect();
		assert_eq!(top, vec![START_TOKEN, "x", "y"]);
	}

	#[test]
	fn empty_context_returns_the_weighted_top_level() {
		let mut model = FrequencyModel::new(2).unwrap();
		model.train(stream(&[START_TOKEN, "x", "y", "x", "y"]));

		let top = model.candidates(&[]).unwrap();
		assert_eq!(top.get(START_TOKEN), Some(&1));
		assert_eq!(top.get("x"), Some(&2));
		assert_eq!(top.get("y"), Some(&1));
	}

	#[test]
	fn unknown_keys_fail_the_lookup() {
		let mut model = FrequencyModel::new(2).unwrap();
		model.train(stream(&["a", "b"]));
		assert!(model.candidates(&stream(&["z"])).is_none());
		assert!(model.candidates(&stream(&["a", "z"])).is_none());
	}

	#[test]
	fn contexts_reaching_a_count_fail_the_lookup() {
		let mut model = FrequencyModel::new(2).unwrap();
		model.train(stream(&["a", "b", "c"]));
		// Walking "a" then "b" ends on a count, which has no continuations.
		assert!(model.candidates(&stream(&["a", "b"])).is_none());
	}

	#[test]
	fn lookups_do_not_mutate_the_model() {
		let mut model = FrequencyModel::new(2).unwrap();
		model.train(stream(&["a", "b", "a", "c"]));

		let context = stream(&["a"]);
		let first = model.candidates(&context);
		let second = model.candidates(&context);
		assert_eq!(first, second);
	}
}
