use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::frequency_model::FrequencyModel;
use crate::tokenizer::START_TOKEN;

/// Generates word sequences from a trained `FrequencyModel`.
///
/// The generator borrows the model read-only and owns its random source,
/// so several generators can share one model.
///
/// # Responsibilities
/// - Weighted random selection among candidate continuations
/// - Context-shrinking fallback when a context has no continuations
/// - Assembling output sequences of a requested length
#[derive(Debug)]
pub struct Generator<'a> {
	model: &'a FrequencyModel,
	rng: StdRng,
}

impl<'a> Generator<'a> {
	/// Creates a generator seeded from the operating system.
	pub fn new(model: &'a FrequencyModel) -> Self {
		Self { model, rng: StdRng::from_os_rng() }
	}

	/// Creates a generator with a fixed seed.
	///
	/// Two generators over the same model and seed produce identical
	/// output.
	pub fn with_seed(model: &'a FrequencyModel, seed: u64) -> Self {
		Self { model, rng: StdRng::seed_from_u64(seed) }
	}

	/// Generates a sequence of exactly `length` words.
	///
	/// Starts from the sentinel, repeatedly samples the next word using
	/// the trailing `depth` words as context, and strips the sentinel
	/// before returning. The sentinel never appears in the output.
	///
	/// # Errors
	/// Returns an error if the model is empty.
	pub fn generate(&mut self, length: usize) -> Result<Vec<String>, String> {
		if self.model.is_empty() {
			return Err("Cannot generate from an empty model".to_owned());
		}

		let depth = self.model.depth();
		let mut words = vec![START_TOKEN.to_owned()];
		for _ in 0..length {
			let start = words.len().saturating_sub(depth);
			let next = self.next_word(&words[start..])?;
			words.push(next);
		}

		words.remove(0);
		Ok(words)
	}

	/// Samples the next word for a context.
	///
	/// Looks up the candidates for the full context first; while the
	/// lookup comes back empty, drops the oldest context token and
	/// retries. The sentinel is removed from every candidate set before
	/// sampling: it is a valid context key but never a generation target.
	///
	/// # Errors
	/// Returns an error if the context shrinks to empty and the top level
	/// still offers nothing beyond the sentinel.
	fn next_word(&mut self, context: &[String]) -> Result<String, String> {
		let mut context = context;
		loop {
			if let Some(mut weighted) = self.model.candidates(context) {
				weighted.shift_remove(START_TOKEN);
				if !weighted.is_empty() {
					return self.choose(&weighted);
				}
			}
			if context.is_empty() {
				return Err("No candidates available for generation".to_owned());
			}
			// Unknown context: retry without its oldest token.
			context = &context[1..];
		}
	}

	/// Chooses an entry at random from a weighted candidate set.
	///
	/// The probability of selecting a word is proportional to its weight
	/// (inverse-CDF sampling over integer weights).
	///
	/// # Errors
	/// Returns an error if the set is empty or all weights are zero;
	/// such a set must be rejected, not sampled.
	fn choose(&mut self, weighted: &IndexMap<String, u64>) -> Result<String, String> {
		let total: u64 = weighted.values().sum();
		if total == 0 {
			return Err("Candidate weights must sum to at least 1".to_owned());
		}

		let i = self.rng.random_range(0..total);
		match Self::nth_weighted(weighted, i) {
			Some(word) => Ok(word.to_owned()),
			// Unreachable: `i < total` and the weights sum to `total`.
			None => Err("Weighted selection ran past the candidate set".to_owned()),
		}
	}

	/// Returns the entry covering index `i` on the cumulative weight axis.
	///
	/// Iterates the set in insertion order, subtracting each weight from
	/// `i` until `i` falls inside an entry.
	fn nth_weighted(weighted: &IndexMap<String, u64>, mut i: u64) -> Option<&String> {
		for (word, weight) in weighted {
			if i < *weight {
				return Some(word);
			}
			i -= *weight;
		}
		None
	}
}
