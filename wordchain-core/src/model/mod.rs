//! Top-level module for the word-adjacency generation system.
//!
//! This module groups the pieces of the pipeline:
//! - The trained weighted prefix-tree (`FrequencyModel`)
//! - Sequence generation with weighted sampling and fallback (`Generator`)
//! - The internal node representation (`TreeNode`)

/// Weighted prefix-tree over word sequences.
///
/// Handles token stream ingestion, window counting and candidate lookup.
pub mod frequency_model;

/// High-level interface for generating word sequences from a model.
///
/// Exposes seedable weighted sampling and sequence assembly with
/// context-shrinking fallback.
pub mod generator;

/// Internal representation of a single prefix-tree node.
///
/// Tagged count/mapping distinction and weight aggregation.
/// This module is not exposed publicly.
mod node;
