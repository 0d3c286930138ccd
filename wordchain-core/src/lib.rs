//! Word-adjacency text generation library.
//!
//! This crate builds a statistical model of word adjacency from a body of
//! text and samples from it to generate new, plausible-sounding output:
//! - A weighted prefix-tree over word sequences (`FrequencyModel`)
//! - Weighted random generation with context-shrinking fallback (`Generator`)
//! - The word stream feeding the model (`tokenizer`)
//! - File utilities for corpus handling (`io`)
//!
//! Training and generation compose sequentially: a token stream is folded
//! into a model once, then the model is read-only for generation.

/// Core frequency model and generation logic.
///
/// This module exposes the trained model and the generator interface
/// while keeping the node representation private.
pub mod model;

/// Word stream production (sentinel token, space splitting).
pub mod tokenizer;

/// I/O utilities (corpus loading, corpus discovery).
pub mod io;
