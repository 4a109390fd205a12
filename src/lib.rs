//! # Lexitrie
//!
//! A trie-backed dictionary for Rust.
//!
//! ## Features
//!
//! - Word insertion, exact lookup, and deletion with structural pruning
//! - Prefix autocomplete with deterministic, ascending-character ordering
//! - Spelling suggestions within a fixed Levenshtein edit distance
//! - Lazy traversal over the words of any subtree
//! - Tree-structure rendering for inspection

pub mod cli;
pub mod error;
pub mod spelling;
pub mod trie;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
