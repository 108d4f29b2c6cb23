//! Lanai Library
//!
//! This library contains the Lanai compressed prefix trie together with the
//! configuration, error handling and key-file loading used by the `lanai`
//! binary. The trie can also be used on its own as a dependency.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`] holds the trie, its arena of nodes and
//!   the handle registry.
//! - [`config`] loads layered settings from files and the environment.
//! - [`error`] defines the crate-level error type and the global reporter.
//! - [`keyfile`] fills a trie from a plain-text key file.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod keyfile;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
