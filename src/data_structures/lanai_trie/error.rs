// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai compressed trie.

use super::registry::TrieHandle;

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// An empty key was passed to `insert` or `find`.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// The key already holds a value and replacement was not requested.
    #[error("Key '{0}' already holds a value")]
    DuplicateKey(String),

    /// The key is longer than the configured maximum.
    #[error("Key '{key}' exceeds maximum key length of {max_len}")]
    KeyTooLong {
        /// The rejected key.
        key: String,
        /// The configured limit, in characters.
        max_len: usize,
    },

    /// The handle does not name a live trie in the registry.
    #[error("Invalid trie handle: {0}")]
    InvalidHandle(TrieHandle),
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;
