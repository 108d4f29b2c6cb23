//! Data structures for Lanai.
//!
//! All implementations follow the same rules:
//! - No unsafe code
//! - Explicit `Result` errors for every caller mistake
//! - No internal locking; callers own synchronization

pub mod lanai_trie;

pub use lanai_trie::{LanaiTrie, LanaiTrieError, LanaiTrieResult, TrieRegistry};
