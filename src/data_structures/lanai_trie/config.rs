// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai compressed trie.

use serde::{Deserialize, Serialize};

/// How the trie picks the sibling to descend into at each level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChildDispatch {
    /// Walk the sibling list and prefix-match every fragment in turn.
    Linear,
    /// Look the sibling up by its leading character in a hash index.
    #[default]
    Indexed,
}

/// Configuration for the Lanai Trie.
///
/// Defaults keep keys exactly as given, impose no length limit and use the
/// indexed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Whether keys are matched case-sensitively.
    /// When false, keys are lowercased before they are stored or looked up.
    case_sensitive: bool,

    /// Maximum key length in characters, if any.
    max_key_len: Option<usize>,

    /// Sibling selection strategy.
    dispatch: ChildDispatch,
}

impl TrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            max_key_len: None,
            dispatch: ChildDispatch::default(),
        }
    }

    /// Set whether keys are matched case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Limit keys to `max_key_len` characters.
    ///
    /// # Panics
    ///
    /// Panics if `max_key_len` is zero, since no non-empty key could be stored.
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        if max_key_len == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_len = Some(max_key_len);
        self
    }

    /// Select the sibling dispatch strategy.
    pub fn with_dispatch(mut self, dispatch: ChildDispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Get whether keys are case-sensitive
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Get the maximum key length
    pub fn max_key_len(&self) -> Option<usize> {
        self.max_key_len
    }

    /// Get the dispatch strategy
    pub fn dispatch(&self) -> ChildDispatch {
        self.dispatch
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
