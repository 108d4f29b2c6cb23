//! Trie configuration module.
//!
//! This module defines the `[trie]` section of the configuration file and its
//! conversion into the [`TrieConfig`] the trie itself consumes.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::{ChildDispatch, TrieConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration as it appears in files and environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrieSettings {
    /// Whether keys are matched case-sensitively
    pub case_sensitive: bool,

    /// Maximum key length in characters (None for unlimited)
    pub max_key_len: Option<usize>,

    /// Sibling dispatch strategy ("linear" or "indexed")
    pub dispatch: ChildDispatch,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_key_len: None,
            dispatch: ChildDispatch::Indexed,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_len == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl TrieSettings {
    /// Builds the trie configuration described by these settings.
    ///
    /// Call [`Validate::validate`] first; a zero `max_key_len` is treated as
    /// unlimited here rather than rejected.
    pub fn to_trie_config(&self) -> TrieConfig {
        let config = TrieConfig::new()
            .with_case_sensitive(self.case_sensitive)
            .with_dispatch(self.dispatch);

        match self.max_key_len {
            Some(max_key_len) if max_key_len > 0 => config.with_max_key_len(max_key_len),
            _ => config,
        }
    }
}
