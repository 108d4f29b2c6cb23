// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Handle-based access to a set of Lanai tries.
//!
//! The registry hands out copyable [`TrieHandle`]s instead of references.
//! A handle stays valid until its trie is destroyed; after that every
//! operation through it fails with [`LanaiTrieError::InvalidHandle`], even
//! once the slot has been reused by a newer trie.

use std::fmt;

use tracing::debug;

use super::{LanaiTrie, LanaiTrieError, LanaiTrieResult, TrieConfig};

/// Opaque reference to a trie owned by a [`TrieRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrieHandle {
    slot: u32,
    generation: u32,
}

impl fmt::Display for TrieHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.slot, self.generation)
    }
}

#[derive(Debug)]
struct Slot<V> {
    generation: u32,
    trie: Option<LanaiTrie<V>>,
}

/// Owner of every trie created through it.
#[derive(Debug)]
pub struct TrieRegistry<V> {
    slots: Vec<Slot<V>>,
    free: Vec<u32>,
    config: TrieConfig,
}

impl<V> TrieRegistry<V> {
    /// Creates an empty registry whose tries use the default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates an empty registry whose tries use `config`.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            config,
        }
    }

    /// Creates a new empty trie and returns its handle.
    pub fn create(&mut self) -> TrieHandle {
        let trie = LanaiTrie::with_config(self.config.clone());

        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.trie = Some(trie);
            return TrieHandle {
                slot,
                generation: entry.generation,
            };
        }

        let slot = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            trie: Some(trie),
        });
        TrieHandle {
            slot,
            generation: 0,
        }
    }

    /// Inserts into the trie behind `handle`. See [`LanaiTrie::insert`].
    pub fn insert<K>(
        &mut self,
        handle: TrieHandle,
        key: K,
        value: V,
        replace: bool,
    ) -> LanaiTrieResult<bool>
    where
        K: AsRef<str>,
    {
        self.get_mut(handle)?.insert(key, value, replace)
    }

    /// Looks up `key` in the trie behind `handle`. See [`LanaiTrie::find`].
    pub fn find<K>(&self, handle: TrieHandle, key: K) -> LanaiTrieResult<Option<&V>>
    where
        K: AsRef<str>,
    {
        self.get(handle)?.find(key)
    }

    /// Destroys the trie behind `handle` and returns how many nodes it released.
    pub fn destroy(&mut self, handle: TrieHandle) -> LanaiTrieResult<usize> {
        let entry = self
            .slots
            .get_mut(handle.slot as usize)
            .filter(|entry| entry.generation == handle.generation)
            .ok_or(LanaiTrieError::InvalidHandle(handle))?;
        let trie = entry.trie.take().ok_or(LanaiTrieError::InvalidHandle(handle))?;

        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(handle.slot);
        debug!(%handle, "released trie handle");

        Ok(trie.destroy())
    }

    /// Borrows the trie behind `handle`.
    pub fn get(&self, handle: TrieHandle) -> LanaiTrieResult<&LanaiTrie<V>> {
        self.slots
            .get(handle.slot as usize)
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.trie.as_ref())
            .ok_or(LanaiTrieError::InvalidHandle(handle))
    }

    /// Mutably borrows the trie behind `handle`.
    pub fn get_mut(&mut self, handle: TrieHandle) -> LanaiTrieResult<&mut LanaiTrie<V>> {
        self.slots
            .get_mut(handle.slot as usize)
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.trie.as_mut())
            .ok_or(LanaiTrieError::InvalidHandle(handle))
    }

    /// Number of live tries.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether no trie is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Default for TrieRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
