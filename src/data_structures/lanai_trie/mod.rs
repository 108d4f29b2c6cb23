// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Compressed Trie.
//!
//! A path-compressed prefix tree mapping string keys to caller-supplied
//! values. Each node stores a fragment of one or more keys, and the nodes of
//! one level form a sibling list. Inserting a key that diverges in the middle
//! of an existing fragment splits that node in place; every previously
//! inserted key stays reachable.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::{LanaiTrie, LanaiTrieError};
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("tardis", 1, true).unwrap();
//! trie.insert("tarbaby", 2, true).unwrap();
//!
//! assert_eq!(trie.find("tardis").unwrap(), Some(&1));
//! assert_eq!(trie.find("tarbaby").unwrap(), Some(&2));
//! assert_eq!(trie.find("tar").unwrap(), None);
//!
//! // Without `replace`, an existing key is left untouched
//! assert_eq!(
//!     trie.insert("tardis", 3, false),
//!     Err(LanaiTrieError::DuplicateKey("tardis".to_string()))
//! );
//! assert_eq!(trie.len(), 2);
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal locking. `find` takes `&self` and never mutates,
//! so any number of readers may share a trie. Writers need exclusive access;
//! wrap the trie in an external lock such as `RwLock<LanaiTrie<V>>` and hold
//! the write guard for the whole `insert` call.

mod config;
mod error;
mod node;
mod registry;
mod stats;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use fnv::FnvHashMap;
use tracing::{debug, trace};

pub use config::{ChildDispatch, TrieConfig};
pub use error::{LanaiTrieError, LanaiTrieResult};
pub use registry::{TrieHandle, TrieRegistry};
pub use stats::TrieStats;

use node::{common_prefix_len, Node, NodeArena, NodeId};

/// Sibling list a node belongs to: `None` for the top level.
type Parent = Option<NodeId>;

/// A compressed prefix tree from string keys to values of type `V`.
///
/// Values are stored as handed in and never inspected. Using a reference or
/// an `Rc`/`Arc` as `V` keeps ownership of the payload with the caller.
#[derive(Debug)]
pub struct LanaiTrie<V> {
    /// Owner of every node
    arena: NodeArena<V>,

    /// Head of the top-level sibling list
    root: Option<NodeId>,

    /// (parent, leading char) -> child; only maintained for indexed dispatch
    index: FnvHashMap<(Parent, char), NodeId>,

    /// Number of nodes holding a value
    size: usize,

    /// Configuration options
    config: TrieConfig,
}

impl<V> LanaiTrie<V> {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            index: FnvHashMap::default(),
            size: 0,
            config,
        }
    }

    /// Inserts `key` with `value`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. Must be non-empty.
    /// * `value` - The value to associate with the key.
    /// * `replace` - Whether an existing value for `key` may be overwritten.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was new.
    /// * `Ok(false)` - The key existed and its value was replaced.
    /// * `Err(LanaiTrieError::DuplicateKey)` - The key existed and `replace` was false.
    ///   The trie is unchanged.
    /// * `Err(LanaiTrieError::EmptyKey)` / `Err(LanaiTrieError::KeyTooLong)` - The key was rejected.
    pub fn insert<K>(&mut self, key: K, value: V, replace: bool) -> LanaiTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref())?;

        if self.root.is_none() {
            let root = self.attach(None, Node::new(&key, Some(value)));
            trace!(key = %key, ?root, "created root");
            self.size = 1;
            return Ok(true);
        }

        let mut parent: Parent = None;
        let mut rest: &str = &key;

        loop {
            let closest = match self.child_sharing_prefix(parent, rest) {
                Some(id) => id,
                None => {
                    let id = self.attach(parent, Node::new(rest, Some(value)));
                    trace!(key = %key, fragment = rest, ?parent, ?id, "appended node");
                    self.size += 1;
                    return Ok(true);
                }
            };

            let fragment = &self.arena.node(closest).fragment;
            let common = common_prefix_len(fragment, rest);

            if common < fragment.len() {
                self.split(closest, common, &rest[common..], value);
                trace!(key = %key, node = ?closest, at = common, "split node");
                self.size += 1;
                return Ok(true);
            }

            if common == rest.len() {
                return self.store(closest, &key, value, replace);
            }

            parent = Some(closest);
            rest = &rest[common..];
        }
    }

    /// Looks up the value stored for `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The key holds a value.
    /// * `Ok(None)` - The key is absent, or only a prefix of stored keys.
    /// * `Err(LanaiTrieError)` - The key was empty or too long.
    pub fn find<K>(&self, key: K) -> LanaiTrieResult<Option<&V>>
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref())?;

        let mut parent: Parent = None;
        let mut rest: &str = &key;

        loop {
            let id = match self.child_matching_fragment(parent, rest) {
                Some(id) => id,
                None => return Ok(None),
            };

            let node = self.arena.node(id);
            rest = &rest[node.fragment.len()..];
            if rest.is_empty() {
                return Ok(node.value.as_ref());
            }
            parent = Some(id);
        }
    }

    /// Checks if `key` holds a value.
    pub fn contains<K>(&self, key: K) -> LanaiTrieResult<bool>
    where
        K: AsRef<str>,
    {
        Ok(self.find(key)?.is_some())
    }

    /// Number of keys holding a value.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated nodes, branch nodes included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// The configuration this trie was created with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Releases every node, leaving an empty trie with the same configuration.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.root = None;
        self.size = 0;
    }

    /// Consumes the trie and returns how many nodes were released.
    ///
    /// Every node, fragment and stored value is dropped exactly once.
    pub fn destroy(self) -> usize {
        let released = self.arena.len();
        debug!(nodes = released, keys = self.size, "destroying trie");
        released
    }

    fn normalize<'k>(&self, key: &'k str) -> LanaiTrieResult<Cow<'k, str>> {
        if key.is_empty() {
            return Err(LanaiTrieError::EmptyKey);
        }

        let key = if self.config.case_sensitive() {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        };

        if let Some(max_len) = self.config.max_key_len() {
            if key.chars().count() > max_len {
                return Err(LanaiTrieError::KeyTooLong {
                    key: key.into_owned(),
                    max_len,
                });
            }
        }

        Ok(key)
    }

    fn level_head(&self, parent: Parent) -> Option<NodeId> {
        match parent {
            None => self.root,
            Some(id) => self.arena.node(id).first_child,
        }
    }

    fn indexed(&self) -> bool {
        self.config.dispatch() == ChildDispatch::Indexed
    }

    /// The sibling under `parent` sharing a non-empty prefix with `rest`.
    ///
    /// Siblings never share a leading character, so this is the sibling
    /// starting with the same character as `rest`.
    fn child_sharing_prefix(&self, parent: Parent, rest: &str) -> Option<NodeId> {
        let first = rest.chars().next()?;
        if self.indexed() {
            return self.index.get(&(parent, first)).copied();
        }
        self.arena
            .siblings(self.level_head(parent))
            .find(|&id| self.arena.node(id).leading_char() == Some(first))
    }

    /// The sibling under `parent` whose whole fragment is a prefix of `rest`.
    fn child_matching_fragment(&self, parent: Parent, rest: &str) -> Option<NodeId> {
        if self.indexed() {
            let first = rest.chars().next()?;
            return self
                .index
                .get(&(parent, first))
                .copied()
                .filter(|&id| rest.starts_with(self.arena.node(id).fragment.as_str()));
        }
        self.arena
            .siblings(self.level_head(parent))
            .find(|&id| rest.starts_with(self.arena.node(id).fragment.as_str()))
    }

    /// Appends `node` to the end of the sibling list under `parent`.
    fn attach(&mut self, parent: Parent, node: Node<V>) -> NodeId {
        let leading = node.leading_char();
        let head = self.level_head(parent);
        let id = self.arena.alloc(node);

        match self.arena.last_sibling(head) {
            Some(last) => self.arena.node_mut(last).next_sibling = Some(id),
            None => match parent {
                None => self.root = Some(id),
                Some(parent_id) => self.arena.node_mut(parent_id).first_child = Some(id),
            },
        }

        if self.indexed() {
            if let Some(c) = leading {
                self.index.insert((parent, c), id);
            }
        }

        id
    }

    /// Splits node `id` after `at` bytes of its fragment.
    ///
    /// The removed suffix moves into a new child along with the node's value
    /// and children. A non-empty `tail` becomes a second child holding
    /// `value`; an empty `tail` means the key ends here, so the truncated node
    /// itself takes `value`.
    fn split(&mut self, id: NodeId, at: usize, tail: &str, value: V) {
        let node = self.arena.node_mut(id);
        let suffix = node.fragment.split_off(at);
        let moved = Node {
            fragment: suffix,
            value: node.value.take(),
            first_child: node.first_child.take(),
            next_sibling: None,
        };
        let grandchildren = moved.first_child;
        let moved_leading = moved.leading_char();

        let moved_id = self.arena.alloc(moved);
        self.arena.node_mut(id).first_child = Some(moved_id);

        if self.indexed() {
            for child in self.arena.siblings(grandchildren) {
                if let Some(c) = self.arena.node(child).leading_char() {
                    self.index.remove(&(Some(id), c));
                    self.index.insert((Some(moved_id), c), child);
                }
            }
            if let Some(c) = moved_leading {
                self.index.insert((Some(id), c), moved_id);
            }
        }

        if tail.is_empty() {
            self.arena.node_mut(id).value = Some(value);
        } else {
            self.attach(Some(id), Node::new(tail, Some(value)));
        }
    }

    /// Stores `value` at a node whose path spells exactly `key`.
    fn store(&mut self, id: NodeId, key: &str, value: V, replace: bool) -> LanaiTrieResult<bool> {
        let node = self.arena.node_mut(id);
        match node.value {
            Some(ref mut existing) if replace => {
                *existing = value;
                Ok(false)
            }
            Some(_) => {
                debug!(key, "rejected duplicate key");
                Err(LanaiTrieError::DuplicateKey(key.to_string()))
            }
            None => {
                node.value = Some(value);
                self.size += 1;
                Ok(true)
            }
        }
    }

    /// Verifies the structural invariants, panicking on the first violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        use std::collections::HashSet;

        let mut reachable = 0;
        let mut valued = 0;
        let mut worklist: Vec<Parent> = vec![None];

        while let Some(parent) = worklist.pop() {
            let mut leading = HashSet::new();
            for id in self.arena.siblings(self.level_head(parent)) {
                let node = self.arena.node(id);
                assert!(!node.fragment.is_empty(), "empty fragment at {id:?}");
                let c = node.leading_char().unwrap_or_default();
                assert!(leading.insert(c), "siblings share leading char {c:?}");
                if self.indexed() {
                    assert_eq!(self.index.get(&(parent, c)), Some(&id), "stale index entry");
                }
                reachable += 1;
                if node.value.is_some() {
                    valued += 1;
                }
                worklist.push(Some(id));
            }
        }

        assert_eq!(reachable, self.arena.len(), "unreachable nodes in arena");
        assert_eq!(valued, self.size, "size out of sync with valued nodes");
        if self.indexed() {
            assert_eq!(self.index.len(), self.arena.len(), "index size mismatch");
        } else {
            assert!(self.index.is_empty());
        }
    }
}

impl<V> Default for LanaiTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}
