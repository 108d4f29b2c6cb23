//! Node storage for the Lanai Trie.
//!
//! Nodes live in a single `Vec` and refer to each other through [`NodeId`]
//! indices. Each level of the tree is a singly linked sibling list threaded
//! through `next_sibling`, headed either by the trie's root or by a parent's
//! `first_child`.

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// A node in the Lanai Trie.
///
/// A node stores one compressed segment (`fragment`) of every key passing
/// through it. It holds a value only when some inserted key ends here.
#[derive(Debug)]
pub(crate) struct Node<V> {
    /// Non-empty key segment owned by this node
    pub fragment: String,

    /// Value of the key ending at this node, if any
    pub value: Option<V>,

    /// Head of this node's child list
    pub first_child: Option<NodeId>,

    /// Next node in the same sibling list
    pub next_sibling: Option<NodeId>,
}

impl<V> Node<V> {
    /// Creates a detached node holding a copy of `fragment`.
    pub fn new(fragment: &str, value: Option<V>) -> Self {
        Self {
            fragment: fragment.to_owned(),
            value,
            first_child: None,
            next_sibling: None,
        }
    }

    /// First character of the fragment.
    pub fn leading_char(&self) -> Option<char> {
        self.fragment.chars().next()
    }
}

/// Owner of every node in a trie.
#[derive(Debug)]
pub(crate) struct NodeArena<V> {
    nodes: Vec<Node<V>>,
}

impl<V> NodeArena<V> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Moves `node` into the arena and returns its id.
    pub fn alloc(&mut self, node: Node<V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates a sibling list starting at `head`.
    pub fn siblings(&self, head: Option<NodeId>) -> Siblings<'_, V> {
        Siblings {
            arena: self,
            next: head,
        }
    }

    /// Last node of the sibling list starting at `head`.
    pub fn last_sibling(&self, head: Option<NodeId>) -> Option<NodeId> {
        self.siblings(head).last()
    }
}

impl<V> Default for NodeArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one sibling list.
pub(crate) struct Siblings<'a, V> {
    arena: &'a NodeArena<V>,
    next: Option<NodeId>,
}

impl<V> Iterator for Siblings<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena.node(current).next_sibling;
        Some(current)
    }
}

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// Comparison is per character, so the result always falls on a character
/// boundary of both strings.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}
