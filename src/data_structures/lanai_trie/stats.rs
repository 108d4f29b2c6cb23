// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Structural statistics and debug rendering for the Lanai Trie.
//!
//! Both walks use an explicit worklist, so arbitrarily deep tries never
//! exhaust the call stack.

use std::fmt::{self, Write};

use super::node::NodeId;
use super::LanaiTrie;

/// Shape of a trie at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Nodes holding a value
    pub keys: usize,
    /// All nodes, value-bearing or not
    pub nodes: usize,
    /// Nodes without a value that only fan out
    pub branch_nodes: usize,
    /// Longest root-to-node path, counted in nodes
    pub max_depth: usize,
    /// Bytes of key text held across all fragments
    pub fragment_bytes: usize,
}

impl fmt::Display for TrieStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} keys in {} nodes ({} branch), depth {}, {} fragment bytes",
            self.keys, self.nodes, self.branch_nodes, self.max_depth, self.fragment_bytes
        )
    }
}

impl<V> LanaiTrie<V> {
    /// Collects structural statistics.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut worklist: Vec<(NodeId, usize)> =
            self.arena.siblings(self.root).map(|id| (id, 1)).collect();

        while let Some((id, depth)) = worklist.pop() {
            let node = self.arena.node(id);
            stats.nodes += 1;
            stats.fragment_bytes += node.fragment.len();
            stats.max_depth = stats.max_depth.max(depth);
            if node.value.is_some() {
                stats.keys += 1;
            } else {
                stats.branch_nodes += 1;
            }
            worklist.extend(self.arena.siblings(node.first_child).map(|id| (id, depth + 1)));
        }

        stats
    }

    /// Renders the node structure, one fragment per line, indented by depth.
    ///
    /// Value-bearing nodes are followed by `=> value`. Siblings appear in
    /// list order, children directly below their parent.
    pub fn render(&self) -> String
    where
        V: fmt::Debug,
    {
        let mut out = String::new();
        let mut worklist: Vec<(NodeId, usize)> = Vec::new();
        push_level(&mut worklist, self.arena.siblings(self.root).collect(), 0);

        while let Some((id, depth)) = worklist.pop() {
            let node = self.arena.node(id);
            let _ = write!(out, "{:indent$}{}", "", node.fragment, indent = depth * 2);
            if let Some(value) = &node.value {
                let _ = write!(out, " => {value:?}");
            }
            out.push('\n');
            push_level(
                &mut worklist,
                self.arena.siblings(node.first_child).collect(),
                depth + 1,
            );
        }

        out
    }
}

/// Pushes one sibling list so that popping yields it in list order.
fn push_level(worklist: &mut Vec<(NodeId, usize)>, level: Vec<NodeId>, depth: usize) {
    worklist.extend(level.into_iter().rev().map(|id| (id, depth)));
}
