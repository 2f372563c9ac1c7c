// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

/// Directed graph over vertices `0..vertex_count` with boolean edges.
///
/// Successor and predecessor sets are both maintained so that cycle search (forward
/// and backward reachability) and Kahn's algorithm (in-degrees) are cheap. Sets are
/// ordered, which makes every traversal deterministic.
///
/// # Examples
/// ```
/// use stage_orderer::graph::DiGraph;
///
/// let mut graph = DiGraph::new(3);
/// assert!(graph.add_edge(0, 1));
/// assert!(!graph.add_edge(0, 1)); // parallel edges collapse
/// assert!(!graph.add_edge(2, 2)); // no self-loops
///
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.remove_edge(0, 1));
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph {
    successors: Vec<BTreeSet<usize>>,
    predecessors: Vec<BTreeSet<usize>>,
}

impl DiGraph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            successors: vec![BTreeSet::new(); vertex_count],
            predecessors: vec![BTreeSet::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(BTreeSet::len).sum()
    }

    /// Add the edge `from -> to`.
    ///
    /// Returns `false` when the edge already existed or would be a self-loop.
    ///
    /// # Panics
    /// Panics if either vertex is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let inserted = self.successors[from].insert(to);
        if inserted {
            self.predecessors[to].insert(from);
        }
        inserted
    }

    /// Remove the edge `from -> to`, returning whether it existed
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let removed = self
            .successors
            .get_mut(from)
            .map_or(false, |targets| targets.remove(&to));
        if removed {
            self.predecessors[to].remove(&from);
        }
        removed
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors
            .get(from)
            .map_or(false, |targets| targets.contains(&to))
    }

    pub fn successors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.successors[vertex].iter().copied()
    }

    pub fn predecessors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.predecessors[vertex].iter().copied()
    }

    pub fn in_degree(&self, vertex: usize) -> usize {
        self.predecessors[vertex].len()
    }

    /// All edges as `(from, to)` pairs in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }
}
