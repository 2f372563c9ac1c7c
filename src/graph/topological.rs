// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::DiGraph;

/// Produce a topological order of `graph` using Kahn's algorithm.
///
/// Whenever several vertices have no remaining incoming edges, the one with the
/// smallest `(key(vertex), vertex)` is emitted first, so the result is deterministic.
///
/// The graph is expected to be acyclic. If a cycle remains, the vertices Kahn's
/// algorithm cannot reach are appended in key order so that every vertex is still
/// returned exactly once.
///
/// **Time Complexity**: O((V + E) log V)
///
/// # Examples
/// ```
/// use stage_orderer::graph::{topological_order, DiGraph};
/// use std::cmp::Reverse;
///
/// let mut graph = DiGraph::new(3);
/// graph.add_edge(2, 0);
///
/// // Ties broken by vertex index
/// assert_eq!(topological_order(&graph, |v| v), vec![1, 2, 0]);
/// // Ties broken by a custom key
/// assert_eq!(topological_order(&graph, |v| Reverse(v)), vec![2, 1, 0]);
/// ```
pub fn topological_order<K, F>(graph: &DiGraph, key: F) -> Vec<usize>
where
    K: Ord,
    F: Fn(usize) -> K,
{
    let vertex_count = graph.vertex_count();
    let mut in_degree: Vec<usize> = (0..vertex_count).map(|v| graph.in_degree(v)).collect();
    let mut ready: BinaryHeap<Reverse<(K, usize)>> = (0..vertex_count)
        .filter(|&v| in_degree[v] == 0)
        .map(|v| Reverse((key(v), v)))
        .collect();

    let mut order = Vec::with_capacity(vertex_count);
    let mut emitted = vec![false; vertex_count];

    while let Some(Reverse((_, vertex))) = ready.pop() {
        order.push(vertex);
        emitted[vertex] = true;

        for next in graph.successors(vertex) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse((key(next), next)));
            }
        }
    }

    if order.len() < vertex_count {
        let mut leftover: Vec<(K, usize)> = (0..vertex_count)
            .filter(|&v| !emitted[v])
            .map(|v| (key(v), v))
            .collect();
        leftover.sort();
        order.extend(leftover.into_iter().map(|(_, v)| v));
    }

    order
}

/// Check that `order` lists every vertex once and respects every edge.
pub fn is_topological_order(graph: &DiGraph, order: &[usize]) -> bool {
    let vertex_count = graph.vertex_count();
    if order.len() != vertex_count {
        return false;
    }

    let mut position = vec![usize::MAX; vertex_count];
    for (index, &vertex) in order.iter().enumerate() {
        if vertex >= vertex_count || position[vertex] != usize::MAX {
            return false;
        }
        position[vertex] = index;
    }

    graph.edges().all(|(from, to)| position[from] < position[to])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(vertex_count: usize, edges: &[(usize, usize)]) -> DiGraph {
        let mut graph = DiGraph::new(vertex_count);
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    #[test]
    fn test_linear_chain() {
        let graph = graph_from(4, &[(3, 2), (2, 1), (1, 0)]);
        assert_eq!(topological_order(&graph, |v| v), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_no_edges_keeps_key_order() {
        let graph = DiGraph::new(4);
        assert_eq!(topological_order(&graph, |v| v), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_diamond_respects_edges() {
        let graph = graph_from(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = topological_order(&graph, |v| v);

        assert_eq!(order, vec![0, 1, 2, 3]);
        assert!(is_topological_order(&graph, &order));
    }

    #[test]
    fn test_custom_key_changes_tie_break_only() {
        let names = ["delta", "alpha", "charlie", "bravo"];
        let graph = graph_from(4, &[(0, 1)]);
        let order = topological_order(&graph, |v| names[v]);

        // "alpha" must wait for "delta"
        assert_eq!(order, vec![3, 2, 0, 1]);
        assert!(is_topological_order(&graph, &order));
    }

    #[test]
    fn test_remaining_cycle_still_returns_every_vertex() {
        let graph = graph_from(3, &[(1, 2), (2, 1)]);
        let order = topological_order(&graph, |v| v);

        assert_eq!(order, vec![0, 1, 2]);
        assert!(!is_topological_order(&graph, &order));
    }

    #[test]
    fn test_is_topological_order_rejects_bad_orders() {
        let graph = graph_from(3, &[(0, 1)]);

        assert!(is_topological_order(&graph, &[0, 2, 1]));
        assert!(!is_topological_order(&graph, &[1, 0, 2]));
        assert!(!is_topological_order(&graph, &[0, 1]));
        assert!(!is_topological_order(&graph, &[0, 0, 1]));
        assert!(!is_topological_order(&graph, &[0, 1, 5]));
    }

    #[test]
    fn test_repeated_linearization_is_valid() {
        let graph = graph_from(5, &[(4, 0), (0, 3), (1, 3), (2, 4)]);
        for _ in 0..3 {
            assert!(is_topological_order(&graph, &topological_order(&graph, |v| v)));
        }
    }
}
