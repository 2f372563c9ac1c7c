// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Enumeration of every elementary (simple) cycle using Johnson's algorithm.
//!
//! A strongly connected component can hold many overlapping cycles, so finding one
//! cycle per component is not enough for the orderer. Johnson's algorithm lists them
//! all in `O((V + E)(C + 1))` time for `C` cycles.
//!
//! # Algorithm
//!
//! For each start vertex `s` in ascending order:
//! 1. Restrict the graph to vertices `>= s` and find the strongly connected component
//!    containing `s` (intersection of forward and backward reachability).
//! 2. Run a blocked DFS (`circuit`) from `s` inside that component. Every time the
//!    search steps back onto `s`, the current path is a cycle.
//! 3. Vertices that cannot currently reach `s` stay blocked until one of their
//!    successors becomes unblocked, which bounds the work per cycle.
//!
//! Each cycle is reported once, starting at its lowest vertex. The closing edge from
//! the last vertex back to the first is implied.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use crate::graph::DiGraph;

/// Find every simple cycle in `graph`.
///
/// Cycles are returned as vertex sequences `[v0, v1, ..., vk]` where `v0` is the
/// smallest vertex of the cycle and the edges are `v0 -> v1 -> ... -> vk -> v0`.
/// The output order is deterministic for a given graph.
///
/// # Examples
/// ```
/// use stage_orderer::graph::{simple_cycles, DiGraph};
///
/// let mut graph = DiGraph::new(3);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 0);
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 0);
///
/// assert_eq!(simple_cycles(&graph), vec![vec![0, 1], vec![0, 1, 2]]);
/// ```
pub fn simple_cycles(graph: &DiGraph) -> Vec<Vec<usize>> {
    let mut cycles = Vec::new();
    for_each_simple_cycle(graph, |cycle| {
        cycles.push(cycle.to_vec());
        ControlFlow::Continue(())
    });
    cycles
}

/// Number of simple cycles in `graph`, without keeping any of them.
pub fn count_simple_cycles(graph: &DiGraph) -> usize {
    let mut count = 0;
    for_each_simple_cycle(graph, |_| {
        count += 1;
        ControlFlow::Continue(())
    });
    count
}

/// The first cycle [`simple_cycles`] would report, found without enumerating the rest.
pub fn first_simple_cycle(graph: &DiGraph) -> Option<Vec<usize>> {
    let mut first = None;
    for_each_simple_cycle(graph, |cycle| {
        first = Some(cycle.to_vec());
        ControlFlow::Break(())
    });
    first
}

/// Visit simple cycles in [`simple_cycles`] order until `visit` breaks.
///
/// The slice handed to `visit` is only valid for the duration of the call.
pub fn for_each_simple_cycle<F>(graph: &DiGraph, mut visit: F)
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    let vertex_count = graph.vertex_count();

    for start in 0..vertex_count {
        let component = component_of(graph, start);

        // Singleton component with no way back to `start`
        if !graph.successors(start).any(|next| component[next]) {
            continue;
        }

        let mut search = CircuitSearch {
            graph,
            component: &component,
            start,
            blocked: vec![false; vertex_count],
            blocked_by: vec![BTreeSet::new(); vertex_count],
            path: Vec::new(),
            visit: &mut visit,
            stopped: false,
        };
        search.circuit(start);

        if search.stopped {
            return;
        }
    }
}

/// Strongly connected component of `start` within the subgraph of vertices `>= start`.
fn component_of(graph: &DiGraph, start: usize) -> Vec<bool> {
    let forward = reachable(graph.vertex_count(), start, |v| graph.successors(v));
    let backward = reachable(graph.vertex_count(), start, |v| graph.predecessors(v));

    forward
        .iter()
        .zip(backward.iter())
        .map(|(&f, &b)| f && b)
        .collect()
}

fn reachable<F, I>(vertex_count: usize, start: usize, neighbours: F) -> Vec<bool>
where
    F: Fn(usize) -> I,
    I: Iterator<Item = usize>,
{
    let mut seen = vec![false; vertex_count];
    let mut stack = vec![start];
    seen[start] = true;

    while let Some(vertex) = stack.pop() {
        for next in neighbours(vertex) {
            if next >= start && !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }

    seen
}

struct CircuitSearch<'a, F> {
    graph: &'a DiGraph,
    component: &'a [bool],
    start: usize,
    blocked: Vec<bool>,
    blocked_by: Vec<BTreeSet<usize>>,
    path: Vec<usize>,
    visit: &'a mut F,
    stopped: bool,
}

impl<F> CircuitSearch<'_, F>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    /// Returns `true` when at least one cycle through `vertex` closed back at `start`.
    fn circuit(&mut self, vertex: usize) -> bool {
        let graph = self.graph;
        let mut closed = false;

        self.path.push(vertex);
        self.blocked[vertex] = true;

        for next in graph.successors(vertex) {
            if self.stopped {
                break;
            }
            if !self.component[next] {
                continue;
            }
            if next == self.start {
                if (self.visit)(&self.path).is_break() {
                    self.stopped = true;
                }
                closed = true;
            } else if !self.blocked[next] && self.circuit(next) {
                closed = true;
            }
        }

        if closed {
            self.unblock(vertex);
        } else {
            for next in graph.successors(vertex) {
                if self.component[next] {
                    self.blocked_by[next].insert(vertex);
                }
            }
        }

        self.path.pop();
        closed
    }

    fn unblock(&mut self, vertex: usize) {
        self.blocked[vertex] = false;
        let waiting = std::mem::take(&mut self.blocked_by[vertex]);
        for other in waiting {
            if self.blocked[other] {
                self.unblock(other);
            }
        }
    }
}
