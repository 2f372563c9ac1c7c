// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Best-effort removal of dependency cycles.
//!
//! Capability declarations are coarse, so two stages can legitimately each look like
//! they depend on the other (both create and read `text`, say). No order can satisfy
//! a cycle, so some inferred dependencies have to be dropped.
//!
//! # Algorithm
//!
//! 1. Count every simple cycle (Johnson's algorithm) for the initial report.
//! 2. Find the first cycle in Johnson's order. If there is none, the graph is
//!    acyclic: stop.
//! 3. Walk its edges `v0 -> v1, v1 -> v2, ..., vk -> v0`, removing the first one
//!    still in the graph.
//! 4. Search again from scratch and repeat.
//!
//! Only the initial count visits every cycle; each later search stops at the first
//! one, so no cycle list is ever held in memory.
//!
//! Only one edge is removed per pass. A single removal can break several
//! overlapping cycles at once, so rescanning before the next removal keeps the number
//! of discarded dependencies down. Each pass removes an edge from a finite graph, so
//! the loop always terminates with an acyclic graph.
//!
//! Every removal is reported through [`OrderingEvents`], since it is an ordering
//! guarantee that could not be honoured.

use serde::Serialize;

use crate::engine::DependencyGraph;
use crate::graph::{count_simple_cycles, first_simple_cycle, DiGraph};
use crate::traits::{OrderingEvents, StageDescriptor};

/// An inferred dependency `from -> to` discarded to break a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemovedDependency {
    pub from: usize,
    pub to: usize,
}

/// What the cycle breaker did to a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleBreakOutcome {
    /// Number of simple cycles in the graph before anything was removed
    pub initial_cycle_count: usize,
    /// Removed dependencies, in removal order
    pub removed: Vec<RemovedDependency>,
}

/// Remove edges from `graph` until it is acyclic.
///
/// # Examples
/// ```
/// use stage_orderer::capabilities::Capabilities;
/// use stage_orderer::config::StageConfig;
/// use stage_orderer::engine::{break_cycles, build_dependency_graph, RemovedDependency};
/// use stage_orderer::traits::NoopEvents;
///
/// let shared = Capabilities::builder()
///     .with_creates_content("text")
///     .with_processes_content("text")
///     .build();
/// let stages = vec![
///     StageConfig::new("a", shared.clone()),
///     StageConfig::new("b", shared),
/// ];
///
/// let mut graph = build_dependency_graph(&stages);
/// let outcome = break_cycles(&mut graph, &NoopEvents);
///
/// assert_eq!(outcome.initial_cycle_count, 1);
/// assert_eq!(outcome.removed, vec![RemovedDependency { from: 0, to: 1 }]);
/// assert!(graph.has_dependency(1, 0));
/// ```
pub fn break_cycles<S: StageDescriptor>(
    graph: &mut DependencyGraph<'_, S>,
    events: &dyn OrderingEvents,
) -> CycleBreakOutcome {
    let mut outcome = CycleBreakOutcome {
        initial_cycle_count: count_simple_cycles(graph.edges()),
        removed: Vec::new(),
    };

    if outcome.initial_cycle_count == 0 {
        return outcome;
    }
    events.cycles_detected(outcome.initial_cycle_count);

    while let Some(cycle) = first_simple_cycle(graph.edges()) {
        let names: Vec<&str> = cycle.iter().map(|&v| graph.name(v)).collect();
        events.cycle_found(&names);

        // Enumerated cycles always have their edges in the graph
        let Some((from, to)) = remove_first_edge(graph.edges_mut(), &cycle) else {
            break;
        };
        events.dependency_removed(graph.name(from), graph.name(to));
        outcome.removed.push(RemovedDependency { from, to });
    }

    outcome
}

/// Remove the first edge of `cycle` (including the closing edge) found in `edges`.
fn remove_first_edge(edges: &mut DiGraph, cycle: &[usize]) -> Option<(usize, usize)> {
    let closing = cycle.iter().skip(1).chain(cycle.first());

    cycle
        .iter()
        .copied()
        .zip(closing.copied())
        .find(|&(from, to)| edges.remove_edge(from, to))
}
