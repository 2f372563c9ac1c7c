// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Inference of stage dependencies from capability declarations.
//!
//! Stage `P2` depends on stage `P1` (edge `P1 -> P2`) when any of:
//!
//! 1. `P2` processes something `P1` creates
//! 2. `P2` deletes something `P1` creates
//! 3. `P2` deletes something `P1` processes
//!
//! The edge always points from the producer (or earlier reader) towards the stage
//! that uses or removes its data. Every ordered pair of distinct stages is compared,
//! which is `O(n² · m²)` capability matches for `n` stages of `m` capabilities;
//! pipelines hold tens of stages, so this is cheap.

use crate::capabilities::{capabilities_match, Capabilities, Capability};
use crate::engine::DependencyGraph;
use crate::observability::messages::ordering::DependencyGraphBuilt;
use crate::observability::messages::StructuredLog;
use crate::traits::StageDescriptor;

/// Build the dependency graph for `stages`.
///
/// Vertex `i` is `stages[i]`. Stages are never compared with themselves, so the graph
/// has no self-loops, and several reasons for the same dependency collapse into one
/// edge.
///
/// # Examples
/// ```
/// use stage_orderer::capabilities::Capabilities;
/// use stage_orderer::config::StageConfig;
/// use stage_orderer::engine::build_dependency_graph;
///
/// let stages = vec![
///     StageConfig::new("reader", Capabilities::builder().with_processes_content("text").build()),
///     StageConfig::new("writer", Capabilities::builder().with_creates_content("text").build()),
/// ];
///
/// let graph = build_dependency_graph(&stages);
/// assert!(graph.has_dependency(1, 0));
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub fn build_dependency_graph<S: StageDescriptor>(stages: &[S]) -> DependencyGraph<'_, S> {
    let mut graph = DependencyGraph::new(stages);

    for (first_index, first) in stages.iter().enumerate() {
        for (second_index, second) in stages.iter().enumerate() {
            if first_index == second_index {
                continue;
            }

            if depends_on(second.capabilities(), first.capabilities()) {
                graph.add_dependency(first_index, second_index);
            }
        }
    }

    DependencyGraphBuilt {
        stage_count: graph.len(),
        edge_count: graph.edge_count(),
    }
    .log();

    graph
}

/// Whether a stage declaring `later` must run after a stage declaring `earlier`.
pub fn depends_on(later: &Capabilities, earlier: &Capabilities) -> bool {
    any_match(&later.processes, &earlier.creates)
        || any_match(&later.deletes, &earlier.creates)
        || any_match(&later.deletes, &earlier.processes)
}

fn any_match(left: &[Capability], right: &[Capability]) -> bool {
    left.iter()
        .any(|l| right.iter().any(|r| capabilities_match(l, r)))
}
