// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::graph::DiGraph;
use crate::traits::StageDescriptor;

/// Inferred "must run before" graph over a slice of stages.
///
/// Vertices are positions in the stage slice; an edge `a -> b` means stage `a` must
/// execute before stage `b`. The graph is built fresh for every ordering request and
/// only ever lives for the duration of that request.
#[derive(Debug)]
pub struct DependencyGraph<'s, S> {
    stages: &'s [S],
    edges: DiGraph,
}

impl<'s, S: StageDescriptor> DependencyGraph<'s, S> {
    /// Create a graph with one vertex per stage and no edges
    pub fn new(stages: &'s [S]) -> Self {
        Self {
            stages,
            edges: DiGraph::new(stages.len()),
        }
    }

    pub fn stages(&self) -> &'s [S] {
        self.stages
    }

    pub fn stage(&self, index: usize) -> &'s S {
        let stages = self.stages;
        &stages[index]
    }

    /// Display name of the stage at `index`
    pub fn name(&self, index: usize) -> &'s str {
        self.stage(index).name()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Record that stage `before` must run before stage `after`
    pub fn add_dependency(&mut self, before: usize, after: usize) -> bool {
        self.edges.add_edge(before, after)
    }

    pub fn has_dependency(&self, before: usize, after: usize) -> bool {
        self.edges.has_edge(before, after)
    }

    /// Index-only view of the edges, for the graph algorithms
    pub fn edges(&self) -> &DiGraph {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut DiGraph {
        &mut self.edges
    }
}
