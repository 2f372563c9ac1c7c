// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::TieBreak;
use crate::engine::cycle_breaker::{break_cycles, RemovedDependency};
use crate::engine::graph_builder::build_dependency_graph;
use crate::engine::linearizer::linearize;
use crate::graph::is_topological_order;
use crate::observability::messages::ordering::{OrderingCompleted, OrderingStarted};
use crate::observability::messages::StructuredLog;
use crate::observability::TracingEvents;
use crate::traits::{OrderingEvents, PipelineOrderer, StageDescriptor};

/// Orderer that infers dependencies between processors from their capabilities.
///
/// Ordering runs in three steps, all on a graph local to the call:
///
/// 1. **Inference**: build the "must run before" graph from each pair of capability
///    declarations (see [`build_dependency_graph`])
/// 2. **Cycle breaking**: drop inferred dependencies until the graph is acyclic,
///    reporting each one (see [`break_cycles`](crate::engine::break_cycles))
/// 3. **Linearization**: Kahn's algorithm with a deterministic tie-break
///
/// Sources are returned unchanged; no source is assumed to read another's output.
///
/// The orderer holds no per-call state, so one instance can serve concurrent callers.
///
/// # Examples
/// ```
/// use stage_orderer::capabilities::Capabilities;
/// use stage_orderer::config::StageConfig;
/// use stage_orderer::engine::DependencyOrderer;
///
/// let sentences = StageConfig::new(
///     "sentences",
///     Capabilities::builder()
///         .with_processes_content("text")
///         .with_creates_annotations("grammar/sentence", "span")
///         .build(),
/// );
/// let weapons = StageConfig::new(
///     "weapons",
///     Capabilities::builder()
///         .with_processes_annotations("grammar/sentence", "span")
///         .with_creates_annotations("entity/weapon", "span")
///         .build(),
/// );
///
/// let orderer = DependencyOrderer::new();
/// let ordered = orderer.order_processors(vec![weapons, sentences]);
///
/// let names: Vec<&str> = ordered.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, vec!["sentences", "weapons"]);
/// ```
#[derive(Clone)]
pub struct DependencyOrderer {
    tie_break: TieBreak,
    events: Arc<dyn OrderingEvents>,
}

/// The result of planning an order without moving the stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingPlan {
    /// Input positions in execution order; a permutation of `0..len`
    pub order: Vec<usize>,
    /// Inferred dependencies discarded to break cycles
    pub removed: Vec<RemovedDependency>,
    /// Dependencies inferred before any were removed
    pub edge_count: usize,
    /// Simple cycles found before any dependency was removed
    pub cycle_count: usize,
}

impl OrderingPlan {
    /// Plan that keeps `len` stages where they are.
    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            removed: Vec::new(),
            edge_count: 0,
            cycle_count: 0,
        }
    }

    /// Move `stages` into planned order.
    ///
    /// `stages` must be the vector the plan was computed from.
    pub fn apply<T>(&self, stages: Vec<T>) -> Vec<T> {
        let mut slots: Vec<Option<T>> = stages.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
            .collect()
    }

    /// Borrow `stages` in planned order.
    ///
    /// `stages` must be the slice the plan was computed from.
    pub fn ordered<'a, P>(&self, stages: &'a [P]) -> Vec<&'a P> {
        self.order.iter().filter_map(|&i| stages.get(i)).collect()
    }
}

impl DependencyOrderer {
    /// Create an orderer that breaks ties by input order and logs through `tracing`
    pub fn new() -> Self {
        Self {
            tie_break: TieBreak::default(),
            events: Arc::new(TracingEvents),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Route cycle diagnostics to `events` instead of `tracing`
    pub fn with_events(mut self, events: Arc<dyn OrderingEvents>) -> Self {
        self.events = events;
        self
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Compute the execution order of `processors` as input positions.
    pub fn plan<P: StageDescriptor>(&self, processors: &[P]) -> OrderingPlan {
        let started = Instant::now();
        let span = OrderingStarted {
            orderer: "dependency",
            processor_count: processors.len(),
        }
        .span("plan");
        let _guard = span.enter();

        let mut graph = build_dependency_graph(processors);
        let edge_count = graph.edge_count();

        let outcome = break_cycles(&mut graph, self.events.as_ref());
        let order = linearize(&graph, self.tie_break);
        debug_assert!(is_topological_order(graph.edges(), &order));

        OrderingCompleted {
            processor_count: processors.len(),
            removed_count: outcome.removed.len(),
            duration: started.elapsed(),
        }
        .log();

        OrderingPlan {
            order,
            removed: outcome.removed,
            edge_count,
            cycle_count: outcome.initial_cycle_count,
        }
    }

    /// Return `processors` permuted into dependency order.
    ///
    /// The output always has the same length as the input and contains every
    /// processor exactly once, even when cycles forced dependencies to be dropped.
    pub fn order_processors<P: StageDescriptor>(&self, processors: Vec<P>) -> Vec<P> {
        self.plan(&processors).apply(processors)
    }
}

impl Default for DependencyOrderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DependencyOrderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyOrderer")
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}

impl<P: StageDescriptor, S> PipelineOrderer<P, S> for DependencyOrderer {
    fn plan(&self, processors: &[P]) -> OrderingPlan {
        DependencyOrderer::plan(self, processors)
    }

    fn name(&self) -> &'static str {
        "dependency"
    }
}
