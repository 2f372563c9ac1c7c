// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Side-channel for diagnostics raised while ordering processors.
///
/// Cycles are not errors: the orderer resolves them by discarding inferred
/// dependencies. Each discarded dependency is an ordering guarantee that could not be
/// honoured, so it is reported here. All methods default to doing nothing.
///
/// The default implementation used by [`DependencyOrderer`](crate::engine::DependencyOrderer)
/// is [`TracingEvents`](crate::observability::TracingEvents).
pub trait OrderingEvents: Send + Sync {
    /// Cycles were found in the inferred dependency graph
    fn cycles_detected(&self, _cycle_count: usize) {}

    /// The cycle about to be broken, as stage names in cycle order
    fn cycle_found(&self, _stages: &[&str]) {}

    /// The inferred dependency `from -> to` was discarded to break a cycle
    fn dependency_removed(&self, _from: &str, _to: &str) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEvents;

impl OrderingEvents for NoopEvents {}
