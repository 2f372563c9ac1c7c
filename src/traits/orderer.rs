// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::OrderingPlan;
use crate::traits::StageDescriptor;

/// Orders the stages of a pipeline before a runner executes them.
///
/// `P` is the processor descriptor type and `S` the source descriptor type. Sources
/// are data-ingestion stages that never read another source's output, so the default
/// `order_sources` returns them untouched.
pub trait PipelineOrderer<P: StageDescriptor, S>: Send + Sync {
    /// Compute the execution order of `processors` as input positions, along with
    /// any inferred dependencies that had to be dropped.
    fn plan(&self, processors: &[P]) -> OrderingPlan;

    /// Return `processors` permuted into an order the runner can execute.
    ///
    /// The result always contains every input stage exactly once.
    fn order_processors(&self, processors: Vec<P>) -> Vec<P> {
        self.plan(&processors).apply(processors)
    }

    /// Return `sources` in the order they were supplied
    fn order_sources(&self, sources: Vec<S>) -> Vec<S> {
        sources
    }

    fn name(&self) -> &'static str;
}
