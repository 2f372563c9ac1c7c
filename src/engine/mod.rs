// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod cycle_breaker;
pub mod declared;
pub mod dependency_graph;
pub mod dependency_orderer;
pub mod factory;
pub mod graph_builder;
pub mod linearizer;
#[cfg(test)]
mod integration_tests;

pub use cycle_breaker::{break_cycles, CycleBreakOutcome, RemovedDependency};
pub use declared::DeclaredOrderer;
pub use dependency_graph::DependencyGraph;
pub use dependency_orderer::{DependencyOrderer, OrderingPlan};
pub use factory::OrdererFactory;
pub use graph_builder::{build_dependency_graph, depends_on};
pub use linearizer::linearize;
