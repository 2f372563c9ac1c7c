// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::TieBreak;
use crate::engine::DependencyGraph;
use crate::graph::topological_order;
use crate::traits::StageDescriptor;

/// Linearize an acyclic dependency graph into stage indices.
///
/// Every stage appears exactly once, and for every remaining dependency `a -> b`,
/// `a` comes before `b`. Stages that become ready at the same time are chosen by
/// `tie_break`.
pub fn linearize<S: StageDescriptor>(graph: &DependencyGraph<'_, S>, tie_break: TieBreak) -> Vec<usize> {
    match tie_break {
        TieBreak::InputOrder => topological_order(graph.edges(), |v| v),
        TieBreak::Name => topological_order(graph.edges(), |v| graph.name(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Capabilities;
    use crate::config::StageConfig;
    use crate::graph::is_topological_order;

    fn independent(names: &[&str]) -> Vec<StageConfig> {
        names
            .iter()
            .map(|name| StageConfig::new(*name, Capabilities::new()))
            .collect()
    }

    #[test]
    fn test_input_order_tie_break() {
        let stages = independent(&["zulu", "alpha", "mike"]);
        let graph = DependencyGraph::new(&stages);

        assert_eq!(linearize(&graph, TieBreak::InputOrder), vec![0, 1, 2]);
    }

    #[test]
    fn test_name_tie_break() {
        let stages = independent(&["zulu", "alpha", "mike"]);
        let graph = DependencyGraph::new(&stages);

        assert_eq!(linearize(&graph, TieBreak::Name), vec![1, 2, 0]);
    }

    #[test]
    fn test_dependencies_override_tie_break() {
        let stages = independent(&["zulu", "alpha", "mike"]);
        let mut graph = DependencyGraph::new(&stages);
        graph.add_dependency(0, 1);

        for tie_break in [TieBreak::InputOrder, TieBreak::Name] {
            let order = linearize(&graph, tie_break);
            assert!(is_topological_order(graph.edges(), &order));
        }
        assert_eq!(linearize(&graph, TieBreak::Name), vec![2, 0, 1]);
    }
}
