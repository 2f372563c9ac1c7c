// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use crate::capabilities::{Capabilities, Capability};
use crate::config::{SourceConfig, StageConfig, TieBreak};
use crate::engine::{build_dependency_graph, DependencyOrderer, RemovedDependency};
use crate::graph::is_topological_order;
use crate::traits::{OrderingEvents, PipelineOrderer};

/// End-to-end ordering scenarios through the dependency orderer
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingEvents {
        removed: Mutex<Vec<(String, String)>>,
    }

    impl OrderingEvents for RecordingEvents {
        fn dependency_removed(&self, from: &str, to: &str) {
            self.removed
                .lock()
                .unwrap()
                .push((from.to_string(), to.to_string()));
        }
    }

    fn content_stage(
        name: &str,
        creates: &[&str],
        processes: &[&str],
        deletes: &[&str],
    ) -> StageConfig {
        StageConfig::new(
            name,
            Capabilities {
                creates: creates.iter().map(|k| Capability::content(*k)).collect(),
                processes: processes.iter().map(|k| Capability::content(*k)).collect(),
                deletes: deletes.iter().map(|k| Capability::content(*k)).collect(),
            },
        )
    }

    fn annotation_stage(
        name: &str,
        creates: &[&str],
        processes: &[&str],
        deletes: &[&str],
    ) -> StageConfig {
        let span = |k: &&str| Capability::annotation(*k, "span");
        StageConfig::new(
            name,
            Capabilities {
                creates: creates.iter().map(span).collect(),
                processes: processes.iter().map(span).collect(),
                deletes: deletes.iter().map(span).collect(),
            },
        )
    }

    fn names(stages: &[StageConfig]) -> Vec<&str> {
        stages.iter().map(|s| s.name.as_str()).collect()
    }

    /// Plan, then check the order against every dependency that survived
    fn assert_valid_plan(stages: &[StageConfig]) -> Vec<usize> {
        let plan = DependencyOrderer::new().plan(stages);

        let mut graph = build_dependency_graph(stages);
        for RemovedDependency { from, to } in &plan.removed {
            assert!(graph.edges_mut().remove_edge(*from, *to));
        }
        assert!(is_topological_order(graph.edges(), &plan.order));

        plan.order
    }

    #[test]
    fn test_simple_two_processors() {
        let p1 = content_stage("p1", &["text"], &[], &[]);
        let p2 = content_stage("p2", &[], &["text"], &[]);

        let ordered = DependencyOrderer::new().order_processors(vec![p2, p1]);
        assert_eq!(names(&ordered), vec!["p1", "p2"]);
    }

    #[test]
    fn test_simple_three_processors() {
        let p1 = content_stage("p1", &["text"], &[], &[]);
        let p2 = content_stage("p2", &[], &["text"], &[]);
        let p3 = content_stage("p3", &[], &[], &["text"]);

        let ordered = DependencyOrderer::new().order_processors(vec![p2, p3, p1]);
        assert_eq!(names(&ordered), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_simple_four_processors() {
        let p1 = content_stage("p1", &["text"], &[], &[]);
        let p2 = content_stage("p2", &[], &["text"], &[]);
        let p3 = content_stage("p3", &[], &["text"], &["text"]);
        let p4 = content_stage("p4", &[], &[], &["text"]);

        let ordered = DependencyOrderer::new().order_processors(vec![p2, p3, p1, p4]);
        assert_eq!(names(&ordered), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_simple_cycle_two_processors() {
        let p1 = content_stage("p1", &["text"], &["text"], &[]);
        let p2 = content_stage("p2", &["text"], &["text"], &[]);

        let ordered = DependencyOrderer::new().order_processors(vec![p1, p2]);

        // Either could come first
        assert_eq!(ordered.len(), 2);
        let mut sorted = names(&ordered);
        sorted.sort();
        assert_eq!(sorted, vec!["p1", "p2"]);
    }

    #[test]
    fn test_creators_that_delete_each_others_output() {
        let p1 = content_stage("p1", &["text"], &[], &["text"]);
        let p2 = content_stage("p2", &["text"], &[], &["text"]);

        let plan = DependencyOrderer::new().plan(&[p1.clone(), p2.clone()]);
        assert_eq!(plan.edge_count, 2);
        assert_eq!(plan.cycle_count, 1);
        assert_eq!(plan.removed, vec![RemovedDependency { from: 0, to: 1 }]);

        let ordered = DependencyOrderer::new().order_processors(vec![p1, p2]);
        assert_eq!(names(&ordered), vec!["p2", "p1"]);
    }

    #[test]
    fn test_two_cycles_two_content() {
        let stages = vec![
            content_stage("p1", &["string", "integer"], &[], &[]),
            content_stage("p2", &["integer"], &["string"], &[]),
            content_stage("p3", &["string"], &["integer"], &[]),
            content_stage("p4", &[], &["integer"], &[]),
            content_stage("p5", &["string"], &[], &["integer"]),
        ];

        let order = assert_valid_plan(&stages);
        assert_eq!(order.len(), 5);

        let ordered = DependencyOrderer::new().order_processors(stages);
        assert_eq!(ordered.len(), 5);
    }

    #[test]
    fn test_two_content() {
        let p1 = content_stage("p1", &["string"], &["integer"], &[]);
        let p2 = content_stage("p2", &["integer"], &["integer"], &[]);
        let p3 = content_stage("p3", &["string"], &["string"], &[]);

        let ordered = DependencyOrderer::new().order_processors(vec![p1, p2, p3]);
        assert_eq!(names(&ordered), vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn test_two_content_two_dependencies() {
        let p1 = content_stage("p1", &["string", "integer"], &["string", "integer"], &[]);
        let p2 = content_stage("p2", &["string", "integer"], &["string", "integer"], &[]);

        let plan = DependencyOrderer::new().plan(&[p1, p2]);
        assert_eq!(plan.order.len(), 2);
        assert_eq!(plan.removed.len(), 1);
    }

    #[test]
    fn test_simple_two_processors_wildcard() {
        let p1 = annotation_stage("p1", &["Foo"], &[], &[]);
        let p2 = annotation_stage("p2", &[], &["*"], &[]);

        let ordered = DependencyOrderer::new().order_processors(vec![p2, p1]);
        assert_eq!(names(&ordered), vec!["p1", "p2"]);
    }

    #[test]
    fn test_wildcards_and_named() {
        let p1 = annotation_stage("p1", &["Foo", "Bar"], &[], &[]);
        let p2 = annotation_stage("p2", &["Foo"], &["Bar"], &[]);
        let p3 = annotation_stage("p3", &["Baz"], &["*"], &[]);
        let p4 = annotation_stage("p4", &[], &[], &["Baz"]);

        let ordered = DependencyOrderer::new().order_processors(vec![p2, p1, p4, p3]);
        assert_eq!(names(&ordered), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_wildcard_needs_matching_bounds() {
        let producer = StageConfig::new(
            "producer",
            Capabilities::builder()
                .with_creates_annotations("Foo", "span")
                .build(),
        );
        let consumer = StageConfig::new(
            "consumer",
            Capabilities::builder()
                .with_processes_annotations("*", "content")
                .build(),
        );

        let plan = DependencyOrderer::new().plan(&[consumer, producer]);
        assert_eq!(plan.edge_count, 0);
        assert_eq!(plan.order, vec![0, 1]);
    }

    #[test]
    fn test_group_wildcard_dependency() {
        let grouper = StageConfig::new(
            "grouper",
            Capabilities::builder().with_creates_groups("exercise").build(),
        );
        let cleaner = StageConfig::new(
            "cleaner",
            Capabilities::builder().with_deletes_groups("*").build(),
        );

        let ordered = DependencyOrderer::new().order_processors(vec![cleaner, grouper]);
        assert_eq!(names(&ordered), vec!["grouper", "cleaner"]);
    }

    #[test]
    fn test_independent_processors_keep_input_order() {
        let stages = vec![
            content_stage("c", &["image"], &[], &[]),
            content_stage("a", &["text"], &[], &[]),
            content_stage("b", &[], &["audio"], &[]),
        ];

        let ordered = DependencyOrderer::new().order_processors(stages);
        assert_eq!(names(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_independent_processors_by_name() {
        let stages = vec![
            content_stage("c", &["image"], &[], &[]),
            content_stage("a", &["text"], &[], &[]),
            content_stage("b", &[], &["audio"], &[]),
        ];

        let ordered = DependencyOrderer::new()
            .with_tie_break(TieBreak::Name)
            .order_processors(stages);
        assert_eq!(names(&ordered), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_and_single_input() {
        let orderer = DependencyOrderer::new();
        assert!(orderer.order_processors(Vec::<StageConfig>::new()).is_empty());

        let single = orderer.order_processors(vec![content_stage("only", &["text"], &["text"], &["text"])]);
        assert_eq!(names(&single), vec!["only"]);
    }

    #[test]
    fn test_sources_pass_through() {
        let sources: Vec<SourceConfig> = ["s3", "s1", "s2"]
            .iter()
            .map(|name| SourceConfig {
                name: name.to_string(),
                capabilities: Capabilities::builder().with_creates_content("text").build(),
                options: Default::default(),
            })
            .collect();

        let orderer: &dyn PipelineOrderer<StageConfig, SourceConfig> = &DependencyOrderer::new();
        let ordered: Vec<String> = orderer
            .order_sources(sources)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(ordered, vec!["s3", "s1", "s2"]);
    }

    #[test]
    fn test_removed_dependencies_are_reported() {
        let events = Arc::new(RecordingEvents::default());
        let orderer = DependencyOrderer::new().with_events(events.clone());

        let p1 = content_stage("p1", &["text"], &["text"], &[]);
        let p2 = content_stage("p2", &["text"], &["text"], &[]);
        let ordered = orderer.order_processors(vec![p1, p2]);

        assert_eq!(names(&ordered), vec!["p2", "p1"]);
        assert_eq!(
            *events.removed.lock().unwrap(),
            vec![("p1".to_string(), "p2".to_string())]
        );
    }

    #[test]
    fn test_trait_object_orders_processors() {
        let orderer: Box<dyn PipelineOrderer<StageConfig, SourceConfig>> =
            Box::new(DependencyOrderer::new());

        let p1 = content_stage("p1", &["text"], &[], &[]);
        let p2 = content_stage("p2", &[], &["text"], &[]);
        let ordered = orderer.order_processors(vec![p2, p1]);

        assert_eq!(names(&ordered), vec!["p1", "p2"]);
        assert_eq!(orderer.name(), "dependency");
    }

    #[test]
    fn test_shared_orderer_across_threads() {
        let orderer = Arc::new(DependencyOrderer::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let orderer = Arc::clone(&orderer);
                std::thread::spawn(move || {
                    let p1 = content_stage("p1", &["text"], &[], &[]);
                    let p2 = content_stage("p2", &[], &["text"], &[]);
                    orderer
                        .order_processors(vec![p2, p1])
                        .into_iter()
                        .map(|s| s.name)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec!["p1", "p2"]);
        }
    }

    #[test]
    fn test_borrowed_descriptors() {
        let p1 = content_stage("p1", &["text"], &[], &[]);
        let p2 = content_stage("p2", &[], &["text"], &[]);

        let ordered = DependencyOrderer::new().order_processors(vec![&p2, &p1]);
        assert_eq!(ordered[0].name, "p1");
        assert_eq!(ordered[1].name, "p2");
    }
}
