// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::OrderingPlan;
use crate::observability::messages::ordering::OrderingStarted;
use crate::observability::messages::StructuredLog;
use crate::traits::{PipelineOrderer, StageDescriptor};

/// Orderer that keeps processors and sources exactly as declared.
///
/// Useful when a pipeline author has already ordered the stages by hand, or to
/// compare against the inferred order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclaredOrderer;

impl DeclaredOrderer {
    pub fn new() -> Self {
        Self
    }
}

impl<P: StageDescriptor, S> PipelineOrderer<P, S> for DeclaredOrderer {
    fn plan(&self, processors: &[P]) -> OrderingPlan {
        OrderingStarted {
            orderer: "declared",
            processor_count: processors.len(),
        }
        .log();
        OrderingPlan::identity(processors.len())
    }

    fn name(&self) -> &'static str {
        "declared"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Capabilities;
    use crate::config::{SourceConfig, StageConfig};

    #[test]
    fn test_keeps_declared_order() {
        let stages = vec![
            StageConfig::new("reader", Capabilities::builder().with_processes_content("text").build()),
            StageConfig::new("writer", Capabilities::builder().with_creates_content("text").build()),
        ];

        let orderer: &dyn PipelineOrderer<StageConfig, SourceConfig> = &DeclaredOrderer::new();
        let ordered = orderer.order_processors(stages);

        assert_eq!(ordered[0].name, "reader");
        assert_eq!(ordered[1].name, "writer");
        assert_eq!(orderer.order_sources(vec![]).len(), 0);
        assert_eq!(orderer.plan(&ordered), OrderingPlan::identity(2));
        assert_eq!(orderer.name(), "declared");
    }
}
