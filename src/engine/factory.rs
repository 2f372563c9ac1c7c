// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{OrdererOptions, Strategy};
use crate::engine::declared::DeclaredOrderer;
use crate::engine::dependency_orderer::DependencyOrderer;
use crate::traits::{PipelineOrderer, StageDescriptor};

/// Factory for creating pipeline orderers from configuration
pub struct OrdererFactory;

impl OrdererFactory {
    /// Create an orderer based on the configured strategy
    pub fn from_options<P: StageDescriptor, S>(
        options: &OrdererOptions,
    ) -> Box<dyn PipelineOrderer<P, S>> {
        match options.strategy {
            Strategy::Dependency => {
                Box::new(DependencyOrderer::new().with_tie_break(options.tie_break))
            }
            Strategy::Declared => Box::new(DeclaredOrderer::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SourceConfig, StageConfig, TieBreak};

    #[test]
    fn test_strategy_selects_orderer() {
        let dependency = OrdererFactory::from_options::<StageConfig, SourceConfig>(
            &OrdererOptions::default(),
        );
        assert_eq!(dependency.name(), "dependency");

        let declared = OrdererFactory::from_options::<StageConfig, SourceConfig>(&OrdererOptions {
            strategy: Strategy::Declared,
            tie_break: TieBreak::Name,
        });
        assert_eq!(declared.name(), "declared");
    }
}
