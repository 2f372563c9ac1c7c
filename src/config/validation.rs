// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation of pipeline declarations before they are ordered.
//!
//! The ordering engine itself has no failure modes, but a declaration can still be
//! malformed in ways that would make its diagnostics useless or its matching silently
//! wrong. Two checks run, and all of their errors are accumulated:
//!
//! 1. **Name uniqueness**: stage names key every cycle diagnostic, so two processors
//!    (or two sources) may not share one.
//! 2. **Non-empty kinds**: a capability with an empty kind or bounds would only ever
//!    match another malformed capability.
//!
//! # Example
//! ```rust
//! use stage_orderer::capabilities::Capabilities;
//! use stage_orderer::config::{validate_pipeline, Config, OrdererOptions, StageConfig};
//! use stage_orderer::errors::ValidationError;
//!
//! let config = Config {
//!     orderer: OrdererOptions::default(),
//!     sources: vec![],
//!     processors: vec![
//!         StageConfig::new("tokens", Capabilities::new()),
//!         StageConfig::new("tokens", Capabilities::new()),
//!     ],
//! };
//!
//! let errors = validate_pipeline(&config).unwrap_err();
//! assert!(matches!(errors[0], ValidationError::DuplicateStageName { .. }));
//! ```

use std::collections::HashSet;

use crate::capabilities::{Capabilities, Capability};
use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{DuplicateStageName, EmptyCapabilityKind};
use crate::observability::messages::StructuredLog;
use crate::traits::StageDescriptor;

/// Validate a pipeline declaration, returning every problem found.
pub fn validate_pipeline(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(unique_names(&config.processors, "processor"));
    errors.extend(unique_names(&config.sources, "source"));

    for stage in &config.processors {
        errors.extend(non_empty_kinds(stage.name(), stage.capabilities()));
    }
    for source in &config.sources {
        errors.extend(non_empty_kinds(source.name(), source.capabilities()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn unique_names<S: StageDescriptor>(stages: &[S], role: &'static str) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for stage in stages {
        if !seen.insert(stage.name()) {
            DuplicateStageName {
                name: stage.name(),
                role,
            }
            .log();
            errors.push(ValidationError::DuplicateStageName {
                name: stage.name().to_string(),
                role,
            });
        }
    }

    errors
}

fn non_empty_kinds(stage: &str, capabilities: &Capabilities) -> Vec<ValidationError> {
    let lists = [
        ("creates", &capabilities.creates),
        ("processes", &capabilities.processes),
        ("deletes", &capabilities.deletes),
    ];

    let mut errors = Vec::new();
    for (list, entries) in lists {
        for capability in entries.iter().filter(|c| has_empty_kind(c)) {
            EmptyCapabilityKind {
                stage,
                list,
                category: capability.category(),
            }
            .log();
            errors.push(ValidationError::EmptyCapabilityKind {
                stage: stage.to_string(),
                list,
                category: capability.category(),
            });
        }
    }

    errors
}

fn has_empty_kind(capability: &Capability) -> bool {
    match capability {
        Capability::Content { kind } | Capability::Group { kind } => kind.trim().is_empty(),
        Capability::Annotation { kind, bounds } => {
            kind.trim().is_empty() || bounds.trim().is_empty()
        }
    }
}
