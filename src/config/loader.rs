// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::capabilities::Capabilities;
use crate::errors::ConfigError;
use crate::observability::messages::validation::PipelineValidationFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::StageDescriptor;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A pipeline declaration: the stages a runner will execute and how to order them.
///
/// It is typically loaded from a YAML file.
///
/// # Fields
/// * `orderer` - Ordering options (optional, defaults to dependency ordering)
/// * `sources` - Data-ingestion stages, kept in declared order (optional)
/// * `processors` - Processing stages and their capability declarations
///
/// # Example
/// ```yaml
/// orderer:
///   strategy: dependency
///   tie_break: input_order
/// sources:
///   - name: file-source
/// processors:
///   - name: weapons
///     processes:
///       - { type: content, kind: text }
///     creates:
///       - { type: annotation, kind: entity/weapon, bounds: span }
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub orderer: OrdererOptions,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub processors: Vec<StageConfig>,
}

/// Options controlling how processors are ordered.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq)]
pub struct OrdererOptions {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// Ordering strategy for processors.
///
/// # Variants
/// * `Dependency` - Infer dependencies from capabilities and order by them
/// * `Declared` - Keep processors in declared order
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Dependency,
    Declared,
}

/// How to choose between processors that are ready at the same time.
///
/// Any choice gives a valid order; fixing one makes the output reproducible.
///
/// # Variants
/// * `InputOrder` - Earliest declared processor first
/// * `Name` - Lexicographically smallest name first, then declared order
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    InputOrder,
    Name,
}

/// A processing stage as declared in a pipeline file.
///
/// # Example
/// ```yaml
/// name: summariser
/// processes:
///   - { type: content, kind: text }
///   - { type: annotation, kind: grammar/sentence, bounds: span }
/// creates:
///   - { type: annotation, kind: text/summary, bounds: content }
/// options:
///   top_n: 5
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StageConfig {
    pub name: String,
    #[serde(flatten)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>, // stage-specific settings, passed through
}

impl StageConfig {
    pub fn new(name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            name: name.into(),
            capabilities,
            options: HashMap::new(),
        }
    }
}

impl StageDescriptor for StageConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

/// A data-ingestion stage as declared in a pipeline file.
///
/// Sources are never reordered; their capabilities are informational.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    #[serde(flatten)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

impl StageDescriptor for SourceConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

/// Load a pipeline declaration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a pipeline declaration from a YAML file
///
/// Every validation error is logged before the combined error is returned.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_pipeline(&cfg) {
        PipelineValidationFailed {
            error_count: validation_errors.len(),
        }
        .log();
        return Err(ConfigError::Validation(validation_errors));
    }

    Ok(cfg)
}
