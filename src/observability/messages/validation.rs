// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline declaration validation errors.
//!
//! This module contains message types for logging events related to:
//! * Duplicate stage name detection
//! * Empty capability kind detection
//! * Overall validation failure

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Duplicate stage name detected in a pipeline declaration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::validation::DuplicateStageName;
///
/// let msg = DuplicateStageName {
///     name: "tokens",
///     role: "processor",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateStageName<'a> {
    pub name: &'a str,
    pub role: &'a str,
}

impl Display for DuplicateStageName<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate {} name: '{}'", self.role, self.name)
    }
}

impl StructuredLog for DuplicateStageName<'_> {
    fn log(&self) {
        tracing::error!(stage = self.name, role = self.role, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "duplicate_stage_name",
            span_name = name,
            stage = self.name,
            role = self.role,
        )
    }
}

/// Capability with an empty kind or bounds.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::validation::EmptyCapabilityKind;
///
/// let msg = EmptyCapabilityKind {
///     stage: "weapons",
///     list: "creates",
///     category: "annotation",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct EmptyCapabilityKind<'a> {
    pub stage: &'a str,
    pub list: &'a str,
    pub category: &'a str,
}

impl Display for EmptyCapabilityKind<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' has an empty kind or bounds in a {} capability under '{}'",
            self.stage, self.category, self.list
        )
    }
}

impl StructuredLog for EmptyCapabilityKind<'_> {
    fn log(&self) {
        tracing::error!(
            stage = self.stage,
            list = self.list,
            category = self.category,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "empty_capability_kind",
            span_name = name,
            stage = self.stage,
            list = self.list,
            category = self.category,
        )
    }
}

/// Pipeline declaration rejected.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PipelineValidationFailed {
    pub error_count: usize,
}

impl Display for PipelineValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline declaration failed validation with {} error(s)",
            self.error_count
        )
    }
}

impl StructuredLog for PipelineValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "pipeline_validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}
