// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor ordering events.
//!
//! This module contains message types for logging events related to:
//! * Ordering lifecycle (start, completion)
//! * Dependency graph construction
//! * Cycle detection and breaking

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor ordering started.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::ordering::OrderingStarted;
///
/// let msg = OrderingStarted {
///     orderer: "dependency",
///     processor_count: 5,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct OrderingStarted<'a> {
    pub orderer: &'a str,
    pub processor_count: usize,
}

impl Display for OrderingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ordering {} processors with {} orderer",
            self.processor_count, self.orderer
        )
    }
}

impl StructuredLog for OrderingStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            orderer = self.orderer,
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "ordering",
            span_name = name,
            orderer = self.orderer,
            processor_count = self.processor_count,
        )
    }
}

/// Dependency graph inferred from capability declarations.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::ordering::DependencyGraphBuilt;
///
/// let msg = DependencyGraphBuilt {
///     stage_count: 4,
///     edge_count: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct DependencyGraphBuilt {
    pub stage_count: usize,
    pub edge_count: usize,
}

impl Display for DependencyGraphBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Inferred {} dependencies between {} processors",
            self.edge_count, self.stage_count
        )
    }
}

impl StructuredLog for DependencyGraphBuilt {
    fn log(&self) {
        tracing::debug!(
            stage_count = self.stage_count,
            edge_count = self.edge_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "dependency_graph",
            span_name = name,
            stage_count = self.stage_count,
            edge_count = self.edge_count,
        )
    }
}

/// Cycles found in the inferred dependency graph.
///
/// # Log Level
/// `warn!` - The resulting order may not honour every dependency
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::ordering::CyclesDetected;
///
/// let msg = CyclesDetected { cycle_count: 2 };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct CyclesDetected {
    pub cycle_count: usize,
}

impl Display for CyclesDetected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} cycle(s) detected in dependency graph - ordering of processors may not be optimal",
            self.cycle_count
        )
    }
}

impl StructuredLog for CyclesDetected {
    fn log(&self) {
        tracing::warn!(cycle_count = self.cycle_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "cycles_detected",
            span_name = name,
            cycle_count = self.cycle_count,
        )
    }
}

/// A cycle about to be broken.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::ordering::CycleFound;
///
/// let stages = vec!["tokens", "sentences"];
/// let msg = CycleFound { stages: &stages };
///
/// assert_eq!(msg.to_string(), "The following 2 processors form a cycle: tokens, sentences");
/// ```
pub struct CycleFound<'a> {
    pub stages: &'a [&'a str],
}

impl Display for CycleFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "The following {} processors form a cycle: {}",
            self.stages.len(),
            self.stages.join(", ")
        )
    }
}

impl StructuredLog for CycleFound<'_> {
    fn log(&self) {
        tracing::info!(
            cycle = %self.stages.join(" -> "),
            cycle_length = self.stages.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "cycle",
            span_name = name,
            cycle = %self.stages.join(" -> "),
            cycle_length = self.stages.len(),
        )
    }
}

/// An inferred dependency discarded to break a cycle.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::ordering::DependencyRemoved;
///
/// let msg = DependencyRemoved {
///     from: "tokens",
///     to: "sentences",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Dependency between tokens and sentences removed to break cycle"
/// );
/// ```
pub struct DependencyRemoved<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl Display for DependencyRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dependency between {} and {} removed to break cycle",
            self.from, self.to
        )
    }
}

impl StructuredLog for DependencyRemoved<'_> {
    fn log(&self) {
        tracing::info!(from = self.from, to = self.to, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dependency_removed",
            span_name = name,
            from = self.from,
            to = self.to,
        )
    }
}

/// Processor ordering completed.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use stage_orderer::observability::messages::ordering::OrderingCompleted;
/// use std::time::Duration;
///
/// let msg = OrderingCompleted {
///     processor_count: 5,
///     removed_count: 1,
///     duration: Duration::from_micros(120),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct OrderingCompleted {
    pub processor_count: usize,
    pub removed_count: usize,
    pub duration: std::time::Duration,
}

impl Display for OrderingCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ordered {} processors in {:?} ({} dependencies removed)",
            self.processor_count, self.duration, self.removed_count
        )
    }
}

impl StructuredLog for OrderingCompleted {
    fn log(&self) {
        tracing::debug!(
            processor_count = self.processor_count,
            removed_count = self.removed_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "ordering_completed",
            span_name = name,
            processor_count = self.processor_count,
            removed_count = self.removed_count,
            duration = ?self.duration,
        )
    }
}
