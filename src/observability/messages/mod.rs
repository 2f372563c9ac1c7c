// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself as a `tracing` event with typed fields at the
//! log level it documents.
//!
//! # Organization
//!
//! * `ordering` - dependency graph, cycle breaking and linearization events
//! * `validation` - pipeline declaration validation errors
//!
//! # Usage Pattern
//!
//! ```rust
//! use stage_orderer::observability::messages::ordering::CyclesDetected;
//! use stage_orderer::observability::messages::StructuredLog;
//!
//! let msg = CyclesDetected { cycle_count: 2 };
//!
//! tracing::warn!("{}", msg);
//! msg.log(); // same message, with `cycle_count` as a structured field
//! ```

use tracing::Span;

pub mod ordering;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a `tracing` event
    fn log(&self);

    /// Open a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
