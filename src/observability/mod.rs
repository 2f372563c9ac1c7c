// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for the diagnostic logging emitted
//! while validating and ordering pipelines. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep the wording of each event in one place
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::ordering` - dependency graph, cycle breaking and linearization events
//! * `messages::validation` - pipeline declaration validation errors
//!
//! [`TracingEvents`] bridges the orderer's event side-channel onto these messages.
//!
//! # Usage
//!
//! ```rust
//! use stage_orderer::observability::messages::ordering::DependencyRemoved;
//! use stage_orderer::observability::messages::StructuredLog;
//!
//! let msg = DependencyRemoved {
//!     from: "sentences",
//!     to: "tokens",
//! };
//!
//! msg.log();
//! ```

mod events;
pub mod messages;

pub use events::TracingEvents;
