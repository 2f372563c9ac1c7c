// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::ordering::{CycleFound, CyclesDetected, DependencyRemoved};
use crate::observability::messages::StructuredLog;
use crate::traits::OrderingEvents;

/// Reports ordering events as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEvents;

impl OrderingEvents for TracingEvents {
    fn cycles_detected(&self, cycle_count: usize) {
        CyclesDetected { cycle_count }.log();
    }

    fn cycle_found(&self, stages: &[&str]) {
        CycleFound { stages }.log();
    }

    fn dependency_removed(&self, from: &str, to: &str) {
        DependencyRemoved { from, to }.log();
    }
}
