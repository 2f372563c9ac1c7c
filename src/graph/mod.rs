// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Self-contained directed graph utilities keyed by vertex index.
//!
//! Nothing in this module knows about stages or capabilities. Vertices are opaque
//! `usize` handles in `0..vertex_count`, which keeps graph internals independent of
//! stage identity and equality.
//!
//! * [`DiGraph`] - adjacency-set digraph with edge removal
//! * [`simple_cycles`] - Johnson's enumeration of every elementary cycle, also available
//!   lazily through [`for_each_simple_cycle`]
//! * [`topological_order`] - Kahn's algorithm with a caller-supplied tie-break rank

mod digraph;
mod simple_cycles;
mod topological;

pub use digraph::DiGraph;
pub use simple_cycles::{
    count_simple_cycles, first_simple_cycle, for_each_simple_cycle, simple_cycles,
};
pub use topological::{is_topological_order, topological_order};
