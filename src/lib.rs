// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod capabilities;   // capability model + matching
pub mod config;         // pipeline declarations
pub mod engine;         // orderers
pub mod errors;         // error handling
pub mod graph;          // directed graph algorithms
pub mod observability;
pub mod traits;         // unified abstractions
