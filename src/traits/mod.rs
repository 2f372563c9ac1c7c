// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod descriptor;
pub mod events;
pub mod orderer;

pub use descriptor::StageDescriptor;
pub use events::{NoopEvents, OrderingEvents};
pub use orderer::PipelineOrderer;
