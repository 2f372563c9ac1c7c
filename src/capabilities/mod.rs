// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability declarations for pipeline stages.
//!
//! A stage never tells the orderer what it runs after. It only declares the kinds of
//! data it touches, split into three lists:
//!
//! * `creates` - data the stage adds to an item
//! * `processes` - data the stage reads
//! * `deletes` - data the stage removes
//!
//! Each entry is a [`Capability`]: a *type* of content, annotation or group, never a
//! concrete instance. The orderer infers producer/consumer relationships by matching
//! these declarations against each other (see [`matcher`]).
//!
//! # Example
//! ```
//! use stage_orderer::capabilities::{Capabilities, Capability};
//!
//! let caps = Capabilities::builder()
//!     .with_processes_content("text")
//!     .with_creates_annotations("entity/weapon", "span")
//!     .build();
//!
//! assert_eq!(caps.processes, vec![Capability::content("text")]);
//! assert_eq!(caps.creates.len(), 1);
//! assert!(caps.deletes.is_empty());
//! ```

pub mod matcher;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use matcher::capabilities_match;

/// A typed declaration of a kind of data a stage creates, processes or deletes.
///
/// The variant set is closed so that [`capabilities_match`] can dispatch exhaustively.
///
/// # YAML form
/// ```yaml
/// - { type: content, kind: text }
/// - { type: annotation, kind: entity/weapon, bounds: span }
/// - { type: group, kind: "*" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Capability {
    /// A kind of content (e.g. `text`, `image`).
    Content { kind: String },
    /// A kind of annotation together with the kind of bounds it is attached by.
    Annotation { kind: String, bounds: String },
    /// A kind of group of annotations.
    Group { kind: String },
}

impl Capability {
    pub fn content(kind: impl Into<String>) -> Self {
        Capability::Content { kind: kind.into() }
    }

    pub fn annotation(kind: impl Into<String>, bounds: impl Into<String>) -> Self {
        Capability::Annotation {
            kind: kind.into(),
            bounds: bounds.into(),
        }
    }

    pub fn group(kind: impl Into<String>) -> Self {
        Capability::Group { kind: kind.into() }
    }

    /// Whether this capability denotes the same resource as `other`.
    pub fn matches(&self, other: &Capability) -> bool {
        capabilities_match(self, other)
    }

    /// Short label for the capability category, used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Capability::Content { .. } => "content",
            Capability::Annotation { .. } => "annotation",
            Capability::Group { .. } => "group",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Content { kind } => write!(f, "content '{}'", kind),
            Capability::Annotation { kind, bounds } => {
                write!(f, "annotation '{}' ({} bounds)", kind, bounds)
            }
            Capability::Group { kind } => write!(f, "group '{}'", kind),
        }
    }
}

/// The full capability declaration of one stage.
///
/// The three lists may overlap; a stage can create something and delete it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub creates: Vec<Capability>,
    #[serde(default)]
    pub processes: Vec<Capability>,
    #[serde(default)]
    pub deletes: Vec<Capability>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CapabilitiesBuilder {
        CapabilitiesBuilder::default()
    }

    /// Iterate every declared capability, regardless of list.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.creates
            .iter()
            .chain(self.processes.iter())
            .chain(self.deletes.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.creates.is_empty() && self.processes.is_empty() && self.deletes.is_empty()
    }
}

/// Fluent builder for [`Capabilities`].
#[derive(Debug, Default)]
pub struct CapabilitiesBuilder {
    capabilities: Capabilities,
}

impl CapabilitiesBuilder {
    pub fn with_creates(mut self, capability: Capability) -> Self {
        self.capabilities.creates.push(capability);
        self
    }

    pub fn with_processes(mut self, capability: Capability) -> Self {
        self.capabilities.processes.push(capability);
        self
    }

    pub fn with_deletes(mut self, capability: Capability) -> Self {
        self.capabilities.deletes.push(capability);
        self
    }

    pub fn with_creates_content(self, kind: impl Into<String>) -> Self {
        self.with_creates(Capability::content(kind))
    }

    pub fn with_processes_content(self, kind: impl Into<String>) -> Self {
        self.with_processes(Capability::content(kind))
    }

    pub fn with_deletes_content(self, kind: impl Into<String>) -> Self {
        self.with_deletes(Capability::content(kind))
    }

    pub fn with_creates_annotations(
        self,
        kind: impl Into<String>,
        bounds: impl Into<String>,
    ) -> Self {
        self.with_creates(Capability::annotation(kind, bounds))
    }

    pub fn with_processes_annotations(
        self,
        kind: impl Into<String>,
        bounds: impl Into<String>,
    ) -> Self {
        self.with_processes(Capability::annotation(kind, bounds))
    }

    pub fn with_deletes_annotations(
        self,
        kind: impl Into<String>,
        bounds: impl Into<String>,
    ) -> Self {
        self.with_deletes(Capability::annotation(kind, bounds))
    }

    pub fn with_creates_groups(self, kind: impl Into<String>) -> Self {
        self.with_creates(Capability::group(kind))
    }

    pub fn with_processes_groups(self, kind: impl Into<String>) -> Self {
        self.with_processes(Capability::group(kind))
    }

    pub fn with_deletes_groups(self, kind: impl Into<String>) -> Self {
        self.with_deletes(Capability::group(kind))
    }

    pub fn build(self) -> Capabilities {
        self.capabilities
    }
}
