// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur while validating a pipeline declaration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two stages of the same role share a name
    DuplicateStageName {
        /// The duplicated name
        name: String,
        /// `"processor"` or `"source"`
        role: &'static str,
    },
    /// A capability declares an empty kind or bounds
    EmptyCapabilityKind {
        /// The stage declaring the capability
        stage: String,
        /// Which list the capability sits in (`creates`, `processes`, `deletes`)
        list: &'static str,
        /// Capability category (`content`, `annotation`, `group`)
        category: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateStageName { name, role } => {
                write!(f, "Duplicate {} name: '{}'", role, name)
            }
            ValidationError::EmptyCapabilityKind {
                stage,
                list,
                category,
            } => {
                write!(
                    f,
                    "Stage '{}': empty kind or bounds in {} capability listed under '{}'",
                    stage, category, list
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
