// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading a pipeline declaration from disk.

use crate::errors::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading a pipeline declaration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read pipeline declaration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse pipeline declaration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Pipeline validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
