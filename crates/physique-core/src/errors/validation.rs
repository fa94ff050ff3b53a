// ABOUTME: Validation error raised for malformed or out-of-range profile and scan input
// ABOUTME: Always names the offending field so callers can report it precisely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Kind of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Value is syntactically fine but outside the accepted range
    OutOfRange,
    /// Value is not one of the accepted options
    Unrecognized,
    /// Value is required but absent
    Missing,
}

/// Malformed or out-of-range input; surfaced immediately, never retried
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid value for '{field}': {reason}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,
    /// Why the value was rejected
    pub reason: String,
    /// Kind of failure
    pub kind: ValidationKind,
}

impl ValidationError {
    /// Value outside the accepted range
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
            kind: ValidationKind::OutOfRange,
        }
    }

    /// Value not among the accepted options
    #[must_use]
    pub fn unrecognized(field: impl Into<String>, value: &str) -> Self {
        Self {
            field: field.into(),
            reason: format!("unrecognized value '{value}'"),
            kind: ValidationKind::Unrecognized,
        }
    }

    /// Required value absent
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: "value is required".to_owned(),
            kind: ValidationKind::Missing,
        }
    }

    /// Whether this error reports a range violation
    #[must_use]
    pub const fn is_range_violation(&self) -> bool {
        matches!(self.kind, ValidationKind::OutOfRange)
    }
}
