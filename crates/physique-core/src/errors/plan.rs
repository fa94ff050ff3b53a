// ABOUTME: Plan generation errors raised at the untrusted input boundary
// ABOUTME: Closed enums make these unreachable once a request is parsed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ValidationError;
use thiserror::Error;

/// Plan generation failure; a programmer/data error rather than a user-recoverable one
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanError {
    /// Goal outside `lose_fat`, `gain_muscle`, `maintain`
    #[error("Invalid goal '{0}': expected one of lose_fat, gain_muscle, maintain")]
    InvalidGoal(String),

    /// Activity level outside the five recognized levels
    #[error(
        "Invalid activity level '{0}': expected one of sedentary, light, moderate, active, very_active"
    )]
    InvalidActivityLevel(String),

    /// Plan requests must state an activity level
    #[error("Missing activity level: plan requests require one of sedentary, light, moderate, active, very_active")]
    MissingActivityLevel,

    /// Any other profile field failed validation
    #[error(transparent)]
    InvalidProfile(#[from] ValidationError),
}

impl PlanError {
    /// Name of the request field that carried the bad value
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidGoal(_) => "goal",
            Self::InvalidActivityLevel(_) | Self::MissingActivityLevel => "activity_level",
            Self::InvalidProfile(error) => &error.field,
        }
    }
}
