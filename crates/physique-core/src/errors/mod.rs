// ABOUTME: Unified error handling with standard error codes and structured context
// ABOUTME: Domain errors for validation, estimation, and plan generation convert into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain errors are raised close to where they happen:
//! - `ValidationError` - malformed or out-of-range profile/scan input
//! - `EstimationError` - landmark detection and body-fat calculation failures
//! - `PlanError` - goal/activity values outside the recognized enumerations
//!
//! Each converts into `AppError`, which carries an `ErrorCode` and optional
//! context for callers that surface failures across a process boundary.

/// Estimation-stage errors (detection, measurement, calculator domain)
pub mod estimation;
/// Plan generation errors
pub mod plan;
/// Input validation errors
pub mod validation;

pub use estimation::EstimationError;
pub use plan::PlanError;
pub use validation::{ValidationError, ValidationKind};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Required field missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Value outside accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Goal outside the recognized enumeration
    #[serde(rename = "INVALID_GOAL")]
    InvalidGoal = 3004,

    // Resource Management (4000-4999)
    /// Resource not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Estimation (7000-7999)
    /// Landmark detection or body-fat estimation failed
    #[serde(rename = "ESTIMATION_FAILED")]
    EstimationFailed = 7000,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::ValueOutOfRange
            | Self::InvalidGoal => 400,
            Self::ResourceNotFound => 404,
            Self::EstimationFailed => 422,
            Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidGoal => "The requested goal is not recognized",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::EstimationFailed => "Body composition could not be estimated",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// User ID if available
    pub user_id: Option<Uuid>,
    /// Offending field, if the error is about one input field
    pub field: Option<String>,
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a user ID to the error context
    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.context.user_id = Some(user_id);
        self
    }

    /// Name the offending field in the error context
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error.kind {
            ValidationKind::OutOfRange => ErrorCode::ValueOutOfRange,
            ValidationKind::Missing => ErrorCode::MissingRequiredField,
            ValidationKind::Unrecognized => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
            .with_field(error.field.clone())
            .with_source(error)
    }
}

impl From<EstimationError> for AppError {
    fn from(error: EstimationError) -> Self {
        Self::new(ErrorCode::EstimationFailed, error.to_string()).with_source(error)
    }
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        let field = error.field().to_owned();
        let code = match &error {
            PlanError::InvalidGoal(_) => ErrorCode::InvalidGoal,
            PlanError::InvalidActivityLevel(_) => ErrorCode::InvalidInput,
            PlanError::MissingActivityLevel => ErrorCode::MissingRequiredField,
            PlanError::InvalidProfile(validation) if validation.is_range_violation() => {
                ErrorCode::ValueOutOfRange
            }
            PlanError::InvalidProfile(_) => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
            .with_field(field)
            .with_source(error)
    }
}
