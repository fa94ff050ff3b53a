// ABOUTME: Estimation-stage errors for landmark detection and body-fat calculation
// ABOUTME: All variants are recoverable by the pipeline's fallback estimate policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ValidationError;
use thiserror::Error;

/// Failures raised anywhere in the photo -> landmarks -> circumferences -> body-fat chain
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EstimationError {
    /// The landmark provider could not process an image
    #[error("Landmark detection failed: {reason}")]
    DetectionFailed {
        /// Why detection failed (e.g. person not fully in frame)
        reason: String,
    },

    /// A female measurement set is missing the hip circumference
    #[error("Hip circumference is required for female body-fat estimation")]
    MissingHipMeasurement,

    /// A measurement makes the formula undefined (log of a non-positive value)
    #[error("Invalid measurement '{field}': {value}")]
    InvalidMeasurement {
        /// Measurement or derived quantity that was invalid
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// Detected landmarks violate the landmark-set invariants
    #[error("Invalid landmarks: {0}")]
    InvalidLandmarks(#[from] ValidationError),
}

impl EstimationError {
    /// Create a detection failure
    #[must_use]
    pub fn detection_failed(reason: impl Into<String>) -> Self {
        Self::DetectionFailed {
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name used in structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DetectionFailed { .. } => "detection_failed",
            Self::MissingHipMeasurement => "missing_hip_measurement",
            Self::InvalidMeasurement { .. } => "invalid_measurement",
            Self::InvalidLandmarks(_) => "invalid_landmarks",
        }
    }
}
