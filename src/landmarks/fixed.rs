// ABOUTME: Deterministic landmark provider returning the same keypoints for every valid capture
// ABOUTME: Stand-in for a real pose detector; rejects empty or zero-sized captures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ImageCapture, PoseLandmarkProvider};
use async_trait::async_trait;
use physique_core::errors::EstimationError;
use physique_core::models::{Landmark, LandmarkSet};
use tracing::debug;

/// Keypoints of an upright subject filling a portrait frame
pub const DEFAULT_LANDMARKS: LandmarkSet = LandmarkSet {
    left_shoulder: Landmark::new(0.35, 0.25),
    right_shoulder: Landmark::new(0.65, 0.25),
    left_hip: Landmark::new(0.40, 0.50),
    right_hip: Landmark::new(0.60, 0.50),
    left_knee: Landmark::new(0.42, 0.70),
    right_knee: Landmark::new(0.58, 0.70),
    left_ankle: Landmark::new(0.42, 0.90),
    right_ankle: Landmark::new(0.58, 0.90),
    waist: Landmark::new(0.50, 0.45),
    neck: Landmark::new(0.50, 0.20),
    hip_point: Some(Landmark::new(0.50, 0.55)),
};

/// Landmark provider that ignores pixel content
///
/// Useful for demos, tests, and as the default until a model-backed detector
/// is configured. Output depends only on whether the capture is usable.
#[derive(Debug, Clone)]
pub struct FixedLandmarkProvider {
    landmarks: LandmarkSet,
}

impl FixedLandmarkProvider {
    /// Provider returning [`DEFAULT_LANDMARKS`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            landmarks: DEFAULT_LANDMARKS,
        }
    }

    /// Provider returning a caller-chosen set
    #[must_use]
    pub const fn with_landmarks(landmarks: LandmarkSet) -> Self {
        Self { landmarks }
    }
}

impl Default for FixedLandmarkProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoseLandmarkProvider for FixedLandmarkProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn detect(&self, capture: &ImageCapture) -> Result<LandmarkSet, EstimationError> {
        if capture.payload.is_empty() {
            return Err(EstimationError::detection_failed("image payload is empty"));
        }
        if capture.dimensions().is_empty() {
            return Err(EstimationError::detection_failed(format!(
                "image has zero size ({}x{})",
                capture.width, capture.height
            )));
        }

        debug!(
            provider = self.name(),
            bytes = capture.payload.len(),
            width = capture.width,
            height = capture.height,
            "Returning fixed landmarks"
        );
        Ok(self.landmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physique_core::models::Sex;

    #[tokio::test]
    async fn test_returns_fixed_set_regardless_of_content() {
        let provider = FixedLandmarkProvider::new();
        let a = provider
            .detect(&ImageCapture::new(vec![1_u8, 2, 3], 1080, 1920))
            .await
            .unwrap();
        let b = provider
            .detect(&ImageCapture::new(vec![9_u8; 64], 640, 480))
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, DEFAULT_LANDMARKS);
    }

    #[test]
    fn test_default_landmarks_valid_for_both_sexes() {
        assert!(DEFAULT_LANDMARKS.validate(Sex::Male).is_ok());
        assert!(DEFAULT_LANDMARKS.validate(Sex::Female).is_ok());
    }

    #[tokio::test]
    async fn test_empty_payload_fails_detection() {
        let err = FixedLandmarkProvider::new()
            .detect(&ImageCapture::new(Vec::<u8>::new(), 1080, 1920))
            .await
            .unwrap_err();
        assert!(matches!(err, EstimationError::DetectionFailed { .. }));
    }

    #[tokio::test]
    async fn test_zero_dimension_fails_detection() {
        let err = FixedLandmarkProvider::new()
            .detect(&ImageCapture::new(vec![1_u8], 0, 1920))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "detection_failed");
    }
}
