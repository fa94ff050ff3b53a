// ABOUTME: Single-photo geometric proxy converting pose landmarks into body circumferences
// ABOUTME: Pixel-to-cm scale from shoulder-to-ankle span, circular cross-section assumption
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Circumference Estimator
//!
//! Widths measured between landmark pairs are converted to centimeters using
//! the subject's known height, then treated as the diameter of a circular
//! cross-section:
//!
//! ```text
//! scale         = height_cm / (|ankle.y - shoulder.y| * image_height)
//! circumference = width_px * scale * PI
//! ```
//!
//! - Waist width: horizontal hip-to-hip distance
//! - Neck width: a fixed fraction of shoulder-to-shoulder width
//! - Hip width: the same hip-to-hip distance, produced only when a hip point was detected
//!
//! This is a rough proxy, not a calibrated anthropometric technique. Anything
//! satisfying the same `(LandmarkSet, height, dimensions) -> Circumferences`
//! contract can replace it.

use crate::config::CircumferenceConfig;
use physique_core::errors::EstimationError;
use physique_core::models::{Circumferences, ImageDimensions, LandmarkSet};
use std::f64::consts::PI;
use tracing::debug;

/// Estimates circumferences from a front-photo landmark set
#[derive(Debug, Clone, Default)]
pub struct CircumferenceEstimator {
    config: CircumferenceConfig,
}

impl CircumferenceEstimator {
    /// Create an estimator with explicit geometry settings
    #[must_use]
    pub const fn new(config: CircumferenceConfig) -> Self {
        Self { config }
    }

    /// Geometry settings in use
    #[must_use]
    pub const fn config(&self) -> &CircumferenceConfig {
        &self.config
    }

    /// Estimate waist, neck, and (when a hip point exists) hip circumference
    ///
    /// The side-photo set is accepted for future depth refinement and is not
    /// used by the current geometry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeasurement` when the height is not positive or the
    /// shoulder-to-ankle span is zero, which would make the scale undefined
    pub fn estimate(
        &self,
        front: &LandmarkSet,
        side: Option<&LandmarkSet>,
        height_cm: f64,
        dimensions: ImageDimensions,
    ) -> Result<Circumferences, EstimationError> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(EstimationError::InvalidMeasurement {
                field: "height_cm",
                value: height_cm,
            });
        }

        let (_, shoulder_py) = front.left_shoulder.to_pixels(dimensions);
        let (_, ankle_py) = front.left_ankle.to_pixels(dimensions);
        let vertical_span_px = (ankle_py - shoulder_py).abs();
        if !vertical_span_px.is_finite() || vertical_span_px <= 0.0 {
            return Err(EstimationError::InvalidMeasurement {
                field: "vertical_pixel_span",
                value: vertical_span_px,
            });
        }

        let scale = height_cm / vertical_span_px;

        let (left_hip_px, _) = front.left_hip.to_pixels(dimensions);
        let (right_hip_px, _) = front.right_hip.to_pixels(dimensions);
        let hip_width_px = (right_hip_px - left_hip_px).abs();

        let (left_shoulder_px, _) = front.left_shoulder.to_pixels(dimensions);
        let (right_shoulder_px, _) = front.right_shoulder.to_pixels(dimensions);
        let shoulder_width_px = (right_shoulder_px - left_shoulder_px).abs();
        let neck_width_px = self.config.neck_to_shoulder_ratio * shoulder_width_px;

        let raw_waist_cm = hip_width_px * scale * PI;
        let raw_neck_cm = neck_width_px * scale * PI;

        let circumferences = Circumferences {
            waist_cm: raw_waist_cm.max(self.config.min_waist_cm),
            neck_cm: raw_neck_cm.max(self.config.min_neck_cm),
            hip_cm: front.hip_point.map(|_| hip_width_px * scale * PI),
        };

        debug!(
            scale_cm_per_px = scale,
            raw_waist_cm,
            raw_neck_cm,
            waist_cm = circumferences.waist_cm,
            neck_cm = circumferences.neck_cm,
            hip_cm = ?circumferences.hip_cm,
            side_photo = side.is_some(),
            "Estimated circumferences from landmarks"
        );

        Ok(circumferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physique_core::models::Landmark;

    const DIMS: ImageDimensions = ImageDimensions::new(1080, 1920);

    fn landmarks(hip_half_width: f64, shoulder_half_width: f64) -> LandmarkSet {
        LandmarkSet {
            left_shoulder: Landmark::new(0.5 - shoulder_half_width, 0.25),
            right_shoulder: Landmark::new(0.5 + shoulder_half_width, 0.25),
            left_hip: Landmark::new(0.5 - hip_half_width, 0.5),
            right_hip: Landmark::new(0.5 + hip_half_width, 0.5),
            left_knee: Landmark::new(0.42, 0.7),
            right_knee: Landmark::new(0.58, 0.7),
            left_ankle: Landmark::new(0.42, 0.9),
            right_ankle: Landmark::new(0.58, 0.9),
            waist: Landmark::new(0.5, 0.45),
            neck: Landmark::new(0.5, 0.2),
            hip_point: Some(Landmark::new(0.5, 0.55)),
        }
    }

    #[test]
    fn test_reference_geometry() {
        let estimator = CircumferenceEstimator::default();
        let result = estimator
            .estimate(&landmarks(0.1, 0.15), None, 175.0, DIMS)
            .unwrap();

        // scale = 175 / (0.65 * 1920); waist = 216 px, neck = 0.3 * 324 px
        let scale = 175.0 / 1248.0;
        assert!((result.waist_cm - 216.0 * scale * PI).abs() < 1e-9);
        assert!((result.neck_cm - 0.3 * 324.0 * scale * PI).abs() < 1e-9);
        assert!((result.waist_cm - 95.15).abs() < 0.01);
        assert!((result.neck_cm - 42.82).abs() < 0.01);
        assert_eq!(result.hip_cm, Some(result.waist_cm));
    }

    #[test]
    fn test_clamps_to_floors() {
        let estimator = CircumferenceEstimator::default();
        let result = estimator
            .estimate(&landmarks(0.01, 0.02), None, 175.0, DIMS)
            .unwrap();

        assert!((result.waist_cm - 50.0).abs() < f64::EPSILON);
        assert!((result.neck_cm - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hip_absent_without_hip_point() {
        let mut set = landmarks(0.1, 0.15);
        set.hip_point = None;
        let result = CircumferenceEstimator::default()
            .estimate(&set, None, 175.0, DIMS)
            .unwrap();
        assert!(result.hip_cm.is_none());
    }

    #[test]
    fn test_side_photo_does_not_change_result() {
        let estimator = CircumferenceEstimator::default();
        let front = landmarks(0.1, 0.15);
        let side = landmarks(0.05, 0.05);
        assert_eq!(
            estimator.estimate(&front, None, 180.0, DIMS).unwrap(),
            estimator.estimate(&front, Some(&side), 180.0, DIMS).unwrap()
        );
    }

    #[test]
    fn test_zero_vertical_span_rejected() {
        let mut set = landmarks(0.1, 0.15);
        set.left_ankle = Landmark::new(0.42, 0.25);
        let err = CircumferenceEstimator::default()
            .estimate(&set, None, 175.0, DIMS)
            .unwrap_err();
        assert!(matches!(
            err,
            EstimationError::InvalidMeasurement {
                field: "vertical_pixel_span",
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_height_rejected() {
        let err = CircumferenceEstimator::default()
            .estimate(&landmarks(0.1, 0.15), None, 0.0, DIMS)
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_measurement");
    }
}
