// ABOUTME: Normalized 2D body keypoints detected in one photograph
// ABOUTME: LandmarkSet invariants (unit-square coordinates, hip point optional only for males)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Sex;
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// A named keypoint in normalized image coordinates (0..1, origin top-left)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Landmark {
    /// Horizontal position, 0 = left edge
    pub x: f64,
    /// Vertical position, 0 = top edge
    pub y: f64,
}

impl Landmark {
    /// Create a landmark
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pixel-space position for an image of the given size
    #[must_use]
    pub fn to_pixels(&self, dimensions: ImageDimensions) -> (f64, f64) {
        (
            self.x * f64::from(dimensions.width),
            self.y * f64::from(dimensions.height),
        )
    }

    fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Pixel dimensions of a captured image
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageDimensions {
    /// Create image dimensions
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Body keypoints detected in one photograph (front or side)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LandmarkSet {
    /// Left shoulder
    pub left_shoulder: Landmark,
    /// Right shoulder
    pub right_shoulder: Landmark,
    /// Left hip joint
    pub left_hip: Landmark,
    /// Right hip joint
    pub right_hip: Landmark,
    /// Left knee
    pub left_knee: Landmark,
    /// Right knee
    pub right_knee: Landmark,
    /// Left ankle
    pub left_ankle: Landmark,
    /// Right ankle
    pub right_ankle: Landmark,
    /// Narrowest point of the torso
    pub waist: Landmark,
    /// Base of the neck
    pub neck: Landmark,
    /// Widest point of the hips; may be absent only for male subjects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_point: Option<Landmark>,
}

impl LandmarkSet {
    /// Every landmark paired with its field name
    #[must_use]
    pub fn named_points(&self) -> Vec<(&'static str, Landmark)> {
        let mut points = vec![
            ("left_shoulder", self.left_shoulder),
            ("right_shoulder", self.right_shoulder),
            ("left_hip", self.left_hip),
            ("right_hip", self.right_hip),
            ("left_knee", self.left_knee),
            ("right_knee", self.right_knee),
            ("left_ankle", self.left_ankle),
            ("right_ankle", self.right_ankle),
            ("waist", self.waist),
            ("neck", self.neck),
        ];
        if let Some(hip_point) = self.hip_point {
            points.push(("hip_point", hip_point));
        }
        points
    }

    /// Check the landmark-set invariants for a subject of the given sex
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first coordinate outside `[0, 1]`,
    /// or `hip_point` when it is missing for a female subject
    pub fn validate(&self, sex: Sex) -> Result<(), ValidationError> {
        if let Some((name, point)) = self
            .named_points()
            .into_iter()
            .find(|(_, point)| !point.is_normalized())
        {
            return Err(ValidationError::out_of_range(
                name,
                format!(
                    "normalized coordinates must lie in [0, 1], got ({}, {})",
                    point.x, point.y
                ),
            ));
        }
        if sex == Sex::Female && self.hip_point.is_none() {
            return Err(ValidationError::missing("hip_point"));
        }
        Ok(())
    }
}
