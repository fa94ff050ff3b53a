// ABOUTME: Estimation configuration for circumference geometry and the scan pipeline
// ABOUTME: Clamp floors, neck proxy ratio, output bounds, fallback range, confidence, and noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Estimation configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Landmark geometry settings
    pub circumference: CircumferenceConfig,
    /// Body-fat formula clamp ranges
    pub body_fat: BodyFatConfig,
    /// Orchestration settings (output clamp, fallback, noise)
    pub pipeline: PipelineConfig,
}

impl EstimationConfig {
    /// Validate geometry, clamp ranges, and pipeline settings
    ///
    /// NaN bounds never compare as ordered, so they are rejected too.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let circumference = &self.circumference;
        if !(0.0..=1.0).contains(&circumference.neck_to_shoulder_ratio)
            || circumference.neck_to_shoulder_ratio == 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Neck to shoulder ratio must be in (0, 1]",
            ));
        }
        if !is_ascending(0.0, circumference.min_waist_cm)
            || !is_ascending(0.0, circumference.min_neck_cm)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Circumference floors must be positive",
            ));
        }

        let body_fat = &self.body_fat;
        if !is_ascending(body_fat.male_min_pct, body_fat.male_max_pct)
            || !is_ascending(body_fat.female_min_pct, body_fat.female_max_pct)
        {
            return Err(ConfigError::InvalidRange(
                "Body-fat clamp minimum must be < maximum",
            ));
        }

        let pipeline = &self.pipeline;
        if !is_ascending(pipeline.output_min_pct, pipeline.output_max_pct) {
            return Err(ConfigError::InvalidRange(
                "Pipeline output minimum must be < maximum",
            ));
        }
        if !is_ascending(pipeline.fallback_min_pct, pipeline.fallback_max_pct)
            || !(pipeline.fallback_max_pct - pipeline.fallback_min_pct).is_finite()
        {
            return Err(ConfigError::InvalidRange(
                "Fallback range must be finite with minimum < maximum",
            ));
        }
        if !(0.0..=1.0).contains(&pipeline.estimate_confidence)
            || !(0.0..=1.0).contains(&pipeline.fallback_confidence)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Confidence values must be in [0, 1]",
            ));
        }
        if !(2.0 * pipeline.noise.amplitude_pct).is_finite() || pipeline.noise.amplitude_pct < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Noise amplitude must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

fn is_ascending(min: f64, max: f64) -> bool {
    matches!(min.partial_cmp(&max), Some(Ordering::Less))
}

/// Single-photo geometric proxy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircumferenceConfig {
    /// Neck width as a fraction of shoulder-to-shoulder width (0.30)
    pub neck_to_shoulder_ratio: f64,
    /// Physiological floor for waist circumference (50 cm)
    pub min_waist_cm: f64,
    /// Physiological floor for neck circumference (25 cm)
    pub min_neck_cm: f64,
}

impl Default for CircumferenceConfig {
    fn default() -> Self {
        Self {
            neck_to_shoulder_ratio: 0.30,
            min_waist_cm: 50.0,
            min_neck_cm: 25.0,
        }
    }
}

/// Clamp ranges applied to the Navy formula output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatConfig {
    /// Male lower bound (3%)
    pub male_min_pct: f64,
    /// Male upper bound (50%)
    pub male_max_pct: f64,
    /// Female lower bound (8%)
    pub female_min_pct: f64,
    /// Female upper bound (50%)
    pub female_max_pct: f64,
}

impl Default for BodyFatConfig {
    fn default() -> Self {
        Self {
            male_min_pct: 3.0,
            male_max_pct: 50.0,
            female_min_pct: 8.0,
            female_max_pct: 50.0,
        }
    }
}

/// Scan orchestration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Lower bound of the final reported value (5%)
    pub output_min_pct: f64,
    /// Upper bound of the final reported value (45%)
    pub output_max_pct: f64,
    /// Lower bound of the degraded-mode fallback draw (15%)
    pub fallback_min_pct: f64,
    /// Upper bound of the degraded-mode fallback draw (25%)
    pub fallback_max_pct: f64,
    /// Confidence reported for landmark-derived estimates
    pub estimate_confidence: f64,
    /// Confidence reported for fallback estimates
    pub fallback_confidence: f64,
    /// Simulated sensor noise
    pub noise: NoiseConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_min_pct: 5.0,
            output_max_pct: 45.0,
            fallback_min_pct: 15.0,
            fallback_max_pct: 25.0,
            estimate_confidence: 0.85,
            fallback_confidence: 0.3,
            noise: NoiseConfig::default(),
        }
    }
}

/// Simulated sensor noise added to landmark-derived estimates
///
/// Placeholder behavior for demos until a calibrated estimator is plugged in.
/// Enabling it without a seed makes scan output non-deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Whether jitter is applied (disabled by default)
    pub enabled: bool,
    /// Half-width of the uniform jitter, in percentage points (1.0)
    pub amplitude_pct: f64,
    /// Seed for the pipeline RNG; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            amplitude_pct: 1.0,
            seed: None,
        }
    }
}
