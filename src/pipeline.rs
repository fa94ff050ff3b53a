// ABOUTME: Scan orchestration from two photos to a body-fat result with graceful degradation
// ABOUTME: Detect, estimate circumferences, apply the Navy formula, optional noise, clamp, fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scan Pipeline
//!
//! ```text
//! front/side captures -> PoseLandmarkProvider -> CircumferenceEstimator
//!                     -> body-fat formula -> [noise] -> clamp [5, 45] -> ScanResult
//! ```
//!
//! [`ScanPipeline::run`] never fails. Any estimation-stage error
//! (`DetectionFailed`, `InvalidLandmarks`, `MissingHipMeasurement`,
//! `InvalidMeasurement`) is logged and replaced by a plausible value drawn
//! uniformly from the fallback range, reported with reduced confidence so the
//! user flow still reaches a result.
//!
//! Simulated sensor noise is off by default. With noise enabled and no seed,
//! repeated scans of identical input produce different values.

use crate::landmarks::{ImageCapture, PoseLandmarkProvider};
use chrono::Utc;
use physique_core::errors::EstimationError;
use physique_core::models::{EstimateSource, Measurements, Profile, ScanResult};
use physique_intelligence::body_fat::calculate_body_fat_percentage;
use physique_intelligence::circumference::CircumferenceEstimator;
use physique_intelligence::config::{
    BodyFatConfig, EstimationConfig, IntelligenceConfig, PipelineConfig,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Two-photo body-fat estimation with fallback
pub struct ScanPipeline {
    provider: Arc<dyn PoseLandmarkProvider>,
    estimator: CircumferenceEstimator,
    body_fat: BodyFatConfig,
    config: PipelineConfig,
    rng: Mutex<ChaCha8Rng>,
}

impl ScanPipeline {
    /// Create a pipeline with explicit estimation settings
    #[must_use]
    pub fn new(provider: Arc<dyn PoseLandmarkProvider>, estimation: &EstimationConfig) -> Self {
        let rng = estimation
            .pipeline
            .noise
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);

        Self {
            provider,
            estimator: CircumferenceEstimator::new(estimation.circumference.clone()),
            body_fat: estimation.body_fat.clone(),
            config: estimation.pipeline.clone(),
            rng: Mutex::new(rng),
        }
    }

    /// Create a pipeline using the global intelligence configuration
    #[must_use]
    pub fn with_global_config(provider: Arc<dyn PoseLandmarkProvider>) -> Self {
        Self::new(provider, &IntelligenceConfig::global().estimation)
    }

    /// Name of the landmark backend in use
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Run a scan, substituting the fallback estimate on any estimation failure
    pub async fn run(
        &self,
        front: &ImageCapture,
        side: &ImageCapture,
        profile: &Profile,
    ) -> ScanResult {
        match self.estimate(front, side, profile).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    error.kind = e.kind(),
                    error = %e,
                    provider = self.provider_name(),
                    "Body-fat estimation failed, using fallback estimate"
                );
                self.fallback().await
            }
        }
    }

    /// Run a scan without the degraded-mode fallback
    ///
    /// # Errors
    ///
    /// Returns the first estimation-stage error: detection failure, invalid
    /// landmarks for the profile's sex, or a calculator domain error
    pub async fn estimate(
        &self,
        front: &ImageCapture,
        side: &ImageCapture,
        profile: &Profile,
    ) -> Result<ScanResult, EstimationError> {
        let front_landmarks = self.provider.detect(front).await?;
        let side_landmarks = self.provider.detect(side).await?;
        front_landmarks.validate(profile.sex)?;

        let circumferences = self.estimator.estimate(
            &front_landmarks,
            Some(&side_landmarks),
            profile.height_cm,
            front.dimensions(),
        )?;
        let measurements = Measurements::from_parts(circumferences, profile);
        let raw_pct = calculate_body_fat_percentage(&measurements, &self.body_fat)?;

        let jittered_pct = self.apply_noise(raw_pct).await;
        let body_fat_percentage = self.clamp_output(jittered_pct);

        info!(
            sex = %profile.sex,
            raw_pct,
            body_fat_percentage,
            waist_cm = measurements.waist_cm,
            neck_cm = measurements.neck_cm,
            "Body-fat scan completed"
        );

        Ok(ScanResult {
            body_fat_percentage,
            measurements: Some(measurements),
            confidence: self.config.estimate_confidence,
            timestamp: Utc::now(),
            source: EstimateSource::Estimated,
        })
    }

    async fn apply_noise(&self, value: f64) -> f64 {
        let noise = &self.config.noise;
        // rand rejects ranges whose span is not finite
        let span = 2.0 * noise.amplitude_pct;
        if !noise.enabled || !span.is_finite() || span <= 0.0 {
            return value;
        }
        let jitter = self
            .rng
            .lock()
            .await
            .gen_range(-noise.amplitude_pct..=noise.amplitude_pct);
        debug!(jitter, "Applied simulated sensor noise");
        value + jitter
    }

    async fn fallback(&self) -> ScanResult {
        let (low, high) = (self.config.fallback_min_pct, self.config.fallback_max_pct);
        let drawn = if (high - low).is_finite() && low < high {
            self.rng.lock().await.gen_range(low..=high)
        } else {
            low
        };

        ScanResult {
            body_fat_percentage: self.clamp_output(drawn),
            measurements: None,
            confidence: self.config.fallback_confidence,
            timestamp: Utc::now(),
            source: EstimateSource::Fallback,
        }
    }

    /// `f64::clamp` panics on unordered bounds; this saturates instead
    fn clamp_output(&self, value: f64) -> f64 {
        value
            .max(self.config.output_min_pct)
            .min(self.config.output_max_pct)
    }
}
