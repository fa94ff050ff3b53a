// ABOUTME: Pose landmark provider contract: one image capture in, one LandmarkSet out
// ABOUTME: Backends are injected as trait objects so a real detector can replace the stand-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pluggable Landmark Detection
//!
//! Everything downstream of detection (circumference estimation, body-fat
//! calculation, the scan pipeline) depends only on [`PoseLandmarkProvider`].
//! A model-backed detector is added by implementing the trait and extending
//! [`create_provider`]; no other module changes.
//!
//! ## Failure contract
//!
//! When required landmarks cannot be located (e.g. the person is not fully in
//! frame) a provider returns `EstimationError::DetectionFailed`. The scan
//! pipeline recovers from it with its fallback estimate.

/// Deterministic stand-in detector
pub mod fixed;

pub use fixed::FixedLandmarkProvider;

use crate::config::LandmarkBackend;
use async_trait::async_trait;
use bytes::Bytes;
use physique_core::errors::EstimationError;
use physique_core::models::{ImageDimensions, LandmarkSet};
use std::sync::Arc;

/// One photograph as supplied by the capture collaborator
///
/// The payload encoding is opaque to the engine; only the landmark provider
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCapture {
    /// Encoded image bytes
    pub payload: Bytes,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

impl ImageCapture {
    /// Wrap an encoded payload with its pixel dimensions
    #[must_use]
    pub fn new(payload: impl Into<Bytes>, width: u32, height: u32) -> Self {
        Self {
            payload: payload.into(),
            width,
            height,
        }
    }

    /// Pixel dimensions of the capture
    #[must_use]
    pub const fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    /// Whether the capture has no payload or a zero-sized side
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty() || self.dimensions().is_empty()
    }
}

/// Capability: produce a `LandmarkSet` from one image
#[async_trait]
pub trait PoseLandmarkProvider: Send + Sync {
    /// Backend name used in logs
    fn name(&self) -> &'static str;

    /// Detect body landmarks in a capture
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::DetectionFailed` when the required landmarks
    /// cannot be located
    async fn detect(&self, capture: &ImageCapture) -> Result<LandmarkSet, EstimationError>;
}

/// Construct the configured landmark backend
#[must_use]
pub fn create_provider(backend: LandmarkBackend) -> Arc<dyn PoseLandmarkProvider> {
    match backend {
        LandmarkBackend::Fixed => Arc::new(FixedLandmarkProvider::new()),
    }
}
