// ABOUTME: Configuration management module for process settings
// ABOUTME: Environment configuration plus re-exports of the intelligence tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Physique engine
//!
//! - **Environment**: Process configuration from environment variables
//! - **Intelligence**: Formula constants, clamps, and noise settings
//!   (defined in `physique-intelligence`)

/// Environment and process configuration
pub mod environment;

pub use environment::{Environment, LandmarkBackend, LogLevel, ServerConfig};
pub use physique_intelligence::config::{
    ConfigError, EstimationConfig, IntelligenceConfig, NoiseConfig, NutritionConfig,
    PipelineConfig, WorkoutCustomizationConfig,
};
