// ABOUTME: Main library entry point for the Physique body-composition engine
// ABOUTME: Landmark providers, scan pipeline, stores, services, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Physique Engine
//!
//! Estimates body-fat percentage from a front and a side photograph plus the
//! user's height and sex, then generates goal-oriented workout and nutrition
//! plans.
//!
//! ## Architecture
//!
//! - **Landmarks**: pose landmark provider contract and the fixed stand-in detector
//! - **Pipeline**: detection, circumference estimation, US Navy formula, clamping
//!   and the degraded-mode fallback
//! - **Stores**: profile and scan persistence contracts with in-memory backends
//! - **Services**: scan, history, composition, and plan operations per user
//! - **Config**: process environment plus the algorithm tunables from
//!   `physique-intelligence`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use physique_engine::landmarks::{FixedLandmarkProvider, ImageCapture};
//! use physique_engine::pipeline::ScanPipeline;
//! use physique_engine::config::EstimationConfig;
//! use physique_core::models::ProfileInput;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = ProfileInput {
//!     height_cm: 175.0,
//!     weight_kg: 80.0,
//!     age_years: 35,
//!     sex: "male".to_owned(),
//!     goal: "lose_fat".to_owned(),
//!     activity_level: None,
//!     body_fat_percentage: None,
//! }
//! .validate()?;
//!
//! let pipeline = ScanPipeline::new(
//!     Arc::new(FixedLandmarkProvider::new()),
//!     &EstimationConfig::default(),
//! );
//! let front = ImageCapture::new(std::fs::read("front.jpg")?, 1080, 1920);
//! let side = ImageCapture::new(std::fs::read("side.jpg")?, 1080, 1920);
//! let result = pipeline.run(&front, &side, &profile).await;
//! println!("Body fat: {:.1}%", result.body_fat_percentage);
//! # Ok(())
//! # }
//! ```

/// Configuration management
pub mod config;

/// Pose landmark providers
pub mod landmarks;

/// Structured logging setup
pub mod logging;

/// Scan orchestration with fallback
pub mod pipeline;

/// Domain services
pub mod services;

/// Profile and scan stores
pub mod stores;

pub use physique_core::errors;
pub use physique_core::models;
