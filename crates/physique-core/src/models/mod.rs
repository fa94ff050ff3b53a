// ABOUTME: Core data models for the Physique engine
// ABOUTME: Re-exports profile, landmark, measurement, scan, and plan value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are value objects: created fresh per request, never mutated in
//! place, and freely cloned across task boundaries.
//!
//! - `Profile` / `ProfileInput`: validated and untrusted user anthropometrics
//! - `LandmarkSet`: normalized keypoints for one photograph
//! - `Circumferences` / `Measurements`: estimator output and calculator input
//! - `ScanResult` / `StoredScan`: body-fat estimates and their persisted form
//! - `WorkoutPlan` / `NutritionPlan`: plan generator output

mod landmarks;
mod measurements;
mod plan;
mod profile;
mod scan;

pub use landmarks::{ImageDimensions, Landmark, LandmarkSet};
pub use measurements::{Circumferences, Measurements};
pub use plan::{
    DayOfWeek, Exercise, ExerciseVolume, MacroTargets, MealPlan, NutritionPlan, Workout,
    WorkoutPlan, WorkoutType,
};
pub use profile::{ActivityLevel, Goal, Profile, ProfileInput, Sex};
pub use scan::{EstimateSource, ScanResult, StoredScan};
