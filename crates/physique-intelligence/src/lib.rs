// ABOUTME: Body-composition estimation algorithms and plan-generation rules engine
// ABOUTME: Circumference geometry, Navy body-fat formula, nutrition math, and workout templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Physique Intelligence
//!
//! Pure, synchronous computations over `physique-core` value objects. Nothing
//! in this crate performs I/O or holds shared mutable state; identical inputs
//! always produce identical outputs.
//!
//! ## Modules
//!
//! - **circumference**: Landmark geometry to waist/neck/hip circumferences
//! - **`body_fat`**: US Navy body-fat regression with sex-specific clamps
//! - **`nutrition_calculator`**: BMR, TDEE, calorie and macro targets
//! - **`nutrition_plan`**: Nutrition plan assembly with static meal and guideline tables
//! - **`workout_templates`**: Static per-goal workout templates
//! - **`workout_plan`**: Template selection and age/body-fat customization
//! - **composition**: Fat mass, lean mass, BMI, and body-fat category
//! - **trends**: Body-fat history trend over stored scans
//! - **config**: Tunable constants with environment overrides

/// Single-photo circumference estimation from pose landmarks
pub mod circumference;

/// US Navy body-fat percentage formula
pub mod body_fat;

/// Mifflin-St Jeor BMR, TDEE, and goal-specific macro targets
pub mod nutrition_calculator;

/// Nutrition plan generation
pub mod nutrition_plan;

/// Static workout template tables keyed by goal
pub mod workout_templates;

/// Workout plan generation and customization
pub mod workout_plan;

/// Body composition summary derived from a scan
pub mod composition;

/// Body-fat history trend analysis
pub mod trends;

/// Intelligence configuration with environment overrides
pub mod config;

pub use body_fat::calculate_body_fat_percentage;
pub use circumference::CircumferenceEstimator;
pub use composition::{BodyFatCategory, CompositionSummary};
pub use config::IntelligenceConfig;
pub use nutrition_calculator::{calculate_bmr, calculate_tdee, NutritionTargets};
pub use nutrition_plan::{generate_nutrition_plan, generate_nutrition_plan_from_request};
pub use trends::{BodyFatTrend, TrendDirection};
pub use workout_plan::{generate_workout_plan, generate_workout_plan_from_request};
