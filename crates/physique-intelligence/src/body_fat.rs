// ABOUTME: US Navy circumference method for body-fat percentage estimation
// ABOUTME: Sex-specific log-linear regression with domain checks and physiological clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body-Fat Calculator
//!
//! # Formulas
//!
//! ```text
//! male:   BF% = 495 / (1.0324  - 0.19077 * log10(waist - neck)       + 0.15456 * log10(height)) - 450
//! female: BF% = 495 / (1.29579 - 0.35004 * log10(waist + hip - neck) + 0.22100 * log10(height)) - 450
//! ```
//!
//! Results are clamped to [3, 50] for males and [8, 50] for females.
//!
//! # Reference
//!
//! Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for U.S. Navy
//! men and women from body circumferences and height. NHRC Report No. 84-11.

use crate::config::BodyFatConfig;
use physique_core::constants::navy;
use physique_core::errors::EstimationError;
use physique_core::models::{Measurements, Sex};

/// Calculate body-fat percentage from circumferences and height
///
/// Pure function: identical measurements always produce an identical result.
///
/// # Errors
///
/// - `MissingHipMeasurement` for a female subject without `hip_cm`
/// - `InvalidMeasurement` when the logarithm argument or height is not positive
/// - `InvalidMeasurement` naming `navy_denominator` when the girth is so large
///   (male waist minus neck above roughly 10^7 cm) that the regression
///   denominator reaches zero or below
pub fn calculate_body_fat_percentage(
    measurements: &Measurements,
    config: &BodyFatConfig,
) -> Result<f64, EstimationError> {
    require_positive("height_cm", measurements.height_cm)?;
    let log_height = measurements.height_cm.log10();

    let (denominator, min_pct, max_pct) = match measurements.sex {
        Sex::Male => {
            let girth = measurements.waist_cm - measurements.neck_cm;
            require_positive("waist_minus_neck", girth)?;
            (
                navy::MALE_INTERCEPT - navy::MALE_GIRTH_COEF * girth.log10()
                    + navy::MALE_HEIGHT_COEF * log_height,
                config.male_min_pct,
                config.male_max_pct,
            )
        }
        Sex::Female => {
            let hip_cm = measurements
                .hip_cm
                .ok_or(EstimationError::MissingHipMeasurement)?;
            let girth = measurements.waist_cm + hip_cm - measurements.neck_cm;
            require_positive("waist_plus_hip_minus_neck", girth)?;
            (
                navy::FEMALE_INTERCEPT - navy::FEMALE_GIRTH_COEF * girth.log10()
                    + navy::FEMALE_HEIGHT_COEF * log_height,
                config.female_min_pct,
                config.female_max_pct,
            )
        }
    };

    require_positive("navy_denominator", denominator)?;

    let body_fat = navy::NUMERATOR / denominator - navy::OFFSET;
    Ok(body_fat.max(min_pct).min(max_pct))
}

fn require_positive(field: &'static str, value: f64) -> Result<(), EstimationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimationError::InvalidMeasurement { field, value })
    }
}
