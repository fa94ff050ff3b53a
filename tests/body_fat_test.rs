// ABOUTME: Integration tests for the US Navy body-fat calculator
// ABOUTME: Reference values, clamping, monotonicity, and domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use physique_core::errors::EstimationError;
use physique_core::models::{Measurements, Sex};
use physique_intelligence::calculate_body_fat_percentage;
use physique_intelligence::config::BodyFatConfig;

fn male(waist_cm: f64, neck_cm: f64, height_cm: f64) -> Measurements {
    Measurements {
        waist_cm,
        neck_cm,
        hip_cm: None,
        height_cm,
        weight_kg: 80.0,
        age_years: 35,
        sex: Sex::Male,
    }
}

fn female(waist_cm: f64, hip_cm: Option<f64>, neck_cm: f64, height_cm: f64) -> Measurements {
    Measurements {
        waist_cm,
        neck_cm,
        hip_cm,
        height_cm,
        weight_kg: 60.0,
        age_years: 28,
        sex: Sex::Female,
    }
}

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn test_male_reference_values() {
    common::init_test_logging();
    let config = BodyFatConfig::default();

    let lean = calculate_body_fat_percentage(&male(85.0, 38.0, 175.0), &config).unwrap();
    assert!((lean - 16.94).abs() < 0.05, "got {lean}");

    let heavier = calculate_body_fat_percentage(&male(100.0, 40.0, 180.0), &config).unwrap();
    assert!((heavier - 25.16).abs() < 0.05, "got {heavier}");
}

#[test]
fn test_female_reference_values() {
    let config = BodyFatConfig::default();

    let a = calculate_body_fat_percentage(&female(75.0, Some(100.0), 33.0, 165.0), &config)
        .unwrap();
    assert!((a - 29.43).abs() < 0.05, "got {a}");

    let b = calculate_body_fat_percentage(&female(70.0, Some(95.0), 32.0, 160.0), &config)
        .unwrap();
    assert!((b - 26.21).abs() < 0.05, "got {b}");
}

#[test]
fn test_identical_measurements_give_identical_results() {
    let config = BodyFatConfig::default();
    let m = male(92.3, 39.1, 181.0);
    let first = calculate_body_fat_percentage(&m, &config).unwrap();
    let second = calculate_body_fat_percentage(&m, &config).unwrap();
    assert!((first - second).abs() < f64::EPSILON);
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_male_results_stay_within_range() {
    let config = BodyFatConfig::default();
    for waist in [52.0, 60.0, 75.0, 90.0, 110.0, 140.0, 180.0] {
        for neck in [30.0, 38.0, 45.0] {
            if waist <= neck {
                continue;
            }
            let pct = calculate_body_fat_percentage(&male(waist, neck, 175.0), &config).unwrap();
            assert!((3.0..=50.0).contains(&pct), "waist={waist} neck={neck} -> {pct}");
        }
    }
}

#[test]
fn test_female_results_stay_within_range() {
    let config = BodyFatConfig::default();
    for waist in [55.0, 70.0, 90.0, 130.0] {
        for hip in [80.0, 100.0, 140.0] {
            let pct =
                calculate_body_fat_percentage(&female(waist, Some(hip), 32.0, 165.0), &config)
                    .unwrap();
            assert!((8.0..=50.0).contains(&pct), "waist={waist} hip={hip} -> {pct}");
        }
    }
}

#[test]
fn test_tiny_girth_clamps_to_male_floor() {
    let pct =
        calculate_body_fat_percentage(&male(60.0, 58.0, 175.0), &BodyFatConfig::default())
            .unwrap();
    assert!((pct - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_huge_girth_clamps_to_ceiling() {
    let pct =
        calculate_body_fat_percentage(&male(150.0, 35.0, 160.0), &BodyFatConfig::default())
            .unwrap();
    assert!((pct - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_larger_waist_never_lowers_estimate() {
    let config = BodyFatConfig::default();
    let mut previous = 0.0;
    for waist in (70..=120).step_by(5) {
        let pct =
            calculate_body_fat_percentage(&male(f64::from(waist), 38.0, 175.0), &config).unwrap();
        assert!(pct >= previous, "waist={waist}: {pct} < {previous}");
        previous = pct;
    }
}

// ============================================================================
// Domain errors
// ============================================================================

#[test]
fn test_female_without_hip_is_error() {
    let err = calculate_body_fat_percentage(
        &female(75.0, None, 33.0, 165.0),
        &BodyFatConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, EstimationError::MissingHipMeasurement);
}

#[test]
fn test_neck_not_smaller_than_waist_is_error() {
    let err = calculate_body_fat_percentage(&male(40.0, 40.0, 175.0), &BodyFatConfig::default())
        .unwrap_err();
    match err {
        EstimationError::InvalidMeasurement { field, .. } => {
            assert_eq!(field, "waist_minus_neck");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_positive_height_is_error() {
    let err = calculate_body_fat_percentage(&male(85.0, 38.0, 0.0), &BodyFatConfig::default())
        .unwrap_err();
    assert_eq!(err.kind(), "invalid_measurement");
}

#[test]
fn test_absurd_girth_collapses_denominator() {
    // log10(1e8) = 8 pushes the male denominator to about -0.15
    let err = calculate_body_fat_percentage(&male(1.0e8, 38.0, 175.0), &BodyFatConfig::default())
        .unwrap_err();
    match err {
        EstimationError::InvalidMeasurement { field, value } => {
            assert_eq!(field, "navy_denominator");
            assert!(value < 0.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}
