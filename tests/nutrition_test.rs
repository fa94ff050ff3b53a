// ABOUTME: Integration tests for BMR, TDEE, macro targets, and nutrition plans
// ABOUTME: Reference profiles, calorie floor, and plan request validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use physique_core::errors::PlanError;
use physique_core::models::{ActivityLevel, Goal, Sex};
use physique_intelligence::config::NutritionConfig;
use physique_intelligence::{
    calculate_bmr, calculate_tdee, generate_nutrition_plan, generate_nutrition_plan_from_request,
    NutritionTargets,
};

// ============================================================================
// Energy expenditure
// ============================================================================

#[test]
fn test_mifflin_st_jeor_by_sex() {
    let config = NutritionConfig::default();
    let male = calculate_bmr(80.0, 175.0, 35, Sex::Male, &config.bmr);
    let female = calculate_bmr(80.0, 175.0, 35, Sex::Female, &config.bmr);

    assert!((male - 1723.75).abs() < 1e-9);
    assert!((male - female - 166.0).abs() < 1e-9);
}

#[test]
fn test_tdee_increases_with_activity() {
    let config = NutritionConfig::default();
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
    let tdees: Vec<f64> = levels
        .iter()
        .map(|level| calculate_tdee(1500.0, *level, &config.activity_factors))
        .collect();
    assert!(tdees.windows(2).all(|pair| pair[0] < pair[1]));
    assert!((tdees[0] - 1800.0).abs() < 1e-9);
}

// ============================================================================
// Targets and plans
// ============================================================================

#[test]
fn test_female_fat_loss_reference_plan() {
    common::init_test_logging();
    let plan = generate_nutrition_plan(
        &common::female_profile(Goal::LoseFat),
        &NutritionConfig::default(),
    );

    assert_eq!(plan.title, "Fat Loss Nutrition Plan");
    assert_eq!(plan.bmr, 1330);
    assert_eq!(plan.tdee, 1829);
    assert_eq!(plan.daily_calories, 1329);
    assert_eq!(plan.macros.protein_g, 132);
    assert_eq!(plan.macros.carbs_g, 116);
    assert_eq!(plan.macros.fat_g, 37);
    assert!(!plan.meal_plan.breakfast.is_empty());
    assert!(!plan.guidelines.is_empty());
}

#[test]
fn test_goal_ordering_of_calories() {
    let config = NutritionConfig::default();
    let calories = |goal| {
        NutritionTargets::for_profile(&common::male_profile(goal), &config).rounded_calories()
    };
    let lose = calories(Goal::LoseFat);
    let maintain = calories(Goal::Maintain);
    let gain = calories(Goal::GainMuscle);

    assert_eq!(maintain - lose, 500);
    assert_eq!(gain - maintain, 300);
}

#[test]
fn test_deficit_applies_unfloored_to_small_profiles() {
    let config = NutritionConfig::default();
    let mut profile = common::female_profile(Goal::LoseFat);
    profile.weight_kg = 35.0;
    profile.height_cm = 140.0;
    profile.age_years = 80;
    profile.activity_level = ActivityLevel::Sedentary;

    // BMR 350 + 875 - 400 - 161 = 664; TDEE 796.8; 796.8 - 500 = 296.8
    let plan = generate_nutrition_plan(&profile, &config);
    assert_eq!(plan.tdee, 797);
    assert_eq!(plan.daily_calories, 297);
    assert_eq!(plan.macros.carbs_g, 26);
    assert_eq!(plan.macros.fat_g, 8);
}

#[test]
fn test_plans_are_deterministic() {
    let config = NutritionConfig::default();
    let profile = common::male_profile(Goal::GainMuscle);
    assert_eq!(
        generate_nutrition_plan(&profile, &config),
        generate_nutrition_plan(&profile, &config)
    );
}

// ============================================================================
// Request boundary
// ============================================================================

#[test]
fn test_request_with_valid_goal_matches_typed_path() {
    let config = NutritionConfig::default();
    let from_request =
        generate_nutrition_plan_from_request(&common::male_input("maintain"), &config).unwrap();
    let typed = generate_nutrition_plan(&common::male_profile(Goal::Maintain), &config);
    assert_eq!(from_request, typed);
}

#[test]
fn test_invalid_goal_is_rejected_with_value() {
    let err = generate_nutrition_plan_from_request(
        &common::male_input("invalid"),
        &NutritionConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlanError::InvalidGoal("invalid".to_owned()));
}

#[test]
fn test_invalid_activity_level_is_rejected() {
    let mut input = common::male_input("maintain");
    input.activity_level = Some("couch".to_owned());
    let err = generate_nutrition_plan_from_request(&input, &NutritionConfig::default())
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidActivityLevel(_)));
}
