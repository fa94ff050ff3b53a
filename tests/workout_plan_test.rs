// ABOUTME: Integration tests for goal-based workout plan generation
// ABOUTME: Template selection, older-adult and beginner customizations, and request validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use physique_core::errors::PlanError;
use physique_core::models::{DayOfWeek, Goal};
use physique_intelligence::config::WorkoutCustomizationConfig;
use physique_intelligence::workout_templates::template_for;
use physique_intelligence::{generate_workout_plan, generate_workout_plan_from_request};

// ============================================================================
// Template selection
// ============================================================================

#[test]
fn test_each_goal_gets_its_template() {
    common::init_test_logging();
    let config = WorkoutCustomizationConfig::default();

    let fat_loss = generate_workout_plan(&common::male_profile(Goal::LoseFat), &config);
    assert_eq!(fat_loss.title, "Fat Loss Program");
    assert_eq!(fat_loss.duration_weeks, 8);

    let muscle = generate_workout_plan(&common::male_profile(Goal::GainMuscle), &config);
    assert_eq!(muscle.title, "Muscle Gain Program");
    assert_eq!(muscle.duration_weeks, 12);

    let maintain = generate_workout_plan(&common::male_profile(Goal::Maintain), &config);
    assert_eq!(maintain.title, "Maintenance Program");
    assert_eq!(maintain.duration_weeks, 6);
    assert!(maintain.rest_days.contains(&DayOfWeek::Sunday));
}

#[test]
fn test_unmodified_profile_returns_template_verbatim() {
    let plan = generate_workout_plan(
        &common::female_profile(Goal::GainMuscle),
        &WorkoutCustomizationConfig::default(),
    );
    assert_eq!(plan, template_for(Goal::GainMuscle).to_plan());
}

// ============================================================================
// Customizations
// ============================================================================

#[test]
fn test_older_adult_volume_and_rest() {
    let config = WorkoutCustomizationConfig::default();
    let mut profile = common::male_profile(Goal::Maintain);
    profile.age_years = 55;

    let base = template_for(Goal::Maintain).to_plan();
    let plan = generate_workout_plan(&profile, &config);
    let squat = &plan.workouts[0].exercises[0];
    let base_squat = &base.workouts[0].exercises[0];

    assert_eq!(squat.name, "Barbell Squat");
    assert_eq!(squat.volume.sets(), Some(2));
    assert_eq!(squat.rest_sec, base_squat.rest_sec.map(|rest| rest + 30));
}

#[test]
fn test_older_adult_sets_never_below_two() {
    let mut profile = common::male_profile(Goal::Maintain);
    profile.age_years = 70;
    let plan = generate_workout_plan(&profile, &WorkoutCustomizationConfig::default());

    for exercise in plan.workouts.iter().flat_map(|w| &w.exercises) {
        if let Some(sets) = exercise.volume.sets() {
            assert!(sets >= 2, "{} has {sets} sets", exercise.name);
        }
    }
}

#[test]
fn test_high_body_fat_limits_exercises_per_workout() {
    let profile = common::male_profile(Goal::GainMuscle).with_body_fat(30.0);
    let plan = generate_workout_plan(&profile, &WorkoutCustomizationConfig::default());
    assert!(plan.workouts.iter().all(|w| w.exercises.len() <= 4));
    // Order is preserved: the first four template exercises remain
    assert_eq!(plan.workouts[0].exercises[0].name, "Barbell Bench Press");
}

#[test]
fn test_body_fat_at_threshold_keeps_full_workouts() {
    let profile = common::male_profile(Goal::GainMuscle).with_body_fat(25.0);
    let plan = generate_workout_plan(&profile, &WorkoutCustomizationConfig::default());
    assert_eq!(plan.workouts[0].exercises.len(), 7);
}

#[test]
fn test_both_customizations_compose() {
    let mut profile = common::female_profile(Goal::LoseFat).with_body_fat(32.0);
    profile.age_years = 60;
    let plan = generate_workout_plan(&profile, &WorkoutCustomizationConfig::default());

    let circuit = &plan.workouts[0];
    assert_eq!(circuit.exercises.len(), 4);
    assert_eq!(circuit.exercises[0].volume.sets(), Some(2));
    assert_eq!(circuit.exercises[0].rest_sec, Some(90));
}

// ============================================================================
// Request boundary
// ============================================================================

#[test]
fn test_invalid_goal_is_rejected() {
    let err = generate_workout_plan_from_request(
        &common::male_input("invalid"),
        &WorkoutCustomizationConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlanError::InvalidGoal("invalid".to_owned()));
    assert_eq!(err.field(), "goal");
}

#[test]
fn test_request_matches_typed_path() {
    let config = WorkoutCustomizationConfig::default();
    let plan = generate_workout_plan_from_request(&common::female_input("gain_muscle"), &config)
        .unwrap();
    assert_eq!(
        plan,
        generate_workout_plan(&common::female_profile(Goal::GainMuscle), &config)
    );
}
