// ABOUTME: Workout plan generation from static templates plus a profile customization pass
// ABOUTME: Older adults get fewer sets and longer rest; presumed beginners get shorter sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Plan Generator
//!
//! Customization rules, applied in order:
//!
//! 1. Age above 50: every exercise with sets loses one set (never below 2),
//!    every exercise with a rest period gains 30 seconds.
//! 2. Known body fat above 25%: each workout keeps only its first 4 exercises.

use crate::config::WorkoutCustomizationConfig;
use crate::workout_templates::template_for;
use physique_core::errors::PlanError;
use physique_core::models::{Exercise, ExerciseVolume, Profile, ProfileInput, WorkoutPlan};
use tracing::{debug, error};

/// Generate a workout plan for a validated profile
#[must_use]
pub fn generate_workout_plan(
    profile: &Profile,
    config: &WorkoutCustomizationConfig,
) -> WorkoutPlan {
    let mut plan = template_for(profile.goal).to_plan();

    if profile.age_years > config.older_adult_age {
        debug!(age = profile.age_years, "Applying older-adult volume adjustments");
        for workout in &mut plan.workouts {
            for exercise in &mut workout.exercises {
                adjust_for_older_adult(exercise, config);
            }
        }
    }

    if let Some(body_fat) = profile.body_fat_percentage {
        if body_fat > config.beginner_body_fat_pct {
            debug!(body_fat, "Capping exercise count for beginner complexity");
            for workout in &mut plan.workouts {
                workout.exercises.truncate(config.beginner_max_exercises);
            }
        }
    }

    plan
}

fn adjust_for_older_adult(exercise: &mut Exercise, config: &WorkoutCustomizationConfig) {
    let reduce = |sets: u32| {
        sets.saturating_sub(config.older_adult_set_reduction)
            .max(config.min_sets)
    };
    match &mut exercise.volume {
        ExerciseVolume::Reps { sets, .. } => *sets = reduce(*sets),
        ExerciseVolume::Timed {
            sets: Some(sets), ..
        } => *sets = reduce(*sets),
        ExerciseVolume::Timed { sets: None, .. } => {}
    }
    if let Some(rest) = exercise.rest_sec.as_mut() {
        *rest += config.older_adult_extra_rest_sec;
    }
}

/// Generate a workout plan from an untrusted request
///
/// # Errors
///
/// Returns `PlanError::InvalidGoal` when the goal is not recognized, or another
/// `PlanError` naming the first invalid field
pub fn generate_workout_plan_from_request(
    request: &ProfileInput,
    config: &WorkoutCustomizationConfig,
) -> Result<WorkoutPlan, PlanError> {
    let profile = request.resolve_for_plan().map_err(|e| {
        if let PlanError::InvalidGoal(goal) = &e {
            error!(goal = %goal, "Workout plan requested with unrecognized goal");
        }
        e
    })?;
    Ok(generate_workout_plan(&profile, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout_templates::{FAT_LOSS_TEMPLATE, MAINTENANCE_TEMPLATE};
    use physique_core::models::{ActivityLevel, Goal, Sex};

    fn profile(goal: Goal, age_years: u32, body_fat: Option<f64>) -> Profile {
        Profile {
            height_cm: 175.0,
            weight_kg: 80.0,
            age_years,
            sex: Sex::Male,
            goal,
            activity_level: ActivityLevel::Moderate,
            body_fat_percentage: body_fat,
        }
    }

    #[test]
    fn test_young_lean_profile_gets_template_unchanged() {
        let plan = generate_workout_plan(
            &profile(Goal::Maintain, 30, Some(15.0)),
            &WorkoutCustomizationConfig::default(),
        );
        assert_eq!(plan, MAINTENANCE_TEMPLATE.to_plan());
    }

    #[test]
    fn test_older_adult_sets_and_rest_adjusted() {
        let base = MAINTENANCE_TEMPLATE.to_plan();
        let plan = generate_workout_plan(
            &profile(Goal::Maintain, 55, None),
            &WorkoutCustomizationConfig::default(),
        );

        for (base_workout, workout) in base.workouts.iter().zip(&plan.workouts) {
            for (before, after) in base_workout.exercises.iter().zip(&workout.exercises) {
                if let (Some(b), Some(a)) = (before.volume.sets(), after.volume.sets()) {
                    assert_eq!(a, (b - 1).max(2), "{}", before.name);
                }
                if let (Some(b), Some(a)) = (before.rest_sec, after.rest_sec) {
                    assert_eq!(a, b + 30, "{}", before.name);
                }
                assert_eq!(before.rest_sec.is_some(), after.rest_sec.is_some());
            }
        }
    }

    #[test]
    fn test_age_exactly_fifty_is_not_adjusted() {
        let plan = generate_workout_plan(
            &profile(Goal::Maintain, 50, None),
            &WorkoutCustomizationConfig::default(),
        );
        assert_eq!(plan, MAINTENANCE_TEMPLATE.to_plan());
    }

    #[test]
    fn test_sets_never_drop_below_two() {
        let plan = generate_workout_plan(
            &profile(Goal::Maintain, 70, None),
            &WorkoutCustomizationConfig::default(),
        );
        // World's Greatest Stretch starts at 2 sets
        let stretch = plan.workouts[1]
            .exercises
            .iter()
            .find(|e| e.name == "World's Greatest Stretch")
            .unwrap();
        assert_eq!(stretch.volume.sets(), Some(2));
    }

    #[test]
    fn test_high_body_fat_truncates_to_four_exercises() {
        let base = FAT_LOSS_TEMPLATE.to_plan();
        let plan = generate_workout_plan(
            &profile(Goal::LoseFat, 30, Some(30.0)),
            &WorkoutCustomizationConfig::default(),
        );
        for (base_workout, workout) in base.workouts.iter().zip(&plan.workouts) {
            assert_eq!(workout.exercises.len(), base_workout.exercises.len().min(4));
            assert_eq!(
                workout.exercises[..],
                base_workout.exercises[..workout.exercises.len()]
            );
        }
    }

    #[test]
    fn test_body_fat_at_threshold_not_truncated() {
        let plan = generate_workout_plan(
            &profile(Goal::LoseFat, 30, Some(25.0)),
            &WorkoutCustomizationConfig::default(),
        );
        assert_eq!(plan, FAT_LOSS_TEMPLATE.to_plan());
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let mut request = ProfileInput::from(&profile(Goal::Maintain, 30, None));
        request.goal = "invalid".to_owned();
        let err = generate_workout_plan_from_request(
            &request,
            &WorkoutCustomizationConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::InvalidGoal(ref goal) if goal == "invalid"));
    }
}
