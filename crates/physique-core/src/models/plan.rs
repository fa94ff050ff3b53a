// ABOUTME: Workout and nutrition plan value objects returned by the plan generator
// ABOUTME: Exercise volume is a sum type: sets x reps, or a timed hold/interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Day of the week, ordered Monday first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

/// Session modality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Resistance training
    Strength,
    /// Steady-state aerobic work
    Cardio,
    /// High-intensity interval training
    Hiit,
    /// Mobility and stretching
    Flexibility,
}

/// Prescribed volume for one exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExerciseVolume {
    /// Sets of repetitions, e.g. 4 x "8-10"
    Reps {
        /// Number of sets
        sets: u32,
        /// Repetitions per set (a count or a range such as "8-10")
        reps: String,
    },
    /// Work measured in time, optionally repeated for a number of sets
    Timed {
        /// Seconds of work per set
        #[serde(rename = "durationSec")]
        duration_sec: u32,
        /// Number of rounds, when the interval is repeated
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sets: Option<u32>,
    },
}

impl ExerciseVolume {
    /// Number of sets, when the exercise prescribes any
    #[must_use]
    pub const fn sets(&self) -> Option<u32> {
        match self {
            Self::Reps { sets, .. } => Some(*sets),
            Self::Timed { sets, .. } => *sets,
        }
    }

    /// Seconds of work per set, for timed exercises
    #[must_use]
    pub const fn duration_sec(&self) -> Option<u32> {
        match self {
            Self::Reps { .. } => None,
            Self::Timed { duration_sec, .. } => Some(*duration_sec),
        }
    }
}

/// One exercise within a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Prescribed volume
    #[serde(flatten)]
    pub volume: ExerciseVolume,
    /// Rest between sets (seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_sec: Option<u32>,
    /// Form cues or substitutions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One training session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Session name
    pub name: String,
    /// Session modality
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Expected session length (minutes)
    pub duration_min: u32,
    /// Exercises in the order they are performed
    pub exercises: Vec<Exercise>,
    /// General instructions for the session
    pub instructions: String,
}

/// Multi-week training plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Plan title
    pub title: String,
    /// Plan summary
    pub description: String,
    /// Program length (weeks)
    pub duration_weeks: u32,
    /// Days without scheduled training
    pub rest_days: BTreeSet<DayOfWeek>,
    /// Sessions in weekly rotation order
    pub workouts: Vec<Workout>,
}

/// Daily macronutrient targets (grams)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

/// Meal suggestions grouped by meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Breakfast ideas
    pub breakfast: Vec<String>,
    /// Lunch ideas
    pub lunch: Vec<String>,
    /// Dinner ideas
    pub dinner: Vec<String>,
    /// Snack ideas
    pub snacks: Vec<String>,
}

/// Daily nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    /// Plan title
    pub title: String,
    /// Plan summary
    pub description: String,
    /// Basal metabolic rate (kcal/day), rounded
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day), rounded
    pub tdee: u32,
    /// Daily calorie target, rounded
    pub daily_calories: u32,
    /// Macronutrient targets, rounded
    pub macros: MacroTargets,
    /// Meal suggestions
    pub meal_plan: MealPlan,
    /// Goal-specific guidance
    pub guidelines: Vec<String>,
}
