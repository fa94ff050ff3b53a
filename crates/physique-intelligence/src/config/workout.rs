// ABOUTME: Workout customization thresholds applied on top of the static templates
// ABOUTME: Older-adult volume/rest adjustments and the beginner exercise cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Customization pass settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutCustomizationConfig {
    /// Adjustments apply when age is strictly above this (50)
    pub older_adult_age: u32,
    /// Sets removed per exercise for older adults (1)
    pub older_adult_set_reduction: u32,
    /// Sets never reduced below this (2)
    pub min_sets: u32,
    /// Seconds added to every defined rest period for older adults (30)
    pub older_adult_extra_rest_sec: u32,
    /// Exercise lists are capped when body fat is strictly above this (25%)
    pub beginner_body_fat_pct: f64,
    /// Exercises kept per workout for presumed beginners (4)
    pub beginner_max_exercises: usize,
}

impl Default for WorkoutCustomizationConfig {
    fn default() -> Self {
        Self {
            older_adult_age: 50,
            older_adult_set_reduction: 1,
            min_sets: 2,
            older_adult_extra_rest_sec: 30,
            beginner_body_fat_pct: 25.0,
            beginner_max_exercises: 4,
        }
    }
}
