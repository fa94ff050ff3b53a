// ABOUTME: Nutrition configuration for BMR, TDEE, and goal-specific calorie/macro targets
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and the per-goal target table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use physique_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};

/// Nutrition configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie and macro targets for each goal
    pub goal_targets: GoalTargetsConfig,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            goal_targets: GoalTargetsConfig::default(),
        }
    }
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Calorie adjustment and macro split for one goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalTarget {
    /// Added to TDEE to obtain the calorie target (kcal)
    pub calorie_adjustment: f64,
    /// Protein (g per kg bodyweight)
    pub protein_g_per_kg: f64,
    /// Carbohydrate share of calories (fraction)
    pub carbs_fraction: f64,
    /// Fat share of calories (fraction)
    pub fat_fraction: f64,
}

/// Target table keyed by goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTargetsConfig {
    /// TDEE - 500, 2.2 g/kg, 35% carbs, 25% fat
    pub lose_fat: GoalTarget,
    /// TDEE + 300, 2.0 g/kg, 45% carbs, 25% fat
    pub gain_muscle: GoalTarget,
    /// TDEE, 1.6 g/kg, 40% carbs, 30% fat
    pub maintain: GoalTarget,
}

impl GoalTargetsConfig {
    /// Targets for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> &GoalTarget {
        match goal {
            Goal::LoseFat => &self.lose_fat,
            Goal::GainMuscle => &self.gain_muscle,
            Goal::Maintain => &self.maintain,
        }
    }
}

impl Default for GoalTargetsConfig {
    fn default() -> Self {
        Self {
            lose_fat: GoalTarget {
                calorie_adjustment: -500.0,
                protein_g_per_kg: 2.2,
                carbs_fraction: 0.35,
                fat_fraction: 0.25,
            },
            gain_muscle: GoalTarget {
                calorie_adjustment: 300.0,
                protein_g_per_kg: 2.0,
                carbs_fraction: 0.45,
                fat_fraction: 0.25,
            },
            maintain: GoalTarget {
                calorie_adjustment: 0.0,
                protein_g_per_kg: 1.6,
                carbs_fraction: 0.40,
                fat_fraction: 0.30,
            },
        }
    }
}
