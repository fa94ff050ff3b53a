// ABOUTME: Energy expenditure and macronutrient target calculations
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, and goal-specific calorie/macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.
//!
//! Intermediate values stay unrounded; rounding to whole kcal/grams happens
//! once, when the targets are reported.

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use physique_core::constants::energy;
use physique_core::models::{ActivityLevel, MacroTargets, Profile, Sex};
use serde::{Deserialize, Serialize};

/// Unrounded daily energy and macro targets for one profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted calorie target (kcal/day)
    pub daily_calories: f64,
    /// Protein (g/day)
    pub protein_g: f64,
    /// Carbohydrates (g/day)
    pub carbs_g: f64,
    /// Fat (g/day)
    pub fat_g: f64,
}

impl NutritionTargets {
    /// Compute targets for a validated profile
    #[must_use]
    pub fn for_profile(profile: &Profile, config: &NutritionConfig) -> Self {
        let bmr = calculate_bmr(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
            &config.bmr,
        );
        let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);

        let target = config.goal_targets.for_goal(profile.goal);
        let daily_calories = tdee + target.calorie_adjustment;

        Self {
            bmr,
            tdee,
            daily_calories,
            protein_g: profile.weight_kg * target.protein_g_per_kg,
            carbs_g: daily_calories * target.carbs_fraction / energy::CARBS_KCAL_PER_G,
            fat_g: daily_calories * target.fat_fraction / energy::FAT_KCAL_PER_G,
        }
    }

    /// Macro grams rounded to the nearest integer
    #[must_use]
    pub fn macros(&self) -> MacroTargets {
        MacroTargets {
            protein_g: round_to_u32(self.protein_g),
            carbs_g: round_to_u32(self.carbs_g),
            fat_g: round_to_u32(self.fat_g),
        }
    }

    /// BMR rounded to the nearest kcal
    #[must_use]
    pub fn rounded_bmr(&self) -> u32 {
        round_to_u32(self.bmr)
    }

    /// TDEE rounded to the nearest kcal
    #[must_use]
    pub fn rounded_tdee(&self) -> u32 {
        round_to_u32(self.tdee)
    }

    /// Calorie target rounded to the nearest kcal
    #[must_use]
    pub fn rounded_calories(&self) -> u32 {
        round_to_u32(self.daily_calories)
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
///
/// Inputs are expected to come from a validated [`Profile`].
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor(activity_level)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: targets are non-negative and far below u32::MAX
fn round_to_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
