// ABOUTME: Intelligence configuration for estimation, nutrition, and workout customization
// ABOUTME: Global OnceLock singleton with PHYSIQUE_* environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Configuration
//!
//! Every numeric constant the estimator, calculator, and plan generator use has
//! a default here. Defaults reproduce the reference formulas exactly; overrides
//! exist for experimentation and for switching the demo noise on.

/// Configuration error types
pub mod error;
/// Circumference, body-fat, and pipeline settings
pub mod estimation;
/// BMR, TDEE, and goal target settings
pub mod nutrition;
/// Workout customization thresholds
pub mod workout;

pub use error::ConfigError;
pub use estimation::{
    BodyFatConfig, CircumferenceConfig, EstimationConfig, NoiseConfig, PipelineConfig,
};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalTarget, GoalTargetsConfig, NutritionConfig,
};
pub use workout::WorkoutCustomizationConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Landmark geometry, formula clamps, and pipeline behavior
    pub estimation: EstimationConfig,
    /// Energy expenditure and macro targets
    pub nutrition: NutritionConfig,
    /// Workout template customization
    pub workout: WorkoutCustomizationConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.estimation.validate()?;
        self.validate_nutrition()?;

        if self.workout.min_sets == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Workout minimum sets must be at least 1",
            ));
        }
        if self.workout.beginner_max_exercises == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Beginner exercise cap must be at least 1",
            ));
        }

        Ok(())
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        for target in [
            &nutr.goal_targets.lose_fat,
            &nutr.goal_targets.gain_muscle,
            &nutr.goal_targets.maintain,
        ] {
            if target.carbs_fraction < 0.0
                || target.fat_fraction < 0.0
                || target.carbs_fraction + target.fat_fraction > 1.0
            {
                return Err(ConfigError::ValueOutOfRange(
                    "Carb and fat fractions must be non-negative and sum to at most 1.0",
                ));
            }
            if target.protein_g_per_kg <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein target must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Circumference geometry
        Self::apply_env_var(
            "PHYSIQUE_NECK_TO_SHOULDER_RATIO",
            &mut self.estimation.circumference.neck_to_shoulder_ratio,
        )?;
        Self::apply_env_var(
            "PHYSIQUE_MIN_WAIST_CM",
            &mut self.estimation.circumference.min_waist_cm,
        )?;
        Self::apply_env_var(
            "PHYSIQUE_MIN_NECK_CM",
            &mut self.estimation.circumference.min_neck_cm,
        )?;

        // Pipeline noise
        Self::apply_env_var(
            "PHYSIQUE_NOISE_ENABLED",
            &mut self.estimation.pipeline.noise.enabled,
        )?;
        Self::apply_env_var(
            "PHYSIQUE_NOISE_AMPLITUDE",
            &mut self.estimation.pipeline.noise.amplitude_pct,
        )?;
        if let Ok(seed) = env::var("PHYSIQUE_NOISE_SEED") {
            self.estimation.pipeline.noise.seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::Parse("Invalid PHYSIQUE_NOISE_SEED".to_owned()))?,
            );
        }

        // Workout customization
        Self::apply_env_var(
            "PHYSIQUE_OLDER_ADULT_AGE",
            &mut self.workout.older_adult_age,
        )?;
        Self::apply_env_var(
            "PHYSIQUE_BEGINNER_BODY_FAT_PCT",
            &mut self.workout.beginner_body_fat_pct,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_validate() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_noise_disabled_by_default() {
        let config = IntelligenceConfig::default();
        assert!(!config.estimation.pipeline.noise.enabled);
        assert!(config.estimation.pipeline.noise.seed.is_none());
    }

    #[test]
    fn test_unordered_activity_factors_rejected() {
        let mut config = IntelligenceConfig::default();
        config.nutrition.activity_factors.light = 1.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_inverted_fallback_range_rejected() {
        let mut config = IntelligenceConfig::default();
        config.estimation.pipeline.fallback_min_pct = 30.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_noise_amplitude_rejected() {
        for amplitude in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, -0.5] {
            let mut config = IntelligenceConfig::default();
            config.estimation.pipeline.noise.amplitude_pct = amplitude;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ValueOutOfRange(_))
            ));
        }
    }

    #[test]
    #[serial]
    fn test_nan_noise_amplitude_env_override_rejected() {
        env::set_var("PHYSIQUE_NOISE_AMPLITUDE", "NaN");
        let result = IntelligenceConfig::load();
        env::remove_var("PHYSIQUE_NOISE_AMPLITUDE");
        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        env::set_var("PHYSIQUE_NOISE_ENABLED", "true");
        env::set_var("PHYSIQUE_NOISE_SEED", "42");
        let config = IntelligenceConfig::load();
        env::remove_var("PHYSIQUE_NOISE_ENABLED");
        env::remove_var("PHYSIQUE_NOISE_SEED");

        let config = config.unwrap();
        assert!(config.estimation.pipeline.noise.enabled);
        assert_eq!(config.estimation.pipeline.noise.seed, Some(42));
    }

    #[test]
    #[serial]
    fn test_unparseable_env_override_is_error() {
        env::set_var("PHYSIQUE_MIN_WAIST_CM", "wide");
        let result = IntelligenceConfig::load();
        env::remove_var("PHYSIQUE_MIN_WAIST_CM");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
