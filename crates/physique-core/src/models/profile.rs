// ABOUTME: User profile snapshot consumed by the estimator and plan generator
// ABOUTME: Closed Sex, Goal, and ActivityLevel enums plus the untrusted ProfileInput boundary shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::errors::{PlanError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Navy and Mifflin-St Jeor equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ValidationError::unrecognized("sex", s)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training goal selecting the workout template and calorie/macro targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit, higher protein
    LoseFat,
    /// Caloric surplus, higher carbohydrate
    GainMuscle,
    /// Caloric balance
    Maintain,
}

impl Goal {
    /// All recognized goals in declaration order
    pub const ALL: [Self; 3] = [Self::LoseFat, Self::GainMuscle, Self::Maintain];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseFat => "lose_fat",
            Self::GainMuscle => "gain_muscle",
            Self::Maintain => "maintain",
        }
    }
}

impl FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_fat" => Ok(Self::LoseFat),
            "gain_muscle" => Ok(Self::GainMuscle),
            "maintain" => Ok(Self::Maintain),
            _ => Err(PlanError::InvalidGoal(s.to_owned())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity level selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(PlanError::InvalidActivityLevel(s.to_owned())),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable, fully-resolved profile snapshot
///
/// Created by the profile store after validation. The core never mutates it;
/// derived copies (e.g. with the latest body-fat value) are built with
/// [`Profile::with_body_fat`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Training goal
    pub goal: Goal,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Most recent body-fat estimate, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
}

impl Profile {
    /// Copy of this profile carrying a body-fat estimate
    #[must_use]
    pub const fn with_body_fat(mut self, body_fat_percentage: f64) -> Self {
        self.body_fat_percentage = Some(body_fat_percentage);
        self
    }
}

/// Untrusted profile shape as received from callers
///
/// Enumerations arrive as strings; [`ProfileInput::validate`] turns this into a
/// [`Profile`] or reports the first offending field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInput {
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Age in years
    pub age_years: u32,
    /// `male` or `female`
    pub sex: String,
    /// `lose_fat`, `gain_muscle`, or `maintain`
    pub goal: String,
    /// Activity level; stored profiles default to `moderate`, plan requests require it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Latest body-fat percentage, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
}

impl ProfileInput {
    /// Validate every field as the profile store does
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first field outside its accepted range or set
    pub fn validate(&self) -> Result<Profile, ValidationError> {
        let goal = self
            .goal
            .parse::<Goal>()
            .map_err(|_| ValidationError::unrecognized("goal", &self.goal))?;
        let activity_level = self.parse_activity_level().map_err(|_| {
            ValidationError::unrecognized(
                "activity_level",
                self.activity_level.as_deref().unwrap_or_default(),
            )
        })?;
        self.validate_with(goal, activity_level)
    }

    /// Resolve this input for plan generation
    ///
    /// The goal is checked first so a bad goal is reported as `InvalidGoal`
    /// regardless of any other problem with the request. Unlike
    /// [`ProfileInput::validate`], an absent activity level is an error here.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidGoal`, `PlanError::MissingActivityLevel`,
    /// `PlanError::InvalidActivityLevel`, or `PlanError::InvalidProfile` for the
    /// remaining fields
    pub fn resolve_for_plan(&self) -> Result<Profile, PlanError> {
        let goal = self.goal.parse::<Goal>()?;
        let activity_level = self
            .activity_level
            .as_deref()
            .ok_or(PlanError::MissingActivityLevel)?
            .parse::<ActivityLevel>()?;
        Ok(self.validate_with(goal, activity_level)?)
    }

    fn parse_activity_level(&self) -> Result<ActivityLevel, PlanError> {
        self.activity_level
            .as_deref()
            .map_or(Ok(ActivityLevel::default()), str::parse::<ActivityLevel>)
    }

    fn validate_with(
        &self,
        goal: Goal,
        activity_level: ActivityLevel,
    ) -> Result<Profile, ValidationError> {
        if !(limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(ValidationError::out_of_range(
                "height_cm",
                format!(
                    "must be between {} and {} cm, got {}",
                    limits::MIN_HEIGHT_CM,
                    limits::MAX_HEIGHT_CM,
                    self.height_cm
                ),
            ));
        }
        if !(limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(ValidationError::out_of_range(
                "weight_kg",
                format!(
                    "must be between {} and {} kg, got {}",
                    limits::MIN_WEIGHT_KG,
                    limits::MAX_WEIGHT_KG,
                    self.weight_kg
                ),
            ));
        }
        if !(limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS).contains(&self.age_years) {
            return Err(ValidationError::out_of_range(
                "age_years",
                format!(
                    "must be between {} and {} years, got {}",
                    limits::MIN_AGE_YEARS,
                    limits::MAX_AGE_YEARS,
                    self.age_years
                ),
            ));
        }
        let sex = self.sex.parse::<Sex>()?;
        if let Some(body_fat) = self.body_fat_percentage {
            if !(0.0..=100.0).contains(&body_fat) {
                return Err(ValidationError::out_of_range(
                    "body_fat_percentage",
                    format!("must be between 0 and 100, got {body_fat}"),
                ));
            }
        }

        Ok(Profile {
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            age_years: self.age_years,
            sex,
            goal,
            activity_level,
            body_fat_percentage: self.body_fat_percentage,
        })
    }
}

impl From<&Profile> for ProfileInput {
    fn from(profile: &Profile) -> Self {
        Self {
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            age_years: profile.age_years,
            sex: profile.sex.as_str().to_owned(),
            goal: profile.goal.as_str().to_owned(),
            activity_level: Some(profile.activity_level.as_str().to_owned()),
            body_fat_percentage: profile.body_fat_percentage,
        }
    }
}
