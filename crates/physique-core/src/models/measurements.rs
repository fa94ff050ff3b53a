// ABOUTME: Body circumferences derived from landmarks, and the full calculator input
// ABOUTME: Measurements combine circumferences with the profile's anthropometrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Profile, Sex};
use serde::{Deserialize, Serialize};

/// Circumferences produced by an estimator, without profile fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Circumferences {
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Neck circumference (cm)
    pub neck_cm: f64,
    /// Hip circumference (cm); required for female subjects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

/// Sole input to the body-fat formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Neck circumference (cm)
    pub neck_cm: f64,
    /// Hip circumference (cm); its absence is an error for female subjects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Height (cm)
    pub height_cm: f64,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Age (years)
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
}

impl Measurements {
    /// Attach a profile's anthropometrics to estimated circumferences
    #[must_use]
    pub const fn from_parts(circumferences: Circumferences, profile: &Profile) -> Self {
        Self {
            waist_cm: circumferences.waist_cm,
            neck_cm: circumferences.neck_cm,
            hip_cm: circumferences.hip_cm,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            age_years: profile.age_years,
            sex: profile.sex,
        }
    }
}
