// ABOUTME: Body composition summary derived from a body-fat estimate and body weight
// ABOUTME: Fat mass, lean mass, BMI, and the ACE body-fat category for the subject's sex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Summary
//!
//! ```text
//! fat_mass  = weight * BF% / 100
//! lean_mass = weight - fat_mass
//! BMI       = weight / height_m^2
//! ```
//!
//! Categories follow the American Council on Exercise body-fat chart:
//!
//! | Category  | Men     | Women   |
//! |-----------|---------|---------|
//! | Essential | < 6%    | < 14%   |
//! | Athletic  | 6-13%   | 14-20%  |
//! | Fitness   | 14-17%  | 21-24%  |
//! | Average   | 18-24%  | 25-31%  |
//! | Obese     | >= 25%  | >= 32%  |

use physique_core::models::{Profile, ScanResult, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ACE body-fat category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    /// Essential fat only
    Essential,
    /// Typical of athletes
    Athletic,
    /// Typical of fit individuals
    Fitness,
    /// Population average
    Average,
    /// Above the average range
    Obese,
}

impl BodyFatCategory {
    /// Classify a body-fat percentage for a subject of the given sex
    #[must_use]
    pub fn classify(body_fat_percentage: f64, sex: Sex) -> Self {
        let [essential, athletic, fitness, average] = match sex {
            Sex::Male => [6.0, 14.0, 18.0, 25.0],
            Sex::Female => [14.0, 21.0, 25.0, 32.0],
        };
        if body_fat_percentage < essential {
            Self::Essential
        } else if body_fat_percentage < athletic {
            Self::Athletic
        } else if body_fat_percentage < fitness {
            Self::Fitness
        } else if body_fat_percentage < average {
            Self::Average
        } else {
            Self::Obese
        }
    }

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Athletic => "athletic",
            Self::Fitness => "fitness",
            Self::Average => "average",
            Self::Obese => "obese",
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composition breakdown for one scan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSummary {
    /// Body-fat percentage the summary was derived from
    pub body_fat_percentage: f64,
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
    /// Lean body mass (kg)
    pub lean_mass_kg: f64,
    /// Body mass index (kg/m^2)
    pub bmi: f64,
    /// ACE category
    pub category: BodyFatCategory,
}

impl CompositionSummary {
    /// Summarize a body-fat percentage for a profile
    #[must_use]
    pub fn new(body_fat_percentage: f64, profile: &Profile) -> Self {
        let fat_mass_kg = profile.weight_kg * body_fat_percentage / 100.0;
        let height_m = profile.height_cm / 100.0;
        Self {
            body_fat_percentage,
            fat_mass_kg,
            lean_mass_kg: profile.weight_kg - fat_mass_kg,
            bmi: profile.weight_kg / (height_m * height_m),
            category: BodyFatCategory::classify(body_fat_percentage, profile.sex),
        }
    }

    /// Summarize a scan result for a profile
    #[must_use]
    pub fn from_scan(scan: &ScanResult, profile: &Profile) -> Self {
        Self::new(scan.body_fat_percentage, profile)
    }
}
