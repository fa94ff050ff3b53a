// ABOUTME: Application constants organized by domain
// ABOUTME: Profile validation limits, formula coefficients, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Accepted ranges for profile fields at the store boundary
pub mod limits {
    /// Minimum accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum accepted body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum accepted age (years)
    pub const MIN_AGE_YEARS: u32 = 10;
    /// Maximum accepted age (years)
    pub const MAX_AGE_YEARS: u32 = 100;
}

/// US Navy circumference method coefficients
///
/// Reference: Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat
/// for U.S. Navy men and women from body circumferences and height.
/// Naval Health Research Center Report No. 84-11.
pub mod navy {
    /// Numerator shared by both equations
    pub const NUMERATOR: f64 = 495.0;
    /// Offset subtracted from the density quotient
    pub const OFFSET: f64 = 450.0;

    /// Male intercept
    pub const MALE_INTERCEPT: f64 = 1.0324;
    /// Male coefficient on log10(waist - neck)
    pub const MALE_GIRTH_COEF: f64 = 0.19077;
    /// Male coefficient on log10(height)
    pub const MALE_HEIGHT_COEF: f64 = 0.15456;

    /// Female intercept
    pub const FEMALE_INTERCEPT: f64 = 1.29579;
    /// Female coefficient on log10(waist + hip - neck)
    pub const FEMALE_GIRTH_COEF: f64 = 0.35004;
    /// Female coefficient on log10(height)
    pub const FEMALE_HEIGHT_COEF: f64 = 0.22100;
}

/// Caloric density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Service identifiers used in structured logging
pub mod service_names {
    /// Name of the engine as reported in logs
    pub const PHYSIQUE_ENGINE: &str = "physique-engine";
    /// Name of the command-line tool
    pub const PHYSIQUE_CLI: &str = "physique-cli";
}
