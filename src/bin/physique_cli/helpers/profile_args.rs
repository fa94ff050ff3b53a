// ABOUTME: Shared profile arguments for physique-cli commands
// ABOUTME: Builds a ProfileInput from a JSON file or individual flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use physique_core::models::ProfileInput;
use tokio::fs;

/// Profile given either as a JSON file or as flags
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// JSON file holding the profile; individual flags are ignored when set
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Height in centimeters
    #[arg(long)]
    pub height_cm: Option<f64>,

    /// Body weight in kilograms
    #[arg(long)]
    pub weight_kg: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// `male` or `female`
    #[arg(long)]
    pub sex: Option<String>,

    /// `lose_fat`, `gain_muscle`, or `maintain`
    #[arg(long, default_value = "maintain")]
    pub goal: String,

    /// `sedentary`, `light`, `moderate`, `active`, or `very_active`
    #[arg(long)]
    pub activity_level: Option<String>,

    /// Latest known body-fat percentage
    #[arg(long)]
    pub body_fat: Option<f64>,
}

impl ProfileArgs {
    /// Resolve the arguments into an unvalidated profile
    pub async fn into_input(self) -> Result<ProfileInput> {
        if let Some(path) = self.profile {
            let raw = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read profile file {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("Invalid profile JSON in {}", path.display()));
        }

        Ok(ProfileInput {
            height_cm: self
                .height_cm
                .context("--height-cm is required without --profile")?,
            weight_kg: self
                .weight_kg
                .context("--weight-kg is required without --profile")?,
            age_years: self.age.context("--age is required without --profile")?,
            sex: self.sex.context("--sex is required without --profile")?,
            goal: self.goal,
            activity_level: self.activity_level,
            body_fat_percentage: self.body_fat,
        })
    }
}
