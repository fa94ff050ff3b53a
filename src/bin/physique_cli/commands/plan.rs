// ABOUTME: Plan commands for physique-cli
// ABOUTME: Generates workout or nutrition plans from a profile file or flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use physique_engine::config::IntelligenceConfig;
use physique_intelligence::{
    generate_nutrition_plan_from_request, generate_workout_plan_from_request,
};

use crate::helpers::output::print_json;
use crate::helpers::profile_args::ProfileArgs;

/// Print a workout plan
pub async fn workout(
    profile_args: ProfileArgs,
    intelligence: &IntelligenceConfig,
    compact: bool,
) -> Result<()> {
    let request = profile_args.into_input().await?;
    let plan = generate_workout_plan_from_request(&request, &intelligence.workout)?;
    print_json(&plan, compact)
}

/// Print a nutrition plan
pub async fn nutrition(
    profile_args: ProfileArgs,
    intelligence: &IntelligenceConfig,
    compact: bool,
) -> Result<()> {
    let request = profile_args.into_input().await?;
    let plan = generate_nutrition_plan_from_request(&request, &intelligence.nutrition)?;
    print_json(&plan, compact)
}
