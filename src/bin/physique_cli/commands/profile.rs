// ABOUTME: Profile validation command for physique-cli
// ABOUTME: Applies the profile store's field rules and prints the resolved profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use tracing::warn;

use crate::helpers::output::print_json;
use crate::helpers::profile_args::ProfileArgs;

/// Validate a profile and print it
pub async fn validate(profile_args: ProfileArgs, compact: bool) -> Result<()> {
    let input = profile_args.into_input().await?;
    match input.validate() {
        Ok(profile) => print_json(&profile, compact),
        Err(e) => {
            warn!(field = %e.field, "Profile rejected");
            Err(e.into())
        }
    }
}
