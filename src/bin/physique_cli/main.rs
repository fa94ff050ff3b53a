// ABOUTME: Physique CLI - run body scans and generate plans from the command line
// ABOUTME: Prints JSON results on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate body fat from two photos
//! physique-cli scan --front front.jpg --side side.jpg \
//!     --height-cm 175 --weight-kg 80 --age 35 --sex male
//!
//! # Reproducible simulated sensor noise
//! physique-cli scan --front front.jpg --side side.jpg --profile me.json --noise --seed 42
//!
//! # Generate a workout plan from a profile file
//! physique-cli plan workout --profile me.json
//!
//! # Generate a nutrition plan from flags
//! physique-cli plan nutrition --height-cm 165 --weight-kg 60 --age 28 --sex female --goal lose_fat
//!
//! # Check a profile without doing anything else
//! physique-cli validate-profile --profile me.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use physique_core::constants::service_names;
use physique_engine::config::{IntelligenceConfig, ServerConfig};
use physique_engine::logging::LoggingConfig;
use tracing::info;

use commands::scan::ScanOptions;
use helpers::profile_args::ProfileArgs;

#[derive(Parser)]
#[command(
    name = "physique-cli",
    about = "Physique body-composition CLI",
    long_about = "Estimate body-fat percentage from front and side photographs and generate workout and nutrition plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print single-line JSON instead of pretty-printed output
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate body fat from a front and a side photograph
    Scan {
        #[command(flatten)]
        options: ScanOptions,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate a plan for a profile
    Plan {
        #[command(subcommand)]
        kind: PlanCommand,
    },

    /// Validate a profile and print its resolved form
    ValidateProfile {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Goal-specific weekly workout plan
    Workout {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Calorie and macro targets with meal ideas
    Nutrition {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::PHYSIQUE_CLI);
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let server_config = ServerConfig::from_env()?;
    let intelligence = IntelligenceConfig::global();
    info!("Physique CLI ready");

    match cli.command {
        Command::Scan { options, profile } => {
            commands::scan::run(&options, profile, &server_config, intelligence, cli.compact)
                .await?;
        }
        Command::Plan { kind } => match kind {
            PlanCommand::Workout { profile } => {
                commands::plan::workout(profile, intelligence, cli.compact).await?;
            }
            PlanCommand::Nutrition { profile } => {
                commands::plan::nutrition(profile, intelligence, cli.compact).await?;
            }
        },
        Command::ValidateProfile { profile } => {
            commands::profile::validate(profile, cli.compact).await?;
        }
    }

    Ok(())
}
