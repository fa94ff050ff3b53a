// ABOUTME: Scan command for physique-cli
// ABOUTME: Reads two photos, runs the scan pipeline, and prints the result with a composition summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use physique_core::errors::AppError;
use physique_core::models::{ImageDimensions, ScanResult};
use physique_engine::config::{IntelligenceConfig, ServerConfig};
use physique_engine::landmarks::{create_provider, ImageCapture};
use physique_engine::pipeline::ScanPipeline;
use physique_intelligence::CompositionSummary;
use serde::Serialize;
use tokio::fs;
use tracing::info;

use crate::helpers::output::print_json;
use crate::helpers::profile_args::ProfileArgs;

/// Photo and noise options for a scan
#[derive(Args, Debug, Clone)]
pub struct ScanOptions {
    /// Front-facing photograph
    #[arg(long, value_name = "PATH")]
    pub front: PathBuf,

    /// Side-facing photograph
    #[arg(long, value_name = "PATH")]
    pub side: PathBuf,

    /// Pixel width of both photos (defaults to `PHYSIQUE_CAPTURE_WIDTH`)
    #[arg(long)]
    pub image_width: Option<u32>,

    /// Pixel height of both photos (defaults to `PHYSIQUE_CAPTURE_HEIGHT`)
    #[arg(long)]
    pub image_height: Option<u32>,

    /// Add simulated sensor noise to the estimate
    #[arg(long)]
    pub noise: bool,

    /// Noise amplitude in percentage points
    #[arg(long, requires = "noise")]
    pub noise_amplitude: Option<f64>,

    /// Seed for noise and fallback draws, making output reproducible
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanReport {
    provider: &'static str,
    scan: ScanResult,
    composition: CompositionSummary,
}

/// Run a scan and print the report
pub async fn run(
    options: &ScanOptions,
    profile_args: ProfileArgs,
    server_config: &ServerConfig,
    intelligence: &IntelligenceConfig,
    compact: bool,
) -> Result<()> {
    let profile = profile_args.into_input().await?.validate()?;

    let dimensions = ImageDimensions::new(
        options
            .image_width
            .unwrap_or(server_config.default_capture.width),
        options
            .image_height
            .unwrap_or(server_config.default_capture.height),
    );
    let front = read_capture(&options.front, dimensions).await?;
    let side = read_capture(&options.side, dimensions).await?;

    let mut estimation = intelligence.estimation.clone();
    if options.noise {
        estimation.pipeline.noise.enabled = true;
    }
    if let Some(amplitude) = options.noise_amplitude {
        estimation.pipeline.noise.amplitude_pct = amplitude;
    }
    if options.seed.is_some() {
        estimation.pipeline.noise.seed = options.seed;
    }
    estimation.validate().map_err(AppError::from)?;

    let pipeline = ScanPipeline::new(
        create_provider(server_config.landmark_backend),
        &estimation,
    );
    let scan = pipeline.run(&front, &side, &profile).await;
    info!(
        body_fat_percentage = scan.body_fat_percentage,
        fallback = scan.is_fallback(),
        "Scan finished"
    );

    let report = ScanReport {
        provider: pipeline.provider_name(),
        composition: CompositionSummary::from_scan(&scan, &profile),
        scan,
    };
    print_json(&report, compact)
}

async fn read_capture(path: &Path, dimensions: ImageDimensions) -> Result<ImageCapture> {
    let payload = fs::read(path)
        .await
        .with_context(|| format!("Failed to read photo {}", path.display()))?;
    Ok(ImageCapture::new(
        payload,
        dimensions.width,
        dimensions.height,
    ))
}
