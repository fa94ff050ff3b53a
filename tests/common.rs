// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, captures, and service builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `physique_engine`

use physique_core::models::{ActivityLevel, Goal, Profile, ProfileInput, Sex};
use physique_engine::config::IntelligenceConfig;
use physique_engine::landmarks::{FixedLandmarkProvider, ImageCapture};
use physique_engine::services::BodyScanService;
use std::env;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference male profile: 175 cm, 80 kg, 35 years
pub fn male_profile(goal: Goal) -> Profile {
    Profile {
        height_cm: 175.0,
        weight_kg: 80.0,
        age_years: 35,
        sex: Sex::Male,
        goal,
        activity_level: ActivityLevel::Moderate,
        body_fat_percentage: None,
    }
}

/// Reference female profile: 165 cm, 60 kg, 28 years, lightly active
pub fn female_profile(goal: Goal) -> Profile {
    Profile {
        height_cm: 165.0,
        weight_kg: 60.0,
        age_years: 28,
        sex: Sex::Female,
        goal,
        activity_level: ActivityLevel::Light,
        body_fat_percentage: None,
    }
}

/// Untrusted input matching [`male_profile`] with a caller-chosen goal string
pub fn male_input(goal: &str) -> ProfileInput {
    ProfileInput {
        height_cm: 175.0,
        weight_kg: 80.0,
        age_years: 35,
        sex: "male".to_owned(),
        goal: goal.to_owned(),
        activity_level: Some("moderate".to_owned()),
        body_fat_percentage: None,
    }
}

/// Untrusted input matching [`female_profile`]
pub fn female_input(goal: &str) -> ProfileInput {
    ProfileInput {
        height_cm: 165.0,
        weight_kg: 60.0,
        age_years: 28,
        sex: "female".to_owned(),
        goal: goal.to_owned(),
        activity_level: Some("light".to_owned()),
        body_fat_percentage: None,
    }
}

/// Portrait 1080x1920 capture with a small non-empty payload
pub fn portrait_capture() -> ImageCapture {
    ImageCapture::new(vec![0xFF_u8, 0xD8, 0xFF, 0xE0], 1080, 1920)
}

/// Capture with no payload, which every provider rejects
pub fn empty_capture() -> ImageCapture {
    ImageCapture::new(Vec::<u8>::new(), 1080, 1920)
}

/// Service with in-memory stores, the fixed provider, and default tunables
pub fn create_test_service() -> BodyScanService {
    create_test_service_with(&IntelligenceConfig::default())
}

/// Service with in-memory stores, the fixed provider, and the given tunables
pub fn create_test_service_with(config: &IntelligenceConfig) -> BodyScanService {
    init_test_logging();
    BodyScanService::in_memory(Arc::new(FixedLandmarkProvider::new()), config)
}
