// ABOUTME: Integration tests for the physique-cli binary
// ABOUTME: Runs scan, plan, and profile validation commands against temporary files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the physique-cli binary.
//!
//! These tests verify command structure, JSON output on stdout, and error exits.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run the CLI and capture exit code, stdout, and stderr
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_physique-cli"))
        .args(args)
        .env("LOG_FORMAT", "compact")
        .env("RUST_LOG", "warn")
        .env_remove("PHYSIQUE_NOISE_ENABLED")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (exit_code, stdout, stderr)
}

fn write_photo(dir: &Path, name: &str, bytes: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path.to_string_lossy().into_owned()
}

fn write_profile(dir: &Path, json: &Value) -> String {
    let path = dir.join("profile.json");
    fs::write(&path, serde_json::to_vec(json).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let (code, stdout, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("plan"));
    assert!(stdout.contains("validate-profile"));
}

// ============================================================================
// Scan
// ============================================================================

#[test]
fn test_scan_prints_estimate_and_composition() {
    let dir = TempDir::new().unwrap();
    let front = write_photo(dir.path(), "front.jpg", &[0xFF, 0xD8, 0xFF, 0xE0]);
    let side = write_photo(dir.path(), "side.jpg", &[0xFF, 0xD8, 0xFF, 0xE1]);

    let (code, stdout, stderr) = run_cli(&[
        "scan", "--front", &front, "--side", &side, "--height-cm", "175", "--weight-kg", "80",
        "--age", "35", "--sex", "male", "--compact",
    ]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let report: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["provider"], "fixed");
    assert_eq!(report["scan"]["source"], "estimated");
    let pct = report["scan"]["bodyFatPercentage"].as_f64().unwrap();
    assert!((pct - 20.9).abs() < 0.1, "got {pct}");
    assert!(report["composition"]["leanMassKg"].as_f64().unwrap() > 60.0);
}

#[test]
fn test_scan_with_empty_photo_reports_fallback() {
    let dir = TempDir::new().unwrap();
    let front = write_photo(dir.path(), "front.jpg", &[]);
    let side = write_photo(dir.path(), "side.jpg", &[1, 2, 3]);
    let profile = write_profile(
        dir.path(),
        &serde_json::json!({
            "height_cm": 165.0,
            "weight_kg": 60.0,
            "age_years": 28,
            "sex": "female",
            "goal": "maintain"
        }),
    );

    let (code, stdout, _) = run_cli(&[
        "scan", "--front", &front, "--side", &side, "--profile", &profile, "--seed", "7",
    ]);
    assert_eq!(code, 0);

    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["scan"]["source"], "fallback");
    let pct = report["scan"]["bodyFatPercentage"].as_f64().unwrap();
    assert!((15.0..=25.0).contains(&pct));
}

#[test]
fn test_seeded_noisy_scans_match() {
    let dir = TempDir::new().unwrap();
    let front = write_photo(dir.path(), "front.jpg", &[9; 32]);
    let side = write_photo(dir.path(), "side.jpg", &[9; 32]);
    let args = [
        "scan", "--front", &front, "--side", &side, "--height-cm", "180", "--weight-kg", "90",
        "--age", "40", "--sex", "male", "--noise", "--seed", "42", "--compact",
    ];

    let (_, first, _) = run_cli(&args);
    let (_, second, _) = run_cli(&args);
    let first: Value = serde_json::from_str(first.trim()).unwrap();
    let second: Value = serde_json::from_str(second.trim()).unwrap();
    assert_eq!(
        first["scan"]["bodyFatPercentage"],
        second["scan"]["bodyFatPercentage"]
    );
}

#[test]
fn test_scan_rejects_non_finite_noise_amplitude() {
    let dir = TempDir::new().unwrap();
    let front = write_photo(dir.path(), "front.jpg", &[9; 32]);
    let side = write_photo(dir.path(), "side.jpg", &[9; 32]);

    for amplitude in ["NaN", "inf"] {
        let (code, stdout, stderr) = run_cli(&[
            "scan", "--front", &front, "--side", &side, "--height-cm", "180", "--weight-kg",
            "90", "--age", "40", "--sex", "male", "--noise", "--noise-amplitude", amplitude,
        ]);
        assert_ne!(code, 0);
        assert!(stdout.is_empty());
        assert!(stderr.contains("Noise amplitude must be finite"), "stderr: {stderr}");
    }
}

#[test]
fn test_scan_missing_photo_fails() {
    let (code, _, stderr) = run_cli(&[
        "scan", "--front", "/nonexistent/front.jpg", "--side", "/nonexistent/side.jpg",
        "--height-cm", "175", "--weight-kg", "80", "--age", "35", "--sex", "male",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to read photo"));
}

// ============================================================================
// Plans and profiles
// ============================================================================

#[test]
fn test_workout_plan_from_flags() {
    let (code, stdout, _) = run_cli(&[
        "plan", "workout", "--height-cm", "170", "--weight-kg", "70", "--age", "30", "--sex",
        "male", "--goal", "gain_muscle", "--activity-level", "active",
    ]);
    assert_eq!(code, 0);
    let plan: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(plan["title"], "Muscle Gain Program");
}

#[test]
fn test_nutrition_plan_from_profile_file() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(
        dir.path(),
        &serde_json::json!({
            "height_cm": 165.0,
            "weight_kg": 60.0,
            "age_years": 28,
            "sex": "female",
            "goal": "lose_fat",
            "activity_level": "light"
        }),
    );

    let (code, stdout, _) = run_cli(&["plan", "nutrition", "--profile", &profile]);
    assert_eq!(code, 0);
    let plan: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(plan["dailyCalories"], 1329);
}

#[test]
fn test_plan_without_activity_level_exits_with_error() {
    let (code, stdout, stderr) = run_cli(&[
        "plan", "nutrition", "--height-cm", "170", "--weight-kg", "70", "--age", "30", "--sex",
        "male", "--goal", "maintain",
    ]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Missing activity level"));
}

#[test]
fn test_invalid_goal_exits_with_error() {
    let (code, stdout, stderr) = run_cli(&[
        "plan", "workout", "--height-cm", "170", "--weight-kg", "70", "--age", "30", "--sex",
        "male", "--goal", "invalid",
    ]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid"));
}

#[test]
fn test_validate_profile_rejects_out_of_range_height() {
    let (code, _, stderr) = run_cli(&[
        "validate-profile", "--height-cm", "90", "--weight-kg", "70", "--age", "30", "--sex",
        "male",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("height_cm"));
}
