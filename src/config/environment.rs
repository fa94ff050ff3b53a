// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Deployment mode, log level, default capture dimensions, and landmark backend selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the engine process

use anyhow::{Context, Result};
use physique_core::models::ImageDimensions;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Default capture width (portrait 1080p)
pub const DEFAULT_CAPTURE_WIDTH: u32 = 1080;
/// Default capture height (portrait 1080p)
pub const DEFAULT_CAPTURE_HEIGHT: u32 = 1920;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output including intermediate measurements
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Which pose landmark backend to construct
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkBackend {
    /// Deterministic stand-in returning fixed keypoints
    #[default]
    Fixed,
}

impl LandmarkBackend {
    /// Parse a backend name
    ///
    /// # Errors
    ///
    /// Returns an error for unknown backend names
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            other => anyhow::bail!("Unknown landmark backend '{other}' (expected: fixed)"),
        }
    }
}

impl fmt::Display for LandmarkBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

/// Process-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Pixel dimensions assumed for captures that do not report their own
    pub default_capture: ImageDimensions,
    /// Landmark detector to use
    pub landmark_backend: LandmarkBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            default_capture: ImageDimensions::new(DEFAULT_CAPTURE_WIDTH, DEFAULT_CAPTURE_HEIGHT),
            landmark_backend: LandmarkBackend::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed, the capture
    /// dimensions are zero, or the landmark backend is unknown
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let width: u32 = env_var_or("PHYSIQUE_CAPTURE_WIDTH", &DEFAULT_CAPTURE_WIDTH.to_string())
            .parse()
            .context("Invalid PHYSIQUE_CAPTURE_WIDTH value")?;
        let height: u32 =
            env_var_or("PHYSIQUE_CAPTURE_HEIGHT", &DEFAULT_CAPTURE_HEIGHT.to_string())
                .parse()
                .context("Invalid PHYSIQUE_CAPTURE_HEIGHT value")?;
        let default_capture = ImageDimensions::new(width, height);
        if default_capture.is_empty() {
            anyhow::bail!("Capture dimensions must be non-zero, got {width}x{height}");
        }

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            default_capture,
            landmark_backend: LandmarkBackend::parse(&env_var_or(
                "PHYSIQUE_LANDMARK_BACKEND",
                "fixed",
            ))?,
        };

        info!("{}", config.summary());
        Ok(config)
    }

    /// One-line configuration summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Physique configuration: environment={}, log_level={}, capture={}x{}, landmark_backend={}",
            self.environment,
            self.log_level,
            self.default_capture.width,
            self.default_capture.height,
            self.landmark_backend
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
