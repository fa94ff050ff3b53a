// ABOUTME: Body-fat scan results and their persisted form
// ABOUTME: ScanResult is immutable once produced; StoredScan adds the store-assigned id and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Measurements;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a scan's body-fat value was obtained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    /// Derived from detected landmarks and the Navy formula
    #[default]
    Estimated,
    /// Substituted plausible value after an estimation-stage failure
    Fallback,
}

/// Outcome of one two-photo body-fat scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Estimated body-fat percentage
    pub body_fat_percentage: f64,
    /// Measurements the estimate was computed from; absent for fallback estimates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    /// Confidence in the estimate, in `[0, 1]`
    pub confidence: f64,
    /// When the scan was produced
    pub timestamp: DateTime<Utc>,
    /// Whether the value is a real estimate or the degraded-mode fallback
    #[serde(default)]
    pub source: EstimateSource,
}

impl ScanResult {
    /// Whether this result came from the degraded-mode fallback
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == EstimateSource::Fallback
    }
}

/// A scan as persisted by a scan store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredScan {
    /// Opaque unique identifier assigned by the store
    pub id: Uuid,
    /// Owner of the scan
    pub user_id: Uuid,
    /// When the store accepted the scan
    pub created_at: DateTime<Utc>,
    /// The scan itself, unchanged
    pub scan: ScanResult,
}
