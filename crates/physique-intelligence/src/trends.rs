// ABOUTME: Body-fat history trend over a user's stored scans
// ABOUTME: Latest/earliest/mean values and a stable/increasing/decreasing direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use physique_core::models::StoredScan;
use serde::{Deserialize, Serialize};

/// Changes smaller than this many percentage points count as stable
pub const STABLE_THRESHOLD_PCT: f64 = 0.5;

/// Direction of body-fat change across the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Body fat is going down
    Decreasing,
    /// Change is within the stable threshold
    Stable,
    /// Body fat is going up
    Increasing,
}

/// Summary of a body-fat history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatTrend {
    /// Number of scans considered
    pub scan_count: usize,
    /// Most recent body-fat value
    pub latest_pct: f64,
    /// Oldest body-fat value
    pub earliest_pct: f64,
    /// `latest - earliest` in percentage points
    pub change_pct: f64,
    /// Mean across all scans
    pub mean_pct: f64,
    /// When the oldest scan was stored
    pub since: DateTime<Utc>,
    /// Overall direction
    pub direction: TrendDirection,
}

impl BodyFatTrend {
    /// Summarize a most-recent-first scan list, or `None` when it is empty
    #[must_use]
    pub fn from_history(scans: &[StoredScan]) -> Option<Self> {
        let latest = scans.first()?;
        let earliest = scans.last()?;

        let latest_pct = latest.scan.body_fat_percentage;
        let earliest_pct = earliest.scan.body_fat_percentage;
        let change_pct = latest_pct - earliest_pct;

        let total: f64 = scans.iter().map(|s| s.scan.body_fat_percentage).sum();
        #[allow(clippy::cast_precision_loss)] // Scan counts are far below 2^52
        let mean_pct = total / scans.len() as f64;

        let direction = if change_pct.abs() < STABLE_THRESHOLD_PCT {
            TrendDirection::Stable
        } else if change_pct > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        };

        Some(Self {
            scan_count: scans.len(),
            latest_pct,
            earliest_pct,
            change_pct,
            mean_pct,
            since: earliest.created_at,
            direction,
        })
    }
}
