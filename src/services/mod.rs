// ABOUTME: Domain service layer combining the scan pipeline with profile and scan stores
// ABOUTME: Protocol-agnostic operations reusable by the CLI and any future transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Scan, history, composition, and plan operations
pub mod body_scan;

pub use body_scan::{BodyScanService, GeneratedPlans, ScanHistory};
