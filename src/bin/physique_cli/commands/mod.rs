// ABOUTME: Re-exports command modules for physique-cli
// ABOUTME: Scan, plan, and profile validation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod plan;
pub mod profile;
pub mod scan;
