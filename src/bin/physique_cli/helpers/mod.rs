// ABOUTME: Helper modules for physique-cli
// ABOUTME: JSON output and shared profile arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod output;
pub mod profile_args;
