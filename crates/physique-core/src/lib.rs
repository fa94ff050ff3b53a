// ABOUTME: Core types and constants for the Physique body-composition engine
// ABOUTME: Foundation crate with error handling, value objects, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Physique Core
//!
//! Foundation crate providing the shared vocabulary of the Physique engine.
//! Every other crate in the workspace depends on it, so it changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified `AppError`/`ErrorCode` plus the domain errors raised by
//!   validation, estimation, and plan generation
//! - **constants**: Profile limits, formula coefficients, and service names
//! - **models**: Value objects (profiles, landmarks, measurements, scans, plans)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Value objects exchanged between the estimation pipeline and plan generator
pub mod models;
