// ABOUTME: Profile and scan store contracts consumed by the scan service
// ABOUTME: Pluggable backends behind async traits with in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stores
//!
//! Persistence is an external collaborator keyed by user identity. The engine
//! only relies on these two contracts:
//!
//! - [`ProfileStore`]: validated profile snapshots, one per user
//! - [`ScanStore`]: append-only scan history, listed most recent first

/// `DashMap`-backed store implementations
pub mod memory;

pub use memory::{InMemoryProfileStore, InMemoryScanStore};

use async_trait::async_trait;
use physique_core::errors::ValidationError;
use physique_core::models::{Profile, ProfileInput, ScanResult, StoredScan};
use uuid::Uuid;

/// Profile storage keyed by user
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Current profile for a user, if one was stored
    async fn get(&self, user_id: Uuid) -> Option<Profile>;

    /// Validate and store a profile, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first invalid field; nothing is
    /// stored in that case
    async fn put(&self, user_id: Uuid, input: ProfileInput) -> Result<Profile, ValidationError>;
}

/// Scan history storage keyed by user
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Persist a scan, assigning its id and creation timestamp
    async fn append(&self, user_id: Uuid, scan: ScanResult) -> StoredScan;

    /// All scans for a user, most recent first
    async fn list(&self, user_id: Uuid) -> Vec<StoredScan>;
}
