// ABOUTME: In-memory profile and scan stores backed by concurrent hash maps
// ABOUTME: Used by the CLI, tests, and single-process deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileStore, ScanStore};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use physique_core::errors::ValidationError;
use physique_core::models::{Profile, ProfileInput, ScanResult, StoredScan};
use std::cmp::Reverse;
use tracing::debug;
use uuid::Uuid;

/// Profile store holding one validated snapshot per user
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, Profile>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored profile
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, user_id: Uuid) -> Option<Profile> {
        self.profiles.get(&user_id).map(|entry| *entry.value())
    }

    async fn put(&self, user_id: Uuid, input: ProfileInput) -> Result<Profile, ValidationError> {
        let profile = input.validate()?;
        self.profiles.insert(user_id, profile);
        debug!(%user_id, goal = %profile.goal, "Stored profile");
        Ok(profile)
    }
}

/// Append-only scan history per user
///
/// Scans are kept in insertion order; [`ScanStore::list`] reorders them by
/// creation time, newest first, with later insertions winning ties.
#[derive(Debug, Default)]
pub struct InMemoryScanStore {
    scans: DashMap<Uuid, Vec<StoredScan>>,
}

impl InMemoryScanStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScanStore for InMemoryScanStore {
    async fn append(&self, user_id: Uuid, scan: ScanResult) -> StoredScan {
        let stored = StoredScan {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            scan,
        };
        self.scans.entry(user_id).or_default().push(stored.clone());
        debug!(%user_id, scan_id = %stored.id, "Appended scan");
        stored
    }

    async fn list(&self, user_id: Uuid) -> Vec<StoredScan> {
        let mut scans: Vec<StoredScan> = self
            .scans
            .get(&user_id)
            .map(|entry| entry.value().iter().rev().cloned().collect())
            .unwrap_or_default();
        // Stable sort keeps the reversed insertion order for equal timestamps
        scans.sort_by_key(|stored| Reverse(stored.created_at));
        scans
    }
}
