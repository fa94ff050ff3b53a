// ABOUTME: Body scan business logic combining the pipeline, profile store, and scan store
// ABOUTME: Scan, history, composition, and plan operations keyed by user identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::landmarks::{ImageCapture, PoseLandmarkProvider};
use crate::pipeline::ScanPipeline;
use crate::stores::{InMemoryProfileStore, InMemoryScanStore, ProfileStore, ScanStore};
use physique_core::errors::{AppError, AppResult};
use physique_core::models::{NutritionPlan, Profile, ProfileInput, StoredScan, WorkoutPlan};
use physique_intelligence::config::{
    IntelligenceConfig, NutritionConfig, WorkoutCustomizationConfig,
};
use physique_intelligence::{
    generate_nutrition_plan, generate_workout_plan, BodyFatTrend, CompositionSummary,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// A user's stored scans with their trend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistory {
    /// Scans, most recent first
    pub scans: Vec<StoredScan>,
    /// Trend across the scans; absent when there are none
    pub trend: Option<BodyFatTrend>,
}

/// Workout and nutrition plans generated together
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlans {
    /// Profile the plans were generated from, including the latest body fat
    pub profile: Profile,
    /// Workout plan
    pub workout: WorkoutPlan,
    /// Nutrition plan
    pub nutrition: NutritionPlan,
}

/// Protocol-agnostic facade over the scan pipeline and stores
pub struct BodyScanService {
    pipeline: ScanPipeline,
    profiles: Arc<dyn ProfileStore>,
    scans: Arc<dyn ScanStore>,
    nutrition: NutritionConfig,
    workout: WorkoutCustomizationConfig,
}

impl BodyScanService {
    /// Create a service from explicit collaborators
    #[must_use]
    pub fn new(
        pipeline: ScanPipeline,
        profiles: Arc<dyn ProfileStore>,
        scans: Arc<dyn ScanStore>,
        config: &IntelligenceConfig,
    ) -> Self {
        Self {
            pipeline,
            profiles,
            scans,
            nutrition: config.nutrition.clone(),
            workout: config.workout.clone(),
        }
    }

    /// Create a service with in-memory stores
    #[must_use]
    pub fn in_memory(provider: Arc<dyn PoseLandmarkProvider>, config: &IntelligenceConfig) -> Self {
        Self::new(
            ScanPipeline::new(provider, &config.estimation),
            Arc::new(InMemoryProfileStore::new()),
            Arc::new(InMemoryScanStore::new()),
            config,
        )
    }

    /// Validate and store a user's profile
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` or `InvalidInput` naming the offending field
    pub async fn update_profile(&self, user_id: Uuid, input: ProfileInput) -> AppResult<Profile> {
        self.profiles
            .put(user_id, input)
            .await
            .map_err(|e| AppError::from(e).with_user_id(user_id))
    }

    /// Stored profile for a user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile
    pub async fn profile(&self, user_id: Uuid) -> AppResult<Profile> {
        self.profiles
            .get(user_id)
            .await
            .ok_or_else(|| AppError::not_found("Profile").with_user_id(user_id))
    }

    /// Run a scan for a user and append it to their history
    ///
    /// Estimation problems never fail the call; they yield a fallback result.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile
    pub async fn scan(
        &self,
        user_id: Uuid,
        front: &ImageCapture,
        side: &ImageCapture,
    ) -> AppResult<StoredScan> {
        let profile = self.profile(user_id).await?;
        let result = self.pipeline.run(front, side, &profile).await;
        let stored = self.scans.append(user_id, result).await;

        info!(
            %user_id,
            scan_id = %stored.id,
            body_fat_percentage = stored.scan.body_fat_percentage,
            fallback = stored.scan.is_fallback(),
            "Scan stored"
        );
        Ok(stored)
    }

    /// A user's scan history and trend
    pub async fn history(&self, user_id: Uuid) -> ScanHistory {
        let scans = self.scans.list(user_id).await;
        let trend = BodyFatTrend::from_history(&scans);
        ScanHistory { scans, trend }
    }

    /// Composition summary for the latest scan, if any
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile
    pub async fn composition(&self, user_id: Uuid) -> AppResult<Option<CompositionSummary>> {
        let profile = self.profile(user_id).await?;
        Ok(self
            .scans
            .list(user_id)
            .await
            .first()
            .map(|latest| CompositionSummary::from_scan(&latest.scan, &profile)))
    }

    /// Generate workout and nutrition plans from the stored profile
    ///
    /// The latest scan's body fat replaces the stored value so body-fat
    /// dependent customizations reflect the most recent measurement.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile
    pub async fn plans(&self, user_id: Uuid) -> AppResult<GeneratedPlans> {
        let stored = self.profile(user_id).await?;
        let profile = match self.scans.list(user_id).await.first() {
            Some(latest) => stored.with_body_fat(latest.scan.body_fat_percentage),
            None => stored,
        };

        Ok(GeneratedPlans {
            profile,
            workout: generate_workout_plan(&profile, &self.workout),
            nutrition: generate_nutrition_plan(&profile, &self.nutrition),
        })
    }
}
