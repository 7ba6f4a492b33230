// FitTrack - Workout Tracker for Mobile
// Copyright (C) 2025 FitTrack contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Store collaborator of the media synchronizer
//!
//! The synchronizer reads and writes the exercise catalog through this
//! trait rather than touching the database directly, so tests can swap
//! in an in-memory fake.

use crate::error::{FitTrackError, Result};
use crate::storage::queries;
use crate::sync::pool::WorkItem;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::path::Path;

/// Read/write access to the exercise animation mappings
///
/// Each call is individually atomic and durable; the synchronizer layers
/// no transaction on top.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// Exercises with a remote animation but no local copy recorded
    async fn list_missing_animations(&self) -> Result<Vec<WorkItem>>;

    /// Exercises with a local animation path recorded
    async fn list_cached_animations(&self) -> Result<Vec<WorkItem>>;

    /// Record the local path of a downloaded animation
    async fn record_local_animation(&self, exercise_id: i64, path: &Path) -> Result<()>;

    /// Clear the local animation path of every exercise in the catalog
    async fn clear_all_animation_paths(&self) -> Result<()>;
}

/// Catalog backed by the app's SQLite database
#[derive(Debug, Clone)]
pub struct SqliteAssetCatalog {
    pool: SqlitePool,
}

impl SqliteAssetCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetCatalog for SqliteAssetCatalog {
    async fn list_missing_animations(&self) -> Result<Vec<WorkItem>> {
        let exercises = queries::list_exercises_missing_animation(&self.pool).await?;
        Ok(exercises
            .into_iter()
            .map(|e| WorkItem {
                exercise_id: e.exercise_id,
                remote_locator: e.animated_image_url,
                local_locator: e.local_animated_image,
            })
            .collect())
    }

    async fn list_cached_animations(&self) -> Result<Vec<WorkItem>> {
        let exercises = queries::list_exercises_with_animation(&self.pool).await?;
        Ok(exercises
            .into_iter()
            .map(|e| WorkItem {
                exercise_id: e.exercise_id,
                remote_locator: e.animated_image_url,
                local_locator: e.local_animated_image,
            })
            .collect())
    }

    async fn record_local_animation(&self, exercise_id: i64, path: &Path) -> Result<()> {
        let path = path
            .to_str()
            .ok_or_else(|| FitTrackError::InvalidPath(path.display().to_string()))?;
        queries::set_local_animation(&self.pool, exercise_id, path).await
    }

    async fn clear_all_animation_paths(&self) -> Result<()> {
        queries::clear_all_local_animations(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::NewExercise;
    use crate::storage::Database;

    #[tokio::test]
    async fn sqlite_catalog_maps_exercises_to_work_items() {
        let db = Database::new_in_memory().await.unwrap();
        let id = queries::insert_exercise(
            db.pool(),
            &NewExercise::new("Lunge".to_string(), "legs".to_string())
                .with_animation("animations/lunge.gif".to_string()),
        )
        .await
        .unwrap();

        let catalog = SqliteAssetCatalog::new(db.pool().clone());

        let missing = catalog.list_missing_animations().await.unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].exercise_id, id);
        assert_eq!(missing[0].remote_locator.as_deref(), Some("animations/lunge.gif"));
        assert!(missing[0].local_locator.is_none());

        catalog
            .record_local_animation(id, Path::new("/media/exercise_1.gif"))
            .await
            .unwrap();

        let cached = catalog.list_cached_animations().await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(
            cached[0].local_locator.as_deref(),
            Some("/media/exercise_1.gif")
        );
        assert!(catalog.list_missing_animations().await.unwrap().is_empty());

        catalog.clear_all_animation_paths().await.unwrap();
        assert!(catalog.list_cached_animations().await.unwrap().is_empty());
    }
}
