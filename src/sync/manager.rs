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


//! Media synchronization batches
//!
//! The app's settings screen offers "download all exercise animations"
//! and "free up space". Both are batch operations over the exercise
//! catalog: a fixed number of concurrent workers drains the item list,
//! progress is reported fractionally after every item, and per-item
//! failures are collected instead of aborting the batch.

use crate::error::{FitTrackError, Result};
use crate::storage::Database;
use crate::sync::catalog::{AssetCatalog, SqliteAssetCatalog};
use crate::sync::host::{AssetHost, CdnAssetHost};
use crate::sync::pool::{run_batch, BatchResult};
use crate::sync::progress::ProgressCallback;
use crate::sync::transfer::{AssetTransfer, HttpTransfer};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Default number of concurrent transfer workers
const DEFAULT_CONCURRENCY: usize = 4;

/// Media synchronizer configuration
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory holding downloaded animation files
    pub media_dir: PathBuf,

    /// Maximum concurrent transfers within one batch
    pub concurrency: usize,
}

impl SyncConfig {
    pub fn new(media_dir: PathBuf) -> Self {
        Self {
            media_dir,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

/// Batch synchronizer for exercise animations
///
/// Collaborators are injected as trait objects so tests can substitute
/// in-memory fakes for the store, the CDN and the filesystem.
pub struct MediaSyncManager {
    catalog: Arc<dyn AssetCatalog>,
    host: Arc<dyn AssetHost>,
    transfer: Arc<dyn AssetTransfer>,
    config: SyncConfig,
}

impl MediaSyncManager {
    pub fn new(
        catalog: Arc<dyn AssetCatalog>,
        host: Arc<dyn AssetHost>,
        transfer: Arc<dyn AssetTransfer>,
        config: SyncConfig,
    ) -> Self {
        Self {
            catalog,
            host,
            transfer,
            config,
        }
    }

    /// Wire the production collaborators: SQLite catalog, CDN host, HTTP transfer
    pub fn with_database(db: &Database, cdn_base_url: Url, config: SyncConfig) -> Self {
        Self::new(
            Arc::new(SqliteAssetCatalog::new(db.pool().clone())),
            Arc::new(CdnAssetHost::new(cdn_base_url)),
            Arc::new(HttpTransfer::new()),
            config,
        )
    }

    /// Download every missing exercise animation
    ///
    /// Per item: resolve the remote locator, stream the file to
    /// `exercise_<id>.<ext>` under the media directory, then record the
    /// mapping in the store. A failing item lands in `failed_ids` and the
    /// batch continues; a failing work-item query fails the whole call.
    pub async fn download_all_animated_images(
        &self,
        on_progress: Option<ProgressCallback>,
    ) -> Result<BatchResult> {
        let items = self.catalog.list_missing_animations().await?;
        info!(total = items.len(), "starting animation download batch");

        self.ensure_media_dir().await?;

        let catalog = Arc::clone(&self.catalog);
        let host = Arc::clone(&self.host);
        let transfer = Arc::clone(&self.transfer);
        let media_dir = self.config.media_dir.clone();

        let result = run_batch(items, self.config.concurrency, on_progress, move |item| {
            let catalog = Arc::clone(&catalog);
            let host = Arc::clone(&host);
            let transfer = Arc::clone(&transfer);
            let media_dir = media_dir.clone();

            async move {
                let locator = item.remote_locator.ok_or_else(|| {
                    FitTrackError::InvalidState(format!(
                        "exercise {} has no remote animation",
                        item.exercise_id
                    ))
                })?;

                let url = host.resolve_download_url(&locator).await?;
                let path = media_dir.join(local_file_name(item.exercise_id, &locator));
                transfer.download(&url, &path).await?;
                catalog.record_local_animation(item.exercise_id, &path).await?;
                Ok(())
            }
        })
        .await;

        info!(
            failed = result.failed_ids.len(),
            success = result.success,
            "animation download batch finished"
        );
        Ok(result)
    }

    /// Delete every cached exercise animation
    ///
    /// Per item: remove the local file (absence is not an error). After
    /// all items settle, the stored mappings are cleared in one bulk call
    /// covering the entire catalog, not only the items of this batch. A
    /// failing bulk clear fails the whole call even when every per-item
    /// delete succeeded; the next download run re-syncs any stale rows.
    pub async fn delete_all_animated_images(
        &self,
        on_progress: Option<ProgressCallback>,
    ) -> Result<BatchResult> {
        let items = self.catalog.list_cached_animations().await?;
        info!(total = items.len(), "starting animation delete batch");

        let transfer = Arc::clone(&self.transfer);

        let result = run_batch(items, self.config.concurrency, on_progress, move |item| {
            let transfer = Arc::clone(&transfer);

            async move {
                let Some(local) = item.local_locator else {
                    return Ok(());
                };
                transfer.remove(Path::new(&local)).await
            }
        })
        .await;

        self.catalog.clear_all_animation_paths().await?;

        info!(
            failed = result.failed_ids.len(),
            success = result.success,
            "animation delete batch finished"
        );
        Ok(result)
    }

    async fn ensure_media_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.config.media_dir)
            .await
            .map_err(|e| {
                FitTrackError::MediaDirectoryUnavailable(format!(
                    "{}: {}",
                    self.config.media_dir.display(),
                    e
                ))
            })
    }
}

/// Deterministic local file name for one exercise's animation
///
/// The extension follows the remote locator, falling back to `gif` when
/// the locator carries none.
fn local_file_name(exercise_id: i64, remote_locator: &str) -> String {
    let extension = remote_locator
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(char::is_alphanumeric))
        .unwrap_or("gif");

    format!("exercise_{}.{}", exercise_id, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_locator_extension() {
        assert_eq!(
            local_file_name(12, "animations/barbell_squat.gif"),
            "exercise_12.gif"
        );
        assert_eq!(
            local_file_name(3, "https://cdn.example.com/squat.webp"),
            "exercise_3.webp"
        );
    }

    #[test]
    fn file_name_falls_back_to_gif() {
        assert_eq!(local_file_name(5, "animations/no_extension"), "exercise_5.gif");
        assert_eq!(local_file_name(6, "weird.name/trailing."), "exercise_6.gif");
        assert_eq!(
            local_file_name(7, "squat.gif?token=abc123%20"),
            "exercise_7.gif"
        );
    }
}
