//! End-to-end tests for the media synchronizer
//!
//! The CDN and filesystem collaborators are replaced with in-memory fakes;
//! the store side runs both as a fake and against a real in-memory SQLite
//! catalog.

use async_trait::async_trait;
use fittrack_core::error::{FitTrackError, Result};
use fittrack_core::storage::models::NewExercise;
use fittrack_core::storage::{queries, Database};
use fittrack_core::sync::{
    AssetCatalog, AssetHost, AssetTransfer, HttpTransfer, MediaSyncManager, ProgressCallback,
    SqliteAssetCatalog, SyncConfig, WorkItem,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Default)]
struct FakeCatalog {
    missing: Mutex<Vec<WorkItem>>,
    cached: Mutex<Vec<WorkItem>>,
    recorded: Mutex<Vec<(i64, PathBuf)>>,
    cleared: AtomicBool,
    list_fails: bool,
    clear_fails: bool,
}

#[async_trait]
impl AssetCatalog for FakeCatalog {
    async fn list_missing_animations(&self) -> Result<Vec<WorkItem>> {
        if self.list_fails {
            return Err(FitTrackError::QueryFailed("catalog offline".to_string()));
        }
        Ok(self.missing.lock().unwrap().clone())
    }

    async fn list_cached_animations(&self) -> Result<Vec<WorkItem>> {
        if self.list_fails {
            return Err(FitTrackError::QueryFailed("catalog offline".to_string()));
        }
        Ok(self.cached.lock().unwrap().clone())
    }

    async fn record_local_animation(&self, exercise_id: i64, path: &Path) -> Result<()> {
        self.recorded
            .lock()
            .unwrap()
            .push((exercise_id, path.to_path_buf()));
        Ok(())
    }

    async fn clear_all_animation_paths(&self) -> Result<()> {
        if self.clear_fails {
            return Err(FitTrackError::QueryFailed("clear rejected".to_string()));
        }
        self.cleared.store(true, Ordering::SeqCst);
        Ok(())
    }
}

struct FakeHost;

#[async_trait]
impl AssetHost for FakeHost {
    async fn resolve_download_url(&self, remote_locator: &str) -> Result<Url> {
        Url::parse(&format!("https://cdn.test/{}", remote_locator))
            .map_err(|_| FitTrackError::UrlResolutionFailed(remote_locator.to_string()))
    }
}

/// Transfer fake: any URL whose path contains "broken" fails to download
#[derive(Default)]
struct FakeTransfer {
    downloaded: Mutex<Vec<PathBuf>>,
    removed: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl AssetTransfer for FakeTransfer {
    async fn download(&self, url: &Url, path: &Path) -> Result<()> {
        if url.path().contains("broken") {
            return Err(FitTrackError::network_error("connection reset", true));
        }
        self.downloaded.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        self.removed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

fn remote_item(exercise_id: i64, locator: &str) -> WorkItem {
    WorkItem {
        exercise_id,
        remote_locator: Some(locator.to_string()),
        local_locator: None,
    }
}

fn cached_item(exercise_id: i64, local: &str) -> WorkItem {
    WorkItem {
        exercise_id,
        remote_locator: None,
        local_locator: Some(local.to_string()),
    }
}

fn progress_recorder() -> (ProgressCallback, Arc<Mutex<Vec<f64>>>) {
    let fractions: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fractions);
    let callback: ProgressCallback = Arc::new(move |f| sink.lock().unwrap().push(f));
    (callback, fractions)
}

fn manager_with(
    catalog: Arc<FakeCatalog>,
    transfer: Arc<FakeTransfer>,
    media_dir: PathBuf,
    concurrency: usize,
) -> MediaSyncManager {
    MediaSyncManager::new(
        catalog,
        Arc::new(FakeHost),
        transfer,
        SyncConfig::new(media_dir).with_concurrency(concurrency),
    )
}

#[tokio::test]
async fn download_collects_failures_and_reports_progress() {
    let catalog = Arc::new(FakeCatalog {
        missing: Mutex::new(vec![
            remote_item(1, "animations/squat.gif"),
            remote_item(2, "animations/broken.gif"),
            remote_item(3, "animations/plank.gif"),
        ]),
        ..Default::default()
    });
    let transfer = Arc::new(FakeTransfer::default());
    let dir = tempfile::tempdir().unwrap();
    let manager = manager_with(
        Arc::clone(&catalog),
        Arc::clone(&transfer),
        dir.path().to_path_buf(),
        2,
    );

    let (on_progress, fractions) = progress_recorder();
    let result = manager
        .download_all_animated_images(Some(on_progress))
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.failed_ids, vec![2]);

    // Progress fired once per item and ended at 1.0
    let fractions = fractions.lock().unwrap();
    assert_eq!(fractions.len(), 3);
    assert_eq!(*fractions.last().unwrap(), 1.0);

    // The two successful items were persisted and recorded; the failed one wasn't
    let mut recorded: Vec<i64> = catalog
        .recorded
        .lock()
        .unwrap()
        .iter()
        .map(|(id, _)| *id)
        .collect();
    recorded.sort_unstable();
    assert_eq!(recorded, vec![1, 3]);

    let downloaded = transfer.downloaded.lock().unwrap();
    assert_eq!(downloaded.len(), 2);
    assert!(downloaded
        .iter()
        .any(|p| p.ends_with("exercise_1.gif")));
}

#[tokio::test]
async fn download_with_empty_catalog_succeeds_silently() {
    let catalog = Arc::new(FakeCatalog::default());
    let transfer = Arc::new(FakeTransfer::default());
    let dir = tempfile::tempdir().unwrap();
    let manager = manager_with(catalog, transfer, dir.path().to_path_buf(), 4);

    let (on_progress, fractions) = progress_recorder();
    let result = manager
        .download_all_animated_images(Some(on_progress))
        .await
        .unwrap();

    assert!(result.success);
    assert!(result.failed_ids.is_empty());
    assert!(fractions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failing_work_item_query_fails_the_whole_call() {
    let catalog = Arc::new(FakeCatalog {
        list_fails: true,
        ..Default::default()
    });
    let transfer = Arc::new(FakeTransfer::default());
    let dir = tempfile::tempdir().unwrap();
    let manager = manager_with(catalog, Arc::clone(&transfer), dir.path().to_path_buf(), 2);

    let err = manager.download_all_animated_images(None).await.unwrap_err();
    assert!(matches!(err, FitTrackError::QueryFailed(_)));
    assert!(transfer.downloaded.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_files_then_clears_mappings_in_bulk() {
    let catalog = Arc::new(FakeCatalog {
        cached: Mutex::new(vec![
            cached_item(1, "/media/exercise_1.gif"),
            cached_item(2, "/media/exercise_2.gif"),
        ]),
        ..Default::default()
    });
    let transfer = Arc::new(FakeTransfer::default());
    let dir = tempfile::tempdir().unwrap();
    let manager = manager_with(
        Arc::clone(&catalog),
        Arc::clone(&transfer),
        dir.path().to_path_buf(),
        2,
    );

    let (on_progress, fractions) = progress_recorder();
    let result = manager
        .delete_all_animated_images(Some(on_progress))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(transfer.removed.lock().unwrap().len(), 2);
    assert!(catalog.cleared.load(Ordering::SeqCst));
    assert_eq!(*fractions.lock().unwrap().last().unwrap(), 1.0);
}

#[tokio::test]
async fn rejected_bulk_clear_fails_despite_successful_deletes() {
    let catalog = Arc::new(FakeCatalog {
        cached: Mutex::new(vec![cached_item(1, "/media/exercise_1.gif")]),
        clear_fails: true,
        ..Default::default()
    });
    let transfer = Arc::new(FakeTransfer::default());
    let dir = tempfile::tempdir().unwrap();
    let manager = manager_with(catalog, Arc::clone(&transfer), dir.path().to_path_buf(), 2);

    let err = manager.delete_all_animated_images(None).await.unwrap_err();
    assert!(matches!(err, FitTrackError::QueryFailed(_)));
    // The per-item delete did run before the clear rejected
    assert_eq!(transfer.removed.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_already_absent_files_is_not_a_failure() {
    // Real sqlite catalog + real filesystem transfer, no network involved
    let db = Database::new_in_memory().await.unwrap();
    let id = queries::insert_exercise(
        db.pool(),
        &NewExercise::new("Lunge".to_string(), "legs".to_string())
            .with_animation("animations/lunge.gif".to_string()),
    )
    .await
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let stale_path = dir.path().join("exercise_1.gif");
    // Record a mapping whose file never existed on disk
    queries::set_local_animation(db.pool(), id, stale_path.to_str().unwrap())
        .await
        .unwrap();

    let manager = MediaSyncManager::new(
        Arc::new(SqliteAssetCatalog::new(db.pool().clone())),
        Arc::new(FakeHost),
        Arc::new(HttpTransfer::new()),
        SyncConfig::new(dir.path().to_path_buf()),
    );

    let result = manager.delete_all_animated_images(None).await.unwrap();
    assert!(result.success);
    assert!(result.failed_ids.is_empty());

    // The mapping is gone; the exercise is downloadable again
    assert!(queries::list_exercises_with_animation(db.pool())
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        queries::list_exercises_missing_animation(db.pool())
            .await
            .unwrap()
            .len(),
        1
    );
}
