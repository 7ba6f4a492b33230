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


//! App data bootstrap
//!
//! First-launch initialization for the app's data directory:
//!
//! 1. copy the bundled exercise database into place when no user database
//!    exists yet (the app ships a prefilled catalog as an asset)
//! 2. open the database, running schema migrations
//! 3. seed premade workout plans, guarded by a version marker so the seed
//!    runs once per seed version rather than on every launch
//!
//! The marker is written after the seed rows, so a crash mid-seed is
//! retried on the next launch.

use crate::error::{FitTrackError, Result};
use crate::storage::models::{NewExercise, NewPlanExercise, NewWorkoutPlan};
use crate::storage::{queries, Database};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Current premade-plan seed version. Bump when the shipped plans change.
const PREMADE_PLANS_VERSION: i64 = 1;

/// Marker key in AppMeta guarding the premade-plan seed
const PREMADE_PLANS_KEY: &str = "premade_plans_version";

/// File name of the user database inside the app data directory
const DATABASE_FILE: &str = "fittrack.db";

/// Initialize the app data directory and return the opened database
///
/// `bundled_db` points at the read-only database asset shipped with the
/// app package, if any. It is only consulted on fresh installs; an
/// existing user database is never overwritten.
pub async fn init_app_data(data_dir: &Path, bundled_db: Option<&Path>) -> Result<Database> {
    tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
        FitTrackError::FileIoError(format!(
            "Failed to create app data directory {}: {}",
            data_dir.display(),
            e
        ))
    })?;

    let db_path = data_dir.join(DATABASE_FILE);

    if !db_path.exists() {
        if let Some(bundle) = bundled_db {
            if bundle.exists() {
                tokio::fs::copy(bundle, &db_path).await.map_err(|e| {
                    FitTrackError::FileIoError(format!(
                        "Failed to copy bundled database {}: {}",
                        bundle.display(),
                        e
                    ))
                })?;
                info!(bundle = %bundle.display(), "copied bundled database");
            }
        }
    }

    let db = Database::new(&db_path).await?;
    seed_premade_plans(db.pool()).await?;

    Ok(db)
}

/// Seed premade plans unless the current seed version is already applied
pub async fn seed_premade_plans(pool: &SqlitePool) -> Result<()> {
    let applied = queries::get_meta(pool, PREMADE_PLANS_KEY)
        .await?
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(0);

    if applied >= PREMADE_PLANS_VERSION {
        return Ok(());
    }

    insert_seed_rows(pool)
        .await
        .map_err(|e| FitTrackError::SeedFailed(e.to_string()))?;

    queries::set_meta(pool, PREMADE_PLANS_KEY, &PREMADE_PLANS_VERSION.to_string()).await?;
    info!(version = PREMADE_PLANS_VERSION, "seeded premade plans");

    Ok(())
}

async fn insert_seed_rows(pool: &SqlitePool) -> Result<()> {
    let full_body = [
        ("Barbell Squat", "legs", "animations/barbell_squat.gif", 3, 8),
        ("Push-Up", "chest", "animations/push_up.gif", 3, 12),
        ("Bent-Over Row", "back", "animations/bent_over_row.gif", 3, 10),
        ("Plank", "core", "animations/plank.gif", 3, 1),
    ];
    seed_plan(
        pool,
        "Full Body Foundation",
        "Three weekly sessions covering every major muscle group.",
        &full_body,
    )
    .await?;

    let push_pull_legs = [
        ("Bench Press", "chest", "animations/bench_press.gif", 4, 8),
        ("Overhead Press", "shoulders", "animations/overhead_press.gif", 3, 10),
        ("Pull-Up", "back", "animations/pull_up.gif", 4, 6),
        ("Bent-Over Row", "back", "animations/bent_over_row.gif", 3, 10),
        ("Barbell Squat", "legs", "animations/barbell_squat.gif", 4, 8),
        ("Romanian Deadlift", "legs", "animations/romanian_deadlift.gif", 3, 10),
    ];
    seed_plan(
        pool,
        "Push Pull Legs",
        "Classic six-day split for intermediate lifters.",
        &push_pull_legs,
    )
    .await?;

    Ok(())
}

/// Insert one premade plan with its entries, skipping it if already present
async fn seed_plan(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    entries: &[(&str, &str, &str, i64, i64)],
) -> Result<()> {
    if queries::find_plan_by_name(pool, name).await?.is_some() {
        return Ok(());
    }

    let plan_id = queries::insert_plan(
        pool,
        &NewWorkoutPlan {
            name: name.to_string(),
            description: description.to_string(),
            is_premade: true,
        },
    )
    .await?;

    for (position, (exercise_name, muscle_group, animation, sets, reps)) in
        entries.iter().enumerate()
    {
        let exercise_id =
            ensure_exercise(pool, exercise_name, muscle_group, animation).await?;

        queries::add_plan_exercise(
            pool,
            &NewPlanExercise {
                plan_id,
                exercise_id,
                position: position as i64 + 1,
                target_sets: *sets,
                target_reps: *reps,
                rest_seconds: 90,
            },
        )
        .await?;
    }

    Ok(())
}

/// Find an exercise by name or insert it with its animation locator
async fn ensure_exercise(
    pool: &SqlitePool,
    name: &str,
    muscle_group: &str,
    animation: &str,
) -> Result<i64> {
    if let Some(existing) = queries::find_exercise_by_name(pool, name).await? {
        return Ok(existing.exercise_id);
    }

    let exercise = NewExercise::new(name.to_string(), muscle_group.to_string())
        .with_animation(animation.to_string());
    queries::insert_exercise(pool, &exercise).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeding_twice_inserts_once() {
        let db = Database::new_in_memory().await.unwrap();

        seed_premade_plans(db.pool()).await.unwrap();
        seed_premade_plans(db.pool()).await.unwrap();

        let plans = queries::list_plans(db.pool()).await.unwrap();
        assert_eq!(plans.len(), 2);
        assert!(plans.iter().all(|p| p.is_premade));

        // Shared exercises are inserted once even though both plans use them
        let squats: Vec<_> = queries::list_exercises(db.pool())
            .await
            .unwrap()
            .into_iter()
            .filter(|e| e.name == "Barbell Squat")
            .collect();
        assert_eq!(squats.len(), 1);
    }

    #[tokio::test]
    async fn seeded_exercises_carry_remote_animations() {
        let db = Database::new_in_memory().await.unwrap();
        seed_premade_plans(db.pool()).await.unwrap();

        let missing = queries::list_exercises_missing_animation(db.pool())
            .await
            .unwrap();
        assert!(!missing.is_empty());
        assert!(missing
            .iter()
            .all(|e| e.animated_image_url.as_deref().unwrap().starts_with("animations/")));
    }

    #[tokio::test]
    async fn init_app_data_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();

        let db = init_app_data(dir.path(), None).await.unwrap();
        assert!(dir.path().join(DATABASE_FILE).exists());

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.plans, 2);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn fresh_install_copies_bundled_database() {
        let bundle_dir = tempfile::tempdir().unwrap();
        let bundle_path = bundle_dir.path().join("bundle.db");

        // Build a "bundled" database carrying one extra exercise
        {
            let bundle = Database::new(&bundle_path).await.unwrap();
            queries::insert_exercise(
                bundle.pool(),
                &NewExercise::new("Bundled Curl".to_string(), "arms".to_string()),
            )
            .await
            .unwrap();
            bundle.close().await.unwrap();
        }

        let data_dir = tempfile::tempdir().unwrap();
        let db = init_app_data(data_dir.path(), Some(&bundle_path))
            .await
            .unwrap();

        let found = queries::find_exercise_by_name(db.pool(), "Bundled Curl")
            .await
            .unwrap();
        assert!(found.is_some());

        db.close().await.unwrap();
    }
}
