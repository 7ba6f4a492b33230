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


//! Database migrations
//!
//! # Migration Strategy
//! Since sqlx's compile-time migration system requires a build-time database
//! connection, migrations run as SQL at startup for mobile compatibility.
//! Applied migrations are tracked in the `_migrations` table.

use crate::error::Result;
use sqlx::{Executor, SqlitePool};

/// Run all database migrations
///
/// Creates the schema and applies any pending migrations in order.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    create_migrations_table(pool).await?;

    run_migration(pool, 1, "initial_schema", create_initial_schema(pool)).await?;

    Ok(())
}

/// Create migrations tracking table
async fn create_migrations_table(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
        CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    Ok(())
}

/// Run a single migration if it hasn't been applied yet
async fn run_migration(
    pool: &SqlitePool,
    id: i32,
    name: &str,
    migration_fn: impl std::future::Future<Output = Result<()>>,
) -> Result<()> {
    let applied: Option<i32> = sqlx::query_scalar("SELECT id FROM _migrations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if applied.is_some() {
        return Ok(());
    }

    migration_fn.await?;

    sqlx::query("INSERT INTO _migrations (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

/// Create initial database schema
async fn create_initial_schema(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
-- Exercise catalog. The animated_image_url / local_animated_image pair
-- is the remote/local locator consumed by the media synchronizer.
CREATE TABLE IF NOT EXISTS Exercises (
    exercise_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    muscle_group TEXT NOT NULL,
    equipment TEXT,
    description TEXT NOT NULL DEFAULT '',
    animated_image_url TEXT,
    local_animated_image TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_exercises_muscle_group
    ON Exercises (muscle_group);

-- Workout plans, both user-built and premade (seeded).
CREATE TABLE IF NOT EXISTS WorkoutPlans (
    plan_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    is_premade INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Ordered entries of a plan with set/rep targets.
CREATE TABLE IF NOT EXISTS PlanExercises (
    plan_exercise_id INTEGER PRIMARY KEY AUTOINCREMENT,
    plan_id INTEGER NOT NULL REFERENCES WorkoutPlans (plan_id) ON DELETE CASCADE,
    exercise_id INTEGER NOT NULL REFERENCES Exercises (exercise_id),
    position INTEGER NOT NULL,
    target_sets INTEGER NOT NULL,
    target_reps INTEGER NOT NULL,
    rest_seconds INTEGER NOT NULL DEFAULT 90
);

CREATE INDEX IF NOT EXISTS idx_plan_exercises_plan
    ON PlanExercises (plan_id, position);

-- One row per started workout. finished_at stays NULL while running.
CREATE TABLE IF NOT EXISTS WorkoutSessions (
    session_id INTEGER PRIMARY KEY AUTOINCREMENT,
    plan_id INTEGER REFERENCES WorkoutPlans (plan_id) ON DELETE SET NULL,
    started_at TEXT NOT NULL,
    finished_at TEXT,
    notes TEXT
);

-- Logged sets within a session.
CREATE TABLE IF NOT EXISTS SessionSets (
    set_id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id INTEGER NOT NULL REFERENCES WorkoutSessions (session_id) ON DELETE CASCADE,
    exercise_id INTEGER NOT NULL REFERENCES Exercises (exercise_id),
    set_number INTEGER NOT NULL,
    reps INTEGER NOT NULL,
    weight_kg REAL NOT NULL,
    completed_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_session_sets_session
    ON SessionSets (session_id, set_number);

-- Key/value markers (seed versions, schema hints).
CREATE TABLE IF NOT EXISTS AppMeta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
        "#,
    )
    .await?;

    Ok(())
}
