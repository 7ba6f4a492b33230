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


//! Database query functions
//!
//! Repository-style free functions over a `&SqlitePool`. All operations are
//! async and individually atomic; multi-step flows that need transactional
//! behavior open their own transaction.

use crate::error::Result;
use crate::storage::models::*;
use chrono::Utc;
use sqlx::SqlitePool;

// ============================================================================
// EXERCISE QUERIES
// ============================================================================

/// Insert a new exercise, returning its id
pub async fn insert_exercise(pool: &SqlitePool, exercise: &NewExercise) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO Exercises (
            name, muscle_group, equipment, description, animated_image_url, created_at
        ) VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&exercise.name)
    .bind(&exercise.muscle_group)
    .bind(&exercise.equipment)
    .bind(&exercise.description)
    .bind(&exercise.animated_image_url)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find exercise by id
pub async fn find_exercise_by_id(pool: &SqlitePool, exercise_id: i64) -> Result<Option<Exercise>> {
    let exercise =
        sqlx::query_as::<_, Exercise>("SELECT * FROM Exercises WHERE exercise_id = ?")
            .bind(exercise_id)
            .fetch_optional(pool)
            .await?;

    Ok(exercise)
}

/// Find exercise by name
pub async fn find_exercise_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Exercise>> {
    let exercise = sqlx::query_as::<_, Exercise>("SELECT * FROM Exercises WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(exercise)
}

/// List the full exercise catalog, alphabetically
pub async fn list_exercises(pool: &SqlitePool) -> Result<Vec<Exercise>> {
    let exercises = sqlx::query_as::<_, Exercise>("SELECT * FROM Exercises ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(exercises)
}

/// List exercises for one muscle group, alphabetically
pub async fn list_exercises_by_muscle_group(
    pool: &SqlitePool,
    muscle_group: &str,
) -> Result<Vec<Exercise>> {
    let exercises = sqlx::query_as::<_, Exercise>(
        "SELECT * FROM Exercises WHERE muscle_group = ? ORDER BY name",
    )
    .bind(muscle_group)
    .fetch_all(pool)
    .await?;

    Ok(exercises)
}

/// List exercises that have a remote animation but no local copy yet
///
/// This is the work-item source for the download direction of the media
/// synchronizer. Returns an empty list (not an error) when nothing is missing.
pub async fn list_exercises_missing_animation(pool: &SqlitePool) -> Result<Vec<Exercise>> {
    let exercises = sqlx::query_as::<_, Exercise>(
        r#"
        SELECT * FROM Exercises
        WHERE animated_image_url IS NOT NULL
          AND local_animated_image IS NULL
        ORDER BY exercise_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(exercises)
}

/// List exercises that currently have a local animation file recorded
pub async fn list_exercises_with_animation(pool: &SqlitePool) -> Result<Vec<Exercise>> {
    let exercises = sqlx::query_as::<_, Exercise>(
        r#"
        SELECT * FROM Exercises
        WHERE local_animated_image IS NOT NULL
        ORDER BY exercise_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(exercises)
}

/// Record the local animation path for one exercise
pub async fn set_local_animation(pool: &SqlitePool, exercise_id: i64, path: &str) -> Result<()> {
    sqlx::query("UPDATE Exercises SET local_animated_image = ? WHERE exercise_id = ?")
        .bind(path)
        .bind(exercise_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Clear the local animation path for every exercise
///
/// Intentionally unscoped: this resets the whole catalog's local mappings,
/// not any particular subset.
pub async fn clear_all_local_animations(pool: &SqlitePool) -> Result<()> {
    sqlx::query("UPDATE Exercises SET local_animated_image = NULL")
        .execute(pool)
        .await?;

    Ok(())
}

// ============================================================================
// WORKOUT PLAN QUERIES
// ============================================================================

/// Insert a new workout plan, returning its id
pub async fn insert_plan(pool: &SqlitePool, plan: &NewWorkoutPlan) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO WorkoutPlans (name, description, is_premade, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&plan.name)
    .bind(&plan.description)
    .bind(plan.is_premade)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find plan by name
pub async fn find_plan_by_name(pool: &SqlitePool, name: &str) -> Result<Option<WorkoutPlan>> {
    let plan = sqlx::query_as::<_, WorkoutPlan>("SELECT * FROM WorkoutPlans WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(plan)
}

/// List all plans, premade first then by name
pub async fn list_plans(pool: &SqlitePool) -> Result<Vec<WorkoutPlan>> {
    let plans = sqlx::query_as::<_, WorkoutPlan>(
        "SELECT * FROM WorkoutPlans ORDER BY is_premade DESC, name",
    )
    .fetch_all(pool)
    .await?;

    Ok(plans)
}

/// Append an exercise entry to a plan, returning the entry id
pub async fn add_plan_exercise(pool: &SqlitePool, entry: &NewPlanExercise) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO PlanExercises (
            plan_id, exercise_id, position, target_sets, target_reps, rest_seconds
        ) VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.plan_id)
    .bind(entry.exercise_id)
    .bind(entry.position)
    .bind(entry.target_sets)
    .bind(entry.target_reps)
    .bind(entry.rest_seconds)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List the entries of a plan in position order
pub async fn list_plan_exercises(pool: &SqlitePool, plan_id: i64) -> Result<Vec<PlanExercise>> {
    let entries = sqlx::query_as::<_, PlanExercise>(
        "SELECT * FROM PlanExercises WHERE plan_id = ? ORDER BY position",
    )
    .bind(plan_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

// ============================================================================
// SESSION QUERIES
// ============================================================================

/// Start a new workout session, returning its id
pub async fn start_session(pool: &SqlitePool, plan_id: Option<i64>) -> Result<i64> {
    let result =
        sqlx::query("INSERT INTO WorkoutSessions (plan_id, started_at) VALUES (?, ?)")
            .bind(plan_id)
            .bind(Utc::now())
            .execute(pool)
            .await?;

    Ok(result.last_insert_rowid())
}

/// Log one completed set, returning its id
pub async fn log_set(pool: &SqlitePool, set: &NewSessionSet) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO SessionSets (
            session_id, exercise_id, set_number, reps, weight_kg, completed_at
        ) VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(set.session_id)
    .bind(set.exercise_id)
    .bind(set.set_number)
    .bind(set.reps)
    .bind(set.weight_kg)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Mark a session finished, optionally attaching notes
pub async fn finish_session(
    pool: &SqlitePool,
    session_id: i64,
    notes: Option<&str>,
) -> Result<()> {
    sqlx::query("UPDATE WorkoutSessions SET finished_at = ?, notes = ? WHERE session_id = ?")
        .bind(Utc::now())
        .bind(notes)
        .bind(session_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// List recent sessions, newest first
pub async fn list_sessions(pool: &SqlitePool, limit: i64) -> Result<Vec<WorkoutSession>> {
    let sessions = sqlx::query_as::<_, WorkoutSession>(
        "SELECT * FROM WorkoutSessions ORDER BY started_at DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

/// List the sets logged in a session, in logging order
pub async fn list_session_sets(pool: &SqlitePool, session_id: i64) -> Result<Vec<SessionSet>> {
    let sets = sqlx::query_as::<_, SessionSet>(
        "SELECT * FROM SessionSets WHERE session_id = ? ORDER BY set_id",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(sets)
}

// ============================================================================
// APP META QUERIES
// ============================================================================

/// Read a marker value
pub async fn get_meta(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value: Option<String> = sqlx::query_scalar("SELECT value FROM AppMeta WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(value)
}

/// Write a marker value, replacing any previous one
pub async fn set_meta(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query("INSERT OR REPLACE INTO AppMeta (key, value) VALUES (?, ?)")
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;

    Ok(())
}

// ============================================================================
// STATS QUERIES
// ============================================================================

/// Count all rows in a table-valued query, used by database stats
pub(crate) async fn count_scalar(pool: &SqlitePool, sql: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(sql).fetch_one(pool).await?;
    Ok(count)
}
