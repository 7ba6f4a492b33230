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


//! Database storage and models
//!
//! This module handles all database operations using SQLite via sqlx.
//!
//! # Database Schema
//! - Exercises: exercise catalog with remote/local animation references
//! - WorkoutPlans: user-built and premade workout plans
//! - PlanExercises: ordered plan entries with set/rep targets
//! - WorkoutSessions: one record per started workout
//! - SessionSets: logged sets within a session
//! - AppMeta: key/value markers (seed versions, etc.)
//!
//! # Usage Example
//! ```no_run
//! use fittrack_core::storage::{Database, queries, models::NewExercise};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new("./fittrack.db").await?;
//!
//! let exercise = NewExercise::new("Barbell Squat".to_string(), "legs".to_string());
//! let exercise_id = queries::insert_exercise(db.pool(), &exercise).await?;
//!
//! let found = queries::find_exercise_by_id(db.pool(), exercise_id).await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

// Re-export commonly used types
pub use bootstrap::init_app_data;
pub use database::{Database, DatabaseStats};
pub use models::{
    Exercise, NewExercise, NewPlanExercise, NewSessionSet, NewWorkoutPlan, PlanExercise,
    SessionSet, WorkoutPlan, WorkoutSession,
};
