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


//! Database entity models
//!
//! Row types derive `sqlx::FromRow` for direct query mapping. For inserts
//! a separate `New*` type carries only the caller-supplied fields; ids and
//! timestamps are filled in by the query layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One exercise in the catalog
///
/// `animated_image_url` is the remote locator of the demonstration
/// animation; `local_animated_image` is the on-device path once the
/// media synchronizer has fetched it. Either may be absent.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise_id: i64,
    pub name: String,
    pub muscle_group: String,
    pub equipment: Option<String>,
    pub description: String,
    pub animated_image_url: Option<String>,
    pub local_animated_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: String,
    pub equipment: Option<String>,
    pub description: String,
    pub animated_image_url: Option<String>,
}

impl NewExercise {
    pub fn new(name: String, muscle_group: String) -> Self {
        Self {
            name,
            muscle_group,
            equipment: None,
            description: String::new(),
            animated_image_url: None,
        }
    }

    pub fn with_animation(mut self, remote_locator: String) -> Self {
        self.animated_image_url = Some(remote_locator);
        self
    }
}

/// A workout plan (user-built or premade)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub plan_id: i64,
    pub name: String,
    pub description: String,
    pub is_premade: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutPlan {
    pub name: String,
    pub description: String,
    pub is_premade: bool,
}

/// One ordered entry of a workout plan
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlanExercise {
    pub plan_exercise_id: i64,
    pub plan_id: i64,
    pub exercise_id: i64,
    pub position: i64,
    pub target_sets: i64,
    pub target_reps: i64,
    pub rest_seconds: i64,
}

/// Insert payload for a plan entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlanExercise {
    pub plan_id: i64,
    pub exercise_id: i64,
    pub position: i64,
    pub target_sets: i64,
    pub target_reps: i64,
    pub rest_seconds: i64,
}

/// One started (possibly still running) workout session
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub session_id: i64,
    pub plan_id: Option<i64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// One logged set within a session
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SessionSet {
    pub set_id: i64,
    pub session_id: i64,
    pub exercise_id: i64,
    pub set_number: i64,
    pub reps: i64,
    pub weight_kg: f64,
    pub completed_at: DateTime<Utc>,
}

/// Insert payload for a logged set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionSet {
    pub session_id: i64,
    pub exercise_id: i64,
    pub set_number: i64,
    pub reps: i64,
    pub weight_kg: f64,
}
