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


//! FitTrack native core
//!
//! The shared Rust core of the FitTrack mobile app. The UI layer owns
//! screens, navigation and charts; this crate owns everything underneath:
//!
//! - the local SQLite store (exercises, plans, sessions, logged sets)
//! - database bootstrap and premade-plan seeding on first launch
//! - the bounded-concurrency media synchronizer that downloads and
//!   deletes exercise animation files with fractional progress reporting

pub mod error;
pub mod storage;
pub mod sync;

// Re-export commonly used types
pub use error::{FitTrackError, Result};
pub use storage::{Database, DatabaseStats};
pub use sync::{BatchResult, MediaSyncManager, ProgressCallback, SyncConfig, WorkItem};
