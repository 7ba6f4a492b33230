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


//! Exercise animation synchronization
//!
//! Batch download and deletion of exercise animation files with bounded
//! concurrency, fractional progress reporting and per-item failure
//! collection. The synchronizer talks to three injected collaborators:
//! the store catalog ([`catalog::AssetCatalog`]), the CDN
//! ([`host::AssetHost`]) and the filesystem ([`transfer::AssetTransfer`]).

pub mod catalog;
pub mod host;
pub mod manager;
pub mod pool;
pub mod progress;
pub mod transfer;

// Re-export commonly used types
pub use catalog::{AssetCatalog, SqliteAssetCatalog};
pub use host::{AssetHost, CdnAssetHost};
pub use manager::{MediaSyncManager, SyncConfig};
pub use pool::{run_batch, BatchResult, WorkItem};
pub use progress::{ProgressCallback, ProgressCounter};
pub use transfer::{AssetTransfer, HttpTransfer};
