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


//! Object-storage collaborator of the media synchronizer
//!
//! Exercise rows store a remote locator, not a full URL; the asset host
//! turns the locator into something fetchable. The production host joins
//! locators onto the CDN base URL.

use crate::error::{FitTrackError, Result};
use async_trait::async_trait;
use url::Url;

/// Resolves a remote locator to a fetchable download URL
#[async_trait]
pub trait AssetHost: Send + Sync {
    async fn resolve_download_url(&self, remote_locator: &str) -> Result<Url>;
}

/// Asset host backed by the app's media CDN
#[derive(Debug, Clone)]
pub struct CdnAssetHost {
    base_url: Url,
}

impl CdnAssetHost {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl AssetHost for CdnAssetHost {
    async fn resolve_download_url(&self, remote_locator: &str) -> Result<Url> {
        // Absolute locators (legacy rows) pass through unchanged
        if let Ok(url) = Url::parse(remote_locator) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
            return Err(FitTrackError::InvalidDownloadUrl(remote_locator.to_string()));
        }

        self.base_url
            .join(remote_locator)
            .map_err(|_| FitTrackError::UrlResolutionFailed(remote_locator.to_string()))
    }
}
