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


//! Filesystem collaborator of the media synchronizer
//!
//! Streams animation files from the CDN to disk and removes cached
//! copies. Timeouts are the HTTP client's defaults; the synchronizer
//! imposes none of its own.

use crate::error::{FitTrackError, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

/// Moves animation bytes between the network and local storage
#[async_trait]
pub trait AssetTransfer: Send + Sync {
    /// Fetch `url` and persist the body at `path`
    async fn download(&self, url: &Url, path: &Path) -> Result<()>;

    /// Remove a cached file; a missing file is not an error
    async fn remove(&self, path: &Path) -> Result<()>;
}

/// HTTP-backed transfer used in production
#[derive(Debug, Clone, Default)]
pub struct HttpTransfer {
    client: Client,
}

impl HttpTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetTransfer for HttpTransfer {
    async fn download(&self, url: &Url, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FitTrackError::UnexpectedStatusCode {
                status_code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let file = File::create(path).await?;
        let mut writer = BufWriter::new(file);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                FitTrackError::network_error(format!("download interrupted: {}", e), true)
            })?;
            writer.write_all(&chunk).await?;
        }

        writer.flush().await?;
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FitTrackError::FileIoError(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
