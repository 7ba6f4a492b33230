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


use clap::{Parser, Subcommand};
use fittrack_core::storage::init_app_data;
use fittrack_core::sync::{MediaSyncManager, ProgressCallback, SyncConfig};
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

#[derive(Parser)]
#[command(name = "fittrack-cli")]
#[command(about = "FitTrack CLI - Desktop testing tool", long_about = None)]
struct Cli {
    /// App data directory (database + media cache)
    #[arg(long, default_value = "./fittrack-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the app data directory and seed premade plans
    Init {
        /// Optional bundled database to copy on fresh install
        #[arg(long)]
        bundle: Option<PathBuf>,
    },
    /// Download all missing exercise animations
    SyncMedia {
        /// CDN base URL for animation assets
        #[arg(long, default_value = "https://media.fittrack.example/assets/")]
        cdn: Url,

        /// Concurrent downloads
        #[arg(long, default_value_t = 4)]
        concurrency: usize,
    },
    /// Delete all cached exercise animations
    ClearMedia {
        /// CDN base URL (unused for deletion, kept for symmetric wiring)
        #[arg(long, default_value = "https://media.fittrack.example/assets/")]
        cdn: Url,
    },
    /// Print database row counts
    Stats,
}

fn progress_printer() -> ProgressCallback {
    Arc::new(|fraction| {
        println!("  {:>5.1}%", fraction * 100.0);
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let media_dir = cli.data_dir.join("media");

    match cli.command {
        Commands::Init { bundle } => {
            let db = init_app_data(&cli.data_dir, bundle.as_deref()).await?;
            let stats = db.stats().await?;
            println!(
                "Initialized {} ({} exercises, {} plans)",
                cli.data_dir.display(),
                stats.exercises,
                stats.plans
            );
        }
        Commands::SyncMedia { cdn, concurrency } => {
            let db = init_app_data(&cli.data_dir, None).await?;
            let manager = MediaSyncManager::with_database(
                &db,
                cdn,
                SyncConfig::new(media_dir).with_concurrency(concurrency),
            );

            println!("Downloading missing animations...");
            let result = manager
                .download_all_animated_images(Some(progress_printer()))
                .await?;

            if result.success {
                println!("All animations downloaded");
            } else {
                println!(
                    "{} animation(s) failed: {:?}",
                    result.failed_ids.len(),
                    result.failed_ids
                );
            }
        }
        Commands::ClearMedia { cdn } => {
            let db = init_app_data(&cli.data_dir, None).await?;
            let manager =
                MediaSyncManager::with_database(&db, cdn, SyncConfig::new(media_dir));

            println!("Deleting cached animations...");
            let result = manager
                .delete_all_animated_images(Some(progress_printer()))
                .await?;

            if result.success {
                println!("Animation cache cleared");
            } else {
                println!(
                    "{} file(s) could not be removed: {:?}",
                    result.failed_ids.len(),
                    result.failed_ids
                );
            }
        }
        Commands::Stats => {
            let db = init_app_data(&cli.data_dir, None).await?;
            let stats = db.stats().await?;
            println!("Exercises:          {}", stats.exercises);
            println!("Cached animations:  {}", stats.cached_animations);
            println!("Plans:              {}", stats.plans);
            println!("Sessions:           {}", stats.sessions);
        }
    }

    Ok(())
}
