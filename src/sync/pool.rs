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


//! Fixed-size worker pool over a shared pull-queue
//!
//! A batch is a queue of work items drained by a fixed number of worker
//! chains. A shared pull-queue (rather than static partitioning) keeps
//! workers busy when individual item latencies vary: faster workers absorb
//! more of the remaining queue. The fixed chain count bounds concurrent
//! network and file-descriptor pressure.
//!
//! Per-item failures are recorded and the batch continues; there are no
//! retries within a run and no cancellation. Once started, a batch runs
//! until every item has settled.

use crate::error::Result;
use crate::sync::progress::{ProgressCallback, ProgressCounter};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// One unit of transfer work tied to a single exercise's animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub exercise_id: i64,
    /// Remote locator of the animation, when known
    pub remote_locator: Option<String>,
    /// Local path of the cached animation, when one is recorded
    pub local_locator: Option<String>,
}

impl WorkItem {
    pub fn new(exercise_id: i64) -> Self {
        Self {
            exercise_id,
            remote_locator: None,
            local_locator: None,
        }
    }
}

/// Terminal summary of one batch invocation
///
/// `success` holds exactly when no item failed. Produced once, after every
/// worker chain has joined; a fresh invocation starts fresh counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub success: bool,
    /// Exercise ids whose transfer failed, in settle order
    pub failed_ids: Vec<i64>,
}

impl BatchResult {
    pub(crate) fn from_failures(failed_ids: Vec<i64>) -> Self {
        Self {
            success: failed_ids.is_empty(),
            failed_ids,
        }
    }
}

/// Drain `items` with at most `concurrency` workers in flight
///
/// Exactly one worker chain processes each item; chains pull from the
/// front of a shared queue until it is empty, then terminate. The call
/// returns only after every chain has joined. `on_progress`, when given,
/// fires once per settled item with `completed / total`.
///
/// A failing worker marks its item's id as failed; it never aborts the
/// batch or its sibling chains.
pub async fn run_batch<W, Fut>(
    items: Vec<WorkItem>,
    concurrency: usize,
    on_progress: Option<ProgressCallback>,
    worker: W,
) -> BatchResult
where
    W: Fn(WorkItem) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let total = items.len();
    let queue = Arc::new(Mutex::new(VecDeque::from(items)));
    let progress = Arc::new(ProgressCounter::new(total, on_progress));
    let failed: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
    let worker = Arc::new(worker);

    // Chains beyond the item count would only observe an empty queue
    let chains = concurrency.max(1).min(total.max(1));

    let mut handles = Vec::with_capacity(chains);
    for _ in 0..chains {
        let queue = Arc::clone(&queue);
        let progress = Arc::clone(&progress);
        let failed = Arc::clone(&failed);
        let worker = Arc::clone(&worker);

        handles.push(tokio::spawn(async move {
            loop {
                // Dequeue without holding the lock across the await below
                let item = queue.lock().unwrap().pop_front();
                let Some(item) = item else { break };

                let exercise_id = item.exercise_id;
                if let Err(e) = worker(item).await {
                    warn!(exercise_id, error = %e, "item transfer failed");
                    failed.lock().unwrap().push(exercise_id);
                }
                progress.on_item_settled();
            }
        }));
    }

    for handle in handles {
        // A panicked chain loses only its in-flight item; the rest of the
        // queue is drained by the surviving chains.
        if let Err(e) = handle.await {
            warn!(error = %e, "worker chain aborted");
        }
    }

    let failed_ids = std::mem::take(&mut *failed.lock().unwrap());
    BatchResult::from_failures(failed_ids)
}
