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


//! Batch progress reporting
//!
//! The UI renders a single progress bar for a sync batch, fed by a
//! fractional callback. The callback fires exactly once per settled item
//! (success or failure), immediately after the outcome is known; it is
//! never batched or debounced.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Callback invoked with the batch completion fraction in `[0, 1]`
pub type ProgressCallback = std::sync::Arc<dyn Fn(f64) + Send + Sync>;

/// Monotonic settled-item counter for one batch
///
/// Invariant: `0 <= completed <= total`. For `total == 0` the callback is
/// never invoked (there is no meaningful fraction to report).
pub struct ProgressCounter {
    completed: AtomicUsize,
    total: usize,
    callback: Option<ProgressCallback>,
}

impl ProgressCounter {
    pub fn new(total: usize, callback: Option<ProgressCallback>) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
            callback,
        }
    }

    /// Record one settled item and report the new fraction
    pub fn on_item_settled(&self) {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;

        if self.total == 0 {
            return;
        }
        debug_assert!(completed <= self.total);

        if let Some(callback) = &self.callback {
            callback(completed as f64 / self.total as f64);
        }
    }

    /// Items settled so far
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Items in the batch, fixed at creation
    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn fractions_step_up_to_one() {
        let reported: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
        let reported_cb = Arc::clone(&reported);
        let counter = ProgressCounter::new(
            4,
            Some(Arc::new(move |f| reported_cb.lock().unwrap().push(f))),
        );

        for _ in 0..4 {
            counter.on_item_settled();
        }

        assert_eq!(counter.completed(), 4);
        assert_eq!(*reported.lock().unwrap(), vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn zero_total_never_reports() {
        let fired = Arc::new(Mutex::new(0u32));
        let fired_cb = Arc::clone(&fired);
        let counter =
            ProgressCounter::new(0, Some(Arc::new(move |_| *fired_cb.lock().unwrap() += 1)));

        // A spurious settle on an empty batch must not report a fraction
        counter.on_item_settled();

        assert_eq!(counter.total(), 0);
        assert_eq!(*fired.lock().unwrap(), 0);
    }

    #[test]
    fn missing_callback_is_fine() {
        let counter = ProgressCounter::new(2, None);
        counter.on_item_settled();
        counter.on_item_settled();
        assert_eq!(counter.completed(), 2);
    }
}
