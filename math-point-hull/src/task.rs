//! Background hull construction for render loops
//!
//! The worker owns its builder outright and publishes the finished
//! [`HullResult`] exactly once through a `OnceLock`, so a reader sees either
//! nothing or a complete result.

use crate::builder::HullBuilder;
use crate::config::HullConfig;
use crate::result::{HullResult, HullStatus};
use crate::types::Point3;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};

/// A hull being built on a worker thread
#[derive(Debug)]
pub struct HullTask {
    published: Arc<OnceLock<HullResult>>,
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    input_points: usize,
}

impl HullTask {
    /// Start building the hull of `points` on a new thread.
    pub fn spawn(points: Vec<Point3>, config: HullConfig) -> Self {
        let published = Arc::new(OnceLock::new());
        let cancel = Arc::new(AtomicBool::new(false));

        let slot = Arc::clone(&published);
        let input_points = points.len();
        let builder = HullBuilder::new(config).with_cancel_flag(Arc::clone(&cancel));
        let worker = thread::spawn(move || {
            let result = builder.run(&points);
            if slot.set(result).is_err() {
                log::error!("hull result was already published");
            }
        });

        Self {
            published,
            cancel,
            worker: Some(worker),
            input_points,
        }
    }

    /// The finished result, or `None` while the worker is still running
    pub fn result(&self) -> Option<&HullResult> {
        self.published.get()
    }

    pub fn is_finished(&self) -> bool {
        self.published.get().is_some()
    }

    /// Ask the worker to stop at its next step; it still publishes a
    /// (`Cancelled`) result.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Block until the worker has published, then take the result.
    pub fn wait(mut self) -> HullResult {
        self.join();
        let published = match Arc::try_unwrap(std::mem::take(&mut self.published)) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.get().cloned(),
        };

        published.unwrap_or_else(|| {
            log::error!("hull worker exited without publishing a result");
            HullResult::failed(HullStatus::Degenerate, self.input_points)
        })
    }

    fn join(&mut self) {
        if let Some(handle) = self.worker.take()
            && handle.join().is_err()
        {
            log::error!("hull worker panicked");
        }
    }
}

impl Drop for HullTask {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.cancel();
            self.join();
        }
    }
}
