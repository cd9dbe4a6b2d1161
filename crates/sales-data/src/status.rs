// File: crates/sales-data/src/status.rs
// Summary: Background ingest thread with a polled completion signal.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use log::{error, info};

use crate::ingest::load_and_publish;
use crate::store::SalesStore;

/// Snapshot of the background ingest. The UI polls this before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IngestStatus {
    Running,
    Done,
    Failed(String),
}

/// Shared handle to the one ingest worker.
#[derive(Clone)]
pub struct IngestHandle {
    status: Arc<Mutex<IngestStatus>>,
}

impl IngestHandle {
    pub fn status(&self) -> IngestStatus {
        self.status
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn is_done(&self) -> bool {
        self.status() == IngestStatus::Done
    }
}

/// Run `load_and_publish` on a worker thread so the window stays responsive.
/// Failures land in the handle as a user-presentable message; nothing is
/// retried.
pub fn spawn_ingest(csv_path: PathBuf, store: SalesStore) -> IngestHandle {
    let status = Arc::new(Mutex::new(IngestStatus::Running));
    let shared = Arc::clone(&status);
    thread::spawn(move || {
        let outcome = match load_and_publish(&csv_path, &store) {
            Ok(()) => {
                info!("sales data loaded from {}", csv_path.display());
                IngestStatus::Done
            }
            Err(e) => {
                error!("ingest failed: {e}");
                IngestStatus::Failed(e.to_string())
            }
        };
        if let Ok(mut s) = shared.lock() {
            *s = outcome;
        }
    });
    IngestHandle { status }
}
