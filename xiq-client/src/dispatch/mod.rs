//! Fixed-size worker pool that runs the command batch on every selected device.
//!
//! The producer pushes devices into a bounded queue sized to the concurrency
//! limit and closes it; `limit` workers drain the queue and the call returns
//! once every worker has exited. A failing device only affects its own line
//! of output.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::{
    sync::{Mutex, mpsc},
    task::JoinSet,
};
use tracing::{debug, error, warn};

use crate::error::DispatchError;
use crate::exec;
use crate::server::{CommandOutcome, DeviceRecord};

/// Share of the selected devices that may be in flight at once.
pub const CONCURRENCY_FRACTION: f64 = 0.2;

#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, device: &DeviceRecord) -> Result<Vec<CommandOutcome>, DispatchError>;
}

/// `max(1, floor(device_count * CONCURRENCY_FRACTION))`.
pub fn concurrency_limit(device_count: usize) -> usize {
    let limit = (device_count as f64 * CONCURRENCY_FRACTION).floor() as usize;
    limit.max(1)
}

/// Per-run tallies. Each worker keeps its own and they are summed after the join.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub processed: usize,
    pub failed: usize,
    pub printed: usize,
}

impl DispatchSummary {
    fn record(
        &mut self,
        device: &DeviceRecord,
        result: Result<Vec<CommandOutcome>, DispatchError>,
    ) {
        self.processed += 1;
        match result {
            Ok(outcomes) => self.printed += exec::print_successful_outputs(device, &outcomes),
            Err(err) => {
                self.failed += 1;
                error!(
                    device_id = device.id,
                    hostname = %device.hostname,
                    "Error: {}",
                    err
                );
            }
        }
    }

    fn merge(&mut self, other: DispatchSummary) {
        self.processed += other.processed;
        self.failed += other.failed;
        self.printed += other.printed;
    }
}

type DeviceQueue = Arc<Mutex<mpsc::Receiver<DeviceRecord>>>;

/// Run `executor` once for every device, at most `concurrency_limit` at a time.
///
/// Blocks until the queue is drained and all workers have exited.
pub async fn dispatch<E>(devices: Vec<DeviceRecord>, executor: Arc<E>) -> DispatchSummary
where
    E: CommandExecutor + ?Sized + 'static,
{
    let limit = concurrency_limit(devices.len());
    let total = devices.len();
    debug!(devices = total, workers = limit, "Starting dispatch pool");

    let (tx, rx) = mpsc::channel::<DeviceRecord>(limit);
    let queue: DeviceQueue = Arc::new(Mutex::new(rx));

    let mut workers = JoinSet::new();
    for worker_id in 0..limit {
        workers.spawn(worker(worker_id, queue.clone(), executor.clone()));
    }
    drop(queue);

    let mut queued = 0;
    for device in devices {
        if tx.send(device).await.is_err() {
            break;
        }
        queued += 1;
    }
    // Closing the queue lets the workers exit once it is drained.
    drop(tx);

    if queued < total {
        warn!(
            queued,
            total, "All dispatch workers stopped before every device was queued"
        );
    }

    let mut summary = DispatchSummary::default();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(tally) => summary.merge(tally),
            Err(e) => error!("Dispatch worker failed: {}", e),
        }
    }

    debug!(
        processed = summary.processed,
        failed = summary.failed,
        printed = summary.printed,
        "Dispatch pool finished"
    );
    summary
}

async fn worker<E>(worker_id: usize, queue: DeviceQueue, executor: Arc<E>) -> DispatchSummary
where
    E: CommandExecutor + ?Sized,
{
    let mut tally = DispatchSummary::default();
    loop {
        // The lock is only held while waiting for the next device.
        let next = queue.lock().await.recv().await;
        let Some(device) = next else {
            break;
        };

        debug!(worker_id, device = %device, "Executing commands");
        let result = executor.execute(&device).await;
        tally.record(&device, result);
    }
    tally
}
