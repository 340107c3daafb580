use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::error::SchedulerError;

/// A unit of work handed to the host's main thread. Runs exactly once.
pub type MainThreadTask = Box<dyn FnOnce() + Send + 'static>;

/// One-way handoff onto the host's main processing thread.
///
/// `schedule` must not block and must not expose completion: once a task is
/// accepted it is irrevocably queued (fire-and-forget, no cancellation).
/// Ordering between tasks scheduled from different threads is whatever the
/// host loop yields; tasks from one thread run in submission order.
pub trait MainThreadScheduler: Send + Sync {
    fn schedule(&self, task: MainThreadTask) -> Result<(), SchedulerError>;
}

/// Queue-backed scheduler for hosts that drain tasks from their main loop.
///
/// The sender half is cheap to clone and implements [`MainThreadScheduler`];
/// the [`MainThreadGate`] half lives on the main thread and drains pending
/// tasks each tick (or awaits them, for async hosts).
#[derive(Clone)]
pub struct MainThreadQueue {
    tx: UnboundedSender<MainThreadTask>,
}

impl MainThreadQueue {
    /// Create the queue and its drain half.
    pub fn pair() -> (Self, MainThreadGate) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, MainThreadGate { rx })
    }
}

impl MainThreadScheduler for MainThreadQueue {
    fn schedule(&self, task: MainThreadTask) -> Result<(), SchedulerError> {
        self.tx.send(task).map_err(|_| {
            warn!("main-thread gate dropped; rejecting task");
            SchedulerError::Shutdown
        })
    }
}

/// Drain half of a [`MainThreadQueue`]. Owned by the host's main loop.
pub struct MainThreadGate {
    rx: UnboundedReceiver<MainThreadTask>,
}

impl MainThreadGate {
    /// Run every task queued so far without blocking. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        loop {
            match self.rx.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return ran,
            }
        }
    }

    /// Await and run tasks until every sender half has been dropped.
    pub async fn run(mut self) {
        while let Some(task) = self.rx.recv().await {
            task();
        }
    }
}
