use thiserror::Error;

/// Errors from the main-thread handoff.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The drain half of the queue is gone; the host is shutting down.
    #[error("Main-thread queue is shut down; task rejected")]
    Shutdown,
}
