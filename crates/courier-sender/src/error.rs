use courier_core::SchedulerError;
use courier_text::TextError;
use thiserror::Error;

/// Errors the adapter surfaces to its caller.
///
/// Capability absence and per-mechanism "unsupported" answers are not
/// errors; they are handled inside the delivery chain. What remains is a
/// malformed document or a rejected main-thread handoff, both fatal for
/// the call that hit them. No retries anywhere.
#[derive(Debug, Error)]
pub enum SenderError {
    #[error("Rich-text serialization failed: {0}")]
    Serialization(#[from] TextError),

    #[error("Main-thread scheduling failed: {0}")]
    Scheduling(#[from] SchedulerError),
}

pub type Result<T> = std::result::Result<T, SenderError>;
