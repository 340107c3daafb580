use std::sync::Arc;

use courier_core::{Invoker, MainThreadScheduler};
use tracing::debug;

use crate::error::Result;

/// Deliver `text`, choosing the execution context by invoker kind.
///
/// Player, console and remote-console messaging is guaranteed thread-safe
/// by the host runtime, so those sends happen immediately on the calling
/// thread, in call order. Any other kind carries no such guarantee: the
/// send is boxed into a one-shot task and handed to the main-thread
/// scheduler, and this function returns without waiting — completion is
/// never observable to the caller.
///
/// A rejected handoff (host shutting down) is the only error path.
pub fn deliver_plain(
    invoker: &Arc<dyn Invoker>,
    text: &str,
    scheduler: &dyn MainThreadScheduler,
) -> Result<()> {
    if invoker.kind().thread_safe_delivery() {
        invoker.send_message(text);
        return Ok(());
    }

    debug!(kind = %invoker.kind(), "invoker not thread-safe; deferring delivery to main thread");
    let target = Arc::clone(invoker);
    let line = text.to_string();
    scheduler.schedule(Box::new(move || target.send_message(&line)))?;
    Ok(())
}
