use std::sync::Arc;

use courier_core::{Invoker, InvokerKind, MainThreadScheduler};
use courier_text::{to_json, to_legacy, Component};
use tracing::debug;

use crate::capability::{CapabilityFlags, SenderConfig};
use crate::dispatch::deliver_plain;
use crate::error::Result;
use crate::handler::RichMessageHandler;

/// Deliver a rich component, degrading through the fixed mechanism order.
///
/// 1. Structured delivery is only possible for players on a
///    structured-chat-capable host; everything else goes straight to the
///    legacy fallback.
/// 2. The component is serialized once. Serialization failure means a
///    malformed document and propagates — it is never downgraded to plain
///    text.
/// 3. Primary mechanism first, then the secondary, and the secondary only
///    when the construction-time probe found it. The order is fixed: it
///    reflects API stability preference, not reliability. First acceptance
///    wins.
/// 4. Otherwise the component is flattened to legacy text and delivered
///    through the thread-affinity dispatcher, so a message is never
///    silently dropped.
pub fn deliver_rich(
    invoker: &Arc<dyn Invoker>,
    component: &Component,
    primary: &dyn RichMessageHandler,
    secondary: &dyn RichMessageHandler,
    flags: CapabilityFlags,
    config: SenderConfig,
    scheduler: &dyn MainThreadScheduler,
) -> Result<()> {
    if config.structured_chat && invoker.kind() == InvokerKind::Player {
        let json = to_json(component)?;

        if primary.try_send(invoker.as_ref(), &json) {
            return Ok(());
        }
        if flags.secondary_rich_text && secondary.try_send(invoker.as_ref(), &json) {
            return Ok(());
        }

        debug!("structured mechanisms declined; falling back to legacy text");
    }

    deliver_plain(invoker, &to_legacy(component), scheduler)
}
