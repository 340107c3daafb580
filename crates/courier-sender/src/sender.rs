use std::sync::Arc;

use courier_core::{Identity, Invoker, MainThreadScheduler, Tristate};
use courier_text::Component;
use uuid::Uuid;

use crate::capability::{CapabilityFlags, SenderConfig};
use crate::dispatch::deliver_plain;
use crate::error::Result;
use crate::handler::RichMessageHandler;
use crate::rich::deliver_rich;
use crate::{identity, permission};

/// The adapter surface: one object through which a host-side factory can
/// address any invoker uniformly.
///
/// Holds the only adapter-lifetime state there is — the two structured
/// delivery mechanisms, the scheduler handle, the construction-time config
/// and the probed capability flags. Every per-invoker answer (identity,
/// permissions, delivery) is computed fresh per call.
pub struct SenderAdapter {
    primary: Box<dyn RichMessageHandler>,
    secondary: Box<dyn RichMessageHandler>,
    scheduler: Arc<dyn MainThreadScheduler>,
    config: SenderConfig,
    flags: CapabilityFlags,
}

impl SenderAdapter {
    /// Build an adapter, running the secondary-capability probe exactly
    /// once. The probe closure is the host's environment detection; it is
    /// never invoked again for the lifetime of the adapter.
    pub fn new(
        primary: Box<dyn RichMessageHandler>,
        secondary: Box<dyn RichMessageHandler>,
        scheduler: Arc<dyn MainThreadScheduler>,
        config: SenderConfig,
        probe_secondary: impl FnOnce() -> bool,
    ) -> Self {
        let flags = CapabilityFlags::detect(probe_secondary);
        Self {
            primary,
            secondary,
            scheduler,
            config,
            flags,
        }
    }

    /// The flags frozen at construction.
    pub fn flags(&self) -> CapabilityFlags {
        self.flags
    }

    /// Display name; non-players share the console sentinel.
    pub fn name(&self, invoker: &dyn Invoker) -> String {
        identity::name(invoker)
    }

    /// Unique id; non-players share the nil sentinel.
    pub fn uuid(&self, invoker: &dyn Invoker) -> Uuid {
        identity::uuid(invoker)
    }

    /// Full resolved identity.
    pub fn identity(&self, invoker: &dyn Invoker) -> Identity {
        identity::identity(invoker)
    }

    /// Deliver plain text via the thread-affinity dispatcher.
    pub fn send_plain(&self, invoker: &Arc<dyn Invoker>, text: &str) -> Result<()> {
        deliver_plain(invoker, text, self.scheduler.as_ref())
    }

    /// Deliver a rich component via the structured chain, degrading to
    /// legacy text when no mechanism applies.
    pub fn send_rich(&self, invoker: &Arc<dyn Invoker>, component: &Component) -> Result<()> {
        deliver_rich(
            invoker,
            component,
            self.primary.as_ref(),
            self.secondary.as_ref(),
            self.flags,
            self.config,
            self.scheduler.as_ref(),
        )
    }

    /// Tri-state permission answer for `node`.
    pub fn permission_tristate(&self, invoker: &dyn Invoker, node: &str) -> Tristate {
        permission::permission_tristate(invoker, node)
    }

    /// Raw boolean permission answer for `node`.
    pub fn has_permission(&self, invoker: &dyn Invoker, node: &str) -> bool {
        permission::has_permission(invoker, node)
    }
}
