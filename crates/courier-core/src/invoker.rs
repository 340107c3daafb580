use uuid::Uuid;

use crate::types::InvokerKind;

/// Host-platform surface consumed by the sender adapter.
///
/// One implementation exists per host invoker representation (a player
/// entity, the local console, a remote console session, or any
/// plugin-defined source). All methods are cheap synchronous host lookups.
///
/// Implementations must be `Send + Sync` so one adapter can be driven from
/// arbitrary worker threads; thread-affinity of the delivery itself is the
/// dispatcher's concern, not the trait's.
pub trait Invoker: Send + Sync {
    /// Which of the closed invoker kinds this source is.
    fn kind(&self) -> InvokerKind;

    /// Platform-reported display name. `None` for non-player sources;
    /// identity resolution substitutes the console sentinel.
    fn name(&self) -> Option<&str>;

    /// Platform-reported unique id. `None` for non-player sources.
    fn unique_id(&self) -> Option<Uuid>;

    /// Deliver one plain chat line through the host's native path.
    ///
    /// Callers must not invoke this directly for [`InvokerKind::Other`]
    /// sources from off the main thread; the dispatcher routes those
    /// through the scheduler.
    fn send_message(&self, text: &str);

    /// Whether `node` carries an explicit setting for this invoker.
    fn is_permission_set(&self, node: &str) -> bool;

    /// The host's raw yes/no permission answer for `node`, defaults included.
    fn has_permission(&self, node: &str) -> bool;
}
