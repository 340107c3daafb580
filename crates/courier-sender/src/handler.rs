use courier_core::Invoker;

/// One structured-delivery mechanism offered by the host environment.
///
/// The chain holds a primary and an optional secondary implementation and
/// tries them in that fixed order. `try_send` answers `false` when the
/// mechanism does not apply to this invoker or payload — an expected
/// outcome, never an error — and `true` when the payload was accepted.
pub trait RichMessageHandler: Send + Sync {
    fn try_send(&self, invoker: &dyn Invoker, json: &str) -> bool;
}
