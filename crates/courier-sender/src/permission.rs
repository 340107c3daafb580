use courier_core::{Invoker, Tristate};

/// Map the host's two-boolean permission query onto a tri-state outcome.
///
/// A node with no explicit setting whose default answer is `false` resolves
/// to `Undefined`, not `False`: the host's default-deny is not an explicit
/// denial, and inheritance logic downstream treats the two differently. A
/// node with no explicit setting but a positive default resolves to `True`.
/// With an explicit setting the boolean maps directly.
pub fn permission_tristate(invoker: &dyn Invoker, node: &str) -> Tristate {
    let is_set = invoker.is_permission_set(node);
    let value = invoker.has_permission(node);

    match (is_set, value) {
        (false, true) => Tristate::True,
        (false, false) => Tristate::Undefined,
        (true, v) => Tristate::from_bool(v),
    }
}

/// The host's raw yes/no answer for `node`, with no tri-state translation.
pub fn has_permission(invoker: &dyn Invoker, node: &str) -> bool {
    invoker.has_permission(node)
}
