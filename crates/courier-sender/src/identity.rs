use courier_core::{console_uuid, Identity, Invoker, CONSOLE_NAME};
use uuid::Uuid;

/// Display name for `invoker`. Every non-player shares the console name.
pub fn name(invoker: &dyn Invoker) -> String {
    invoker
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| CONSOLE_NAME.to_string())
}

/// Unique id for `invoker`. Every non-player shares the nil sentinel; the
/// convergence is deliberate, non-player sources are one logical actor.
pub fn uuid(invoker: &dyn Invoker) -> Uuid {
    invoker.unique_id().unwrap_or_else(console_uuid)
}

/// Full resolved identity. Recomputed per call; the lookups are cheap and
/// nothing here is worth caching.
pub fn identity(invoker: &dyn Invoker) -> Identity {
    Identity {
        name: name(invoker),
        id: uuid(invoker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeInvoker;
    use courier_core::InvokerKind;

    #[test]
    fn players_keep_platform_identity() {
        let id = Uuid::new_v4();
        let inv = FakeInvoker::player("alice", id);
        assert_eq!(name(&inv), "alice");
        assert_eq!(uuid(&inv), id);
        assert!(!identity(&inv).is_console());
    }

    #[test]
    fn distinct_players_resolve_distinct_ids() {
        let a = FakeInvoker::player("alice", Uuid::new_v4());
        let b = FakeInvoker::player("bob", Uuid::new_v4());
        assert_ne!(uuid(&a), uuid(&b));
    }

    #[test]
    fn all_non_player_kinds_share_the_sentinels() {
        let console = FakeInvoker::of_kind(InvokerKind::Console);
        let remote = FakeInvoker::of_kind(InvokerKind::RemoteConsole);
        let other = FakeInvoker::of_kind(InvokerKind::Other);

        for inv in [&console, &remote, &other] {
            assert_eq!(name(inv), CONSOLE_NAME);
            assert_eq!(uuid(inv), Uuid::nil());
        }
        assert_eq!(identity(&console), identity(&remote));
        assert!(identity(&other).is_console());
    }
}
