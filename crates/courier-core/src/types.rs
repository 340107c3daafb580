use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Display name shared by every non-player invoker.
pub const CONSOLE_NAME: &str = "Console";

/// Sentinel id shared by every non-player invoker (the nil UUID).
pub fn console_uuid() -> Uuid {
    Uuid::nil()
}

/// Closed set of command-invoker kinds.
///
/// Anything the host cannot positively classify reports [`InvokerKind::Other`],
/// which the dispatcher treats as unsafe for calling-thread delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvokerKind {
    Player,
    Console,
    RemoteConsole,
    Other,
}

impl InvokerKind {
    /// True for the kinds the host runtime guarantees are safe to message
    /// from any thread. `Other` carries no such guarantee.
    pub fn thread_safe_delivery(&self) -> bool {
        matches!(
            self,
            InvokerKind::Player | InvokerKind::Console | InvokerKind::RemoteConsole
        )
    }
}

impl fmt::Display for InvokerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvokerKind::Player => "player",
            InvokerKind::Console => "console",
            InvokerKind::RemoteConsole => "remote_console",
            InvokerKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Resolved identity of an invoker.
///
/// All non-player invokers converge on the same console name and nil id.
/// That convergence is deliberate: the host treats every non-player source
/// as one logical console actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub id: Uuid,
}

impl Identity {
    /// The shared console identity.
    pub fn console() -> Self {
        Self {
            name: CONSOLE_NAME.to_string(),
            id: console_uuid(),
        }
    }

    /// True when this identity is the shared console sentinel.
    pub fn is_console(&self) -> bool {
        self.id == console_uuid()
    }
}

/// Three-valued permission outcome.
///
/// Distinguishes an explicit grant, an explicit denial, and the complete
/// absence of a setting. Callers pattern-match this rather than collapsing
/// it to a boolean, because inheritance logic downstream treats `Undefined`
/// differently from `False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tristate {
    True,
    False,
    Undefined,
}

impl Tristate {
    /// Map an explicit boolean setting. Never produces `Undefined`.
    pub fn from_bool(value: bool) -> Self {
        if value {
            Tristate::True
        } else {
            Tristate::False
        }
    }

    /// Collapse to a boolean for callers that only need a yes/no answer.
    ///
    /// `Undefined` collapses to `true`: only an explicit denial answers no.
    pub fn as_bool(&self) -> bool {
        !matches!(self, Tristate::False)
    }
}

impl fmt::Display for Tristate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tristate::True => "true",
            Tristate::False => "false",
            Tristate::Undefined => "undefined",
        };
        write!(f, "{}", s)
    }
}
