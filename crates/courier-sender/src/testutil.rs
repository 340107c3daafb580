//! Shared test doubles for the adapter's unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use courier_core::{Invoker, InvokerKind};
use uuid::Uuid;

use crate::handler::RichMessageHandler;

/// Scriptable invoker: fixed kind/identity, a permission table keyed by
/// node name holding `(is_set, value)`, and a log of delivered messages.
pub(crate) struct FakeInvoker {
    kind: InvokerKind,
    name: Option<String>,
    id: Option<Uuid>,
    perms: HashMap<String, (bool, bool)>,
    messages: Mutex<Vec<String>>,
}

impl FakeInvoker {
    pub fn of_kind(kind: InvokerKind) -> Self {
        Self {
            kind,
            name: None,
            id: None,
            perms: HashMap::new(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn player(name: &str, id: Uuid) -> Self {
        Self {
            kind: InvokerKind::Player,
            name: Some(name.to_string()),
            id: Some(id),
            perms: HashMap::new(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn with_perm(mut self, node: &str, is_set: bool, value: bool) -> Self {
        self.perms.insert(node.to_string(), (is_set, value));
        self
    }

    /// Everything delivered so far, in order.
    pub fn sent(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Invoker for FakeInvoker {
    fn kind(&self) -> InvokerKind {
        self.kind
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn unique_id(&self) -> Option<Uuid> {
        self.id
    }

    fn send_message(&self, text: &str) {
        self.messages.lock().unwrap().push(text.to_string());
    }

    fn is_permission_set(&self, node: &str) -> bool {
        self.perms.get(node).map(|p| p.0).unwrap_or(false)
    }

    fn has_permission(&self, node: &str) -> bool {
        self.perms.get(node).map(|p| p.1).unwrap_or(false)
    }
}

/// Structured-delivery mechanism that counts attempts and answers a fixed
/// accept/decline, recording the last payload it saw.
pub(crate) struct ScriptedHandler {
    accept: bool,
    calls: AtomicUsize,
    last_json: Mutex<Option<String>>,
}

impl ScriptedHandler {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            calls: AtomicUsize::new(0),
            last_json: Mutex::new(None),
        }
    }

    pub fn declining() -> Self {
        Self {
            accept: false,
            calls: AtomicUsize::new(0),
            last_json: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_json(&self) -> Option<String> {
        self.last_json.lock().unwrap().clone()
    }
}

impl RichMessageHandler for ScriptedHandler {
    fn try_send(&self, _invoker: &dyn Invoker, json: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_json.lock().unwrap() = Some(json.to_string());
        self.accept
    }
}
