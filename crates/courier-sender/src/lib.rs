//! Adapter that unifies heterogeneous host command invokers (player, local
//! console, remote console, plugin-defined sources) behind one sender
//! surface: stable identity, tri-state permission evaluation, and plain or
//! rich message delivery.
//!
//! Delivery policy in one line: rich messages try the structured mechanisms
//! in fixed order and fall back to legacy text; plain text is sent on the
//! calling thread for the kinds the host guarantees thread-safe and handed
//! to the main-thread scheduler for everything else.

pub mod capability;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod identity;
pub mod permission;
pub mod rich;
pub mod sender;

#[cfg(test)]
pub(crate) mod testutil;

pub use capability::{CapabilityFlags, SenderConfig};
pub use error::SenderError;
pub use handler::RichMessageHandler;
pub use sender::SenderAdapter;
