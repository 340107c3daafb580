//! Core abstractions shared by the courier sender adapter: the invoker
//! trait (the host-platform surface we consume), identity and tri-state
//! permission types, and the main-thread scheduler seam.

pub mod error;
pub mod invoker;
pub mod scheduler;
pub mod types;

pub use error::SchedulerError;
pub use invoker::Invoker;
pub use scheduler::{MainThreadGate, MainThreadQueue, MainThreadScheduler, MainThreadTask};
pub use types::{console_uuid, Identity, InvokerKind, Tristate, CONSOLE_NAME};
