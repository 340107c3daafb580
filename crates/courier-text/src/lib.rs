//! Rich-text document model for the courier sender: a component tree with
//! named colors and style flags, its JSON chat wire form, and the lossy
//! legacy (`§`-coded) flattening every invoker can receive.

pub mod component;
pub mod error;
pub mod json;
pub mod legacy;

pub use component::{Color, Component};
pub use error::TextError;
pub use json::{from_json, to_json};
pub use legacy::to_legacy;
