//! UI-agnostic vocabulary shared by the kernel and its hosts.

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{Key, KeyCode, Modifiers};
